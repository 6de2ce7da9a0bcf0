// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Playback of a compiled [`crate::Show`].
//!
//! [`reduce`] is the only way a [`State`] changes. It is pure and total: every
//! [`Intent`] produces a new state, out of range targets are clamped, and intents that
//! make no sense for the current state return it unchanged. [`Store`] owns one state and
//! notifies subscribers when it changes. [`SyncPayload`] is the subset of the state that
//! is exchanged with other devices; applying one is a batch of five intents.

// Attach sources.
pub mod intent;
pub mod navigation;
pub mod reducer;
pub mod state;
pub mod store;
pub mod sync;

// Re-export.
pub use intent::*;
pub use navigation::*;
pub use reducer::*;
pub use state::*;
pub use store::*;
pub use sync::*;
