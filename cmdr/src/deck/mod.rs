// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! `deck`: export standalone HTML slide decks from a run-of-show CSV.

// Attach sources.
pub mod clap_config;
pub mod export;
pub mod launcher;
pub mod ui_str;

// Re-export.
pub use clap_config::*;
pub use export::*;
pub use launcher::*;
