// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

//! # Showrunner command line apps
//!
//! Two apps built on the [`showrunner`] crate, each one a `src/bin/*.rs` target that
//! parses its [`clap`] arguments and hands a plain options struct to the run logic in
//! its module folder:
//!
//! - [`ros`]: compile a run-of-show CSV into a show document (`ros-v1.json`), print a
//!   per-section summary, and optionally seed a show storage folder.
//! - [`deck`]: export the two standalone HTML decks, `<BASE>_INLINE.html` and
//!   `<BASE>_SHEET.html`.
//!
//! Both apps accept `--enable-logging` (`-l`) to log to `log.txt` and `--verbose`
//! (`-v`) to log to stderr.

// Attach sources.
pub mod common;
pub mod deck;
pub mod ros;

// Re-export.
pub use common::*;
