// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! `ros`: compile a run-of-show CSV into a show document.

// Attach sources.
pub mod clap_config;
pub mod compile;
pub mod launcher;
pub mod ui_str;

// Re-export.
pub use clap_config::*;
pub use compile::*;
pub use launcher::*;
