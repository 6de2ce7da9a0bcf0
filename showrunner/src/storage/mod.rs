// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod json_serde;
pub mod show_storage;

// Re-export.
pub use json_serde::*;
pub use show_storage::*;
