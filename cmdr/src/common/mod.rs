// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod csv_input;
pub mod global_option;

// Re-export.
pub use csv_input::*;
pub use global_option::*;
