// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Logging setup for the command line apps and tests.
//!
//! Library code only emits [`tracing`] events. Nothing is recorded until one of
//! [`try_initialize_logging_global`] or [`try_initialize_logging_thread_local`] installs
//! a subscriber, and logging is **disabled** by default.

// Attach sources.
pub mod log_public_api;
pub mod rolling_file_appender_impl;
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use log_public_api::*;
pub use tracing_config::*;
pub use tracing_init::*;
