// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::Args;
use showrunner::{DEFAULT_LOG_FILE_NAME, DisplayPreference, TracingConfig, WriterConfig};

/// Options shared by every app.
#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `log.txt` for debugging"
    )]
    pub enable_logging: bool,

    #[arg(
        global = true,
        long,
        short = 'v',
        help = "Print debug output to stderr"
    )]
    pub verbose: bool,
}

impl GlobalOption {
    /// Logging is off unless one of the flags is set. Both flags log at `DEBUG`.
    #[must_use]
    pub fn tracing_config(&self) -> TracingConfig {
        let mut acc = TracingConfig::default();
        if self.enable_logging {
            acc = acc + WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()).into();
        }
        if self.verbose {
            acc = acc + DisplayPreference::Stderr.into();
        }
        acc
    }
}
