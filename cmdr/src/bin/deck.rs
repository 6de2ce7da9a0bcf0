// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on how to use CLAP, here is the
//! [derive tutorial](https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html).

use clap::Parser;
use showrunner::try_initialize_logging_global;
use showrunner_cmdr::deck::{CLIArg, ExportOptions, run_app, ui_str};

fn main() {
    // If no args are passed, the following line will fail, and help will be printed
    // thanks to `arg_required_else_help(true)` in the `CLIArg` struct.
    let cli_arg = CLIArg::parse();

    if let Err(report) = try_main(cli_arg) {
        eprintln!("{}", ui_str::unrecoverable_error_message(&report));
        std::process::exit(1);
    }
}

fn try_main(cli_arg: CLIArg) -> miette::Result<()> {
    try_initialize_logging_global(cli_arg.global_options.tracing_config())?;
    // % is Display, ? is Debug.
    tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);

    let result = run_app(&ExportOptions::from(cli_arg));
    if let Err(error) = &result {
        tracing::error!(
            message = "Could not run deck due to the following problem",
            error = ?error
        );
    }

    tracing::debug!(message = "Stop logging...");
    result
}
