// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::ros::{CompileOptions, try_compile, ui_str};

/// Compile and report progress on stdout.
///
/// # Errors
///
/// Returns an error if compiling fails, see [`try_compile`].
pub fn run_app(options: &CompileOptions) -> miette::Result<()> {
    println!("{}", ui_str::parsing_msg(&options.csv_path));

    let report = try_compile(options)?;

    println!("{}", report.summary);
    println!("{}", ui_str::wrote_show_msg(&report.output_path));
    if let Some(storage_dir) = &report.storage_dir {
        println!("{}", ui_str::stored_show_msg(&report.show.id, storage_dir));
    }
    println!("{}", ui_str::done_msg());

    Ok(())
}
