// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::deck::{ExportOptions, try_export, ui_str};

/// Export and report progress on stdout.
///
/// # Errors
///
/// Returns an error if exporting fails, see [`try_export`].
pub fn run_app(options: &ExportOptions) -> miette::Result<()> {
    let report = try_export(options)?;

    println!("{}", ui_str::loaded_rows_msg(report.row_count, &options.csv_path));
    for deck_file in &report.files {
        println!("{}", ui_str::wrote_deck_msg(deck_file));
    }
    println!("{}", ui_str::done_msg());

    Ok(())
}
