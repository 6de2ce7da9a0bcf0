// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fs, path::Path};

use miette::{Context, IntoDiagnostic};
use showrunner::ShowrunnerError;

/// Used when a CSV path has no file name to borrow.
pub const FALLBACK_SHOW_NAME: &str = "show";

/// Read the whole CSV export into memory.
///
/// # Errors
///
/// Returns [`ShowrunnerError::ReadCsv`] if the file can't be read as UTF-8 text.
pub fn try_read_csv(csv_path: &Path) -> miette::Result<String> {
    fs::read_to_string(csv_path)
        .into_diagnostic()
        .wrap_err_with(|| ShowrunnerError::ReadCsv {
            path: csv_path.to_path_buf(),
        })
}

/// `name` if given, otherwise the CSV file name without its extension.
#[must_use]
pub fn show_name_or_file_stem(name: Option<String>, csv_path: &Path) -> String {
    name.unwrap_or_else(|| {
        csv_path
            .file_stem()
            .map_or_else(|| FALLBACK_SHOW_NAME.to_string(), |it| it.to_string_lossy().to_string())
    })
}
