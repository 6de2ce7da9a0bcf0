// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::Path;

use showrunner::DeckFile;

pub fn unrecoverable_error_message(report: &miette::Report) -> String {
    format!("Error: {report:?}")
}

pub fn loaded_rows_msg(row_count: usize, csv_path: &Path) -> String {
    format!("Loaded: {row_count} rows from {}", csv_path.display())
}

/// `SHEET:  42 slides → SPLIT_SHEET.html (18KB)`, sizes rounded to the nearest KB.
pub fn wrote_deck_msg(deck_file: &DeckFile) -> String {
    let label = format!("{}:", deck_file.mode.as_ref());
    format!(
        "{label:<8}{} slides → {} ({}KB)",
        deck_file.slide_count,
        deck_file.path.display(),
        (deck_file.byte_count + 512) / 1024
    )
}

pub fn done_msg() -> &'static str { "Done. Open the decks in a browser." }
