// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::Path;

pub fn unrecoverable_error_message(report: &miette::Report) -> String {
    format!("Error: {report:?}")
}

pub fn parsing_msg(csv_path: &Path) -> String {
    format!("Parsing {}...", csv_path.display())
}

pub fn wrote_show_msg(output_path: &Path) -> String {
    format!("Wrote {}", output_path.display())
}

pub fn stored_show_msg(show_id: &str, storage_dir: &Path) -> String {
    format!("Stored show '{show_id}' in {}", storage_dir.display())
}

pub fn done_msg() -> &'static str { "Done." }
