// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fs, path::PathBuf};

use miette::{Context, IntoDiagnostic};
use showrunner::{DEFAULT_DECK_TEMPLATE, DeckFile, ShowrunnerError, export_decks, read_rows,
                 write_deck_files};

use crate::try_read_csv;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    pub csv_path: PathBuf,
    pub base_name: String,
    /// `None` uses [`DEFAULT_DECK_TEMPLATE`].
    pub template_path: Option<PathBuf>,
    pub title: String,
    pub out_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub row_count: usize,
    pub files: Vec<DeckFile>,
}

/// Read the CSV and the template, then write one deck per mode into `out_dir`, which
/// is created if needed.
///
/// # Errors
///
/// Returns an error if an input can't be read, the template lacks a placeholder, or a
/// deck can't be written.
pub fn try_export(options: &ExportOptions) -> miette::Result<ExportReport> {
    let csv = try_read_csv(&options.csv_path)?;
    let rows = read_rows(&csv);

    let template = match &options.template_path {
        Some(template_path) => fs::read_to_string(template_path)
            .into_diagnostic()
            .wrap_err_with(|| {
                format!("Could not read deck template: '{}'", template_path.display())
            })?,
        None => DEFAULT_DECK_TEMPLATE.to_string(),
    };

    fs::create_dir_all(&options.out_dir)
        .into_diagnostic()
        .wrap_err_with(|| ShowrunnerError::WriteOutput {
            path: options.out_dir.clone(),
        })?;

    let files = write_deck_files(
        &export_decks(&rows),
        &template,
        &options.title,
        &options.out_dir,
        &options.base_name,
    )?;

    Ok(ExportReport {
        row_count: rows.len(),
        files,
    })
}

#[cfg(test)]
mod tests_export {
    use super::*;
    use pretty_assertions::assert_eq;
    use showrunner::DeckMode;
    use std::path::Path;
    use tempfile::TempDir;

    const CSV: &str = "section,slide_type,primary_text,answer,answer_source,notes\n\
                       ROUND 1: SOURCE CODE,source_q,DID I STUTTER?,The Office,NBC,\n\
                       ROUND 1: SOURCE CODE,score,ROUND COMPLETE,,,\n";

    fn options(dir: &Path, template_path: Option<PathBuf>) -> ExportOptions {
        let csv_path = dir.join("SPLIT.csv");
        fs::write(&csv_path, CSV).unwrap();
        ExportOptions {
            csv_path,
            base_name: "SPLIT".to_string(),
            template_path,
            title: "THE SPLIT".to_string(),
            out_dir: dir.join("decks"),
        }
    }

    #[test]
    fn test_writes_both_decks() {
        let dir = TempDir::new().unwrap();
        let report = try_export(&options(dir.path(), None)).unwrap();

        assert_eq!(report.row_count, 2);
        let summary: Vec<_> = report
            .files
            .iter()
            .map(|it| (it.mode, it.slide_count))
            .collect();
        assert_eq!(summary, [(DeckMode::Inline, 3), (DeckMode::Sheet, 3)]);

        let sheet = fs::read_to_string(dir.path().join("decks/SPLIT_SHEET.html")).unwrap();
        assert!(sheet.contains("<title>THE SPLIT</title>"));
        assert!(sheet.contains("1. THE OFFICE : NBC"));
    }

    #[test]
    fn test_custom_template() {
        let dir = TempDir::new().unwrap();
        let template_path = dir.path().join("deck.html");
        fs::write(&template_path, "<h1>%%TITLE%%</h1><script>%%DATA%%</script>").unwrap();

        try_export(&options(dir.path(), Some(template_path))).unwrap();

        let inline = fs::read_to_string(dir.path().join("decks/SPLIT_INLINE.html")).unwrap();
        assert!(inline.starts_with("<h1>THE SPLIT</h1><script>["));
    }

    #[test]
    fn test_template_without_placeholder_fails() {
        let dir = TempDir::new().unwrap();
        let template_path = dir.path().join("deck.html");
        fs::write(&template_path, "<h1>%%TITLE%%</h1>").unwrap();

        let error = try_export(&options(dir.path(), Some(template_path))).unwrap_err();
        assert!(error.to_string().contains("%%DATA%%"), "{error}");
    }
}
