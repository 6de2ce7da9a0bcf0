// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Inject deck slides into an HTML template.
//!
//! A template is any HTML document containing `%%TITLE%%` and `%%DATA%%`. The first
//! `%%TITLE%%` becomes the escaped title and the first `%%DATA%%` becomes the slides as
//! a JSON array, so it is meant to sit inside a `<script>` block.

use std::{fs, path::{Path, PathBuf}};

use miette::{Context, IntoDiagnostic};
use strum::IntoEnumIterator;

use crate::{DeckExport, DeckMode, DeckSlide, ShowrunnerError};

pub const TITLE_PLACEHOLDER: &str = "%%TITLE%%";
pub const DATA_PLACEHOLDER: &str = "%%DATA%%";
pub const DEFAULT_DECK_TITLE: &str = "LINECONIC LIVE";
pub const DEFAULT_DECK_TEMPLATE: &str = include_str!("default_template.html");
pub const DECK_FILE_EXTENSION: &str = "html";

/// Escape `& < > "` for use in HTML text and attribute values.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut acc = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => acc.push_str("&amp;"),
            '<' => acc.push_str("&lt;"),
            '>' => acc.push_str("&gt;"),
            '"' => acc.push_str("&quot;"),
            _ => acc.push(ch),
        }
    }
    acc
}

/// The slides as a JSON array that is safe inside a `<script>` element: every `</` is
/// written as `<\/`, which JSON reads back as the same string.
///
/// # Errors
///
/// Returns an error if the slides cannot be serialized.
pub fn slides_to_script_json(slides: &[DeckSlide]) -> miette::Result<String> {
    let json = serde_json::to_string(slides).into_diagnostic()?;
    Ok(json.replace("</", "<\\/"))
}

/// Fill `template` with `title` and `slides`. Placeholder positions are found in the
/// template before anything is substituted, so text inside the title or the slides is
/// never mistaken for a placeholder.
///
/// # Errors
///
/// Returns [`ShowrunnerError::MissingTemplatePlaceholder`] if `template` lacks either
/// placeholder.
pub fn render_deck_html(
    template: &str,
    title: &str,
    slides: &[DeckSlide],
) -> miette::Result<String> {
    let title_at = template
        .find(TITLE_PLACEHOLDER)
        .ok_or(ShowrunnerError::MissingTemplatePlaceholder {
            placeholder: TITLE_PLACEHOLDER,
        })?;
    let title_end = title_at + TITLE_PLACEHOLDER.len();
    let data_at = template
        .match_indices(DATA_PLACEHOLDER)
        .map(|(at, _)| at)
        .find(|&at| at + DATA_PLACEHOLDER.len() <= title_at || at >= title_end)
        .ok_or(ShowrunnerError::MissingTemplatePlaceholder {
            placeholder: DATA_PLACEHOLDER,
        })?;

    let title_html = escape_html(title);
    let data_json = slides_to_script_json(slides)?;

    let mut splices = [
        (title_at, TITLE_PLACEHOLDER.len(), title_html.as_str()),
        (data_at, DATA_PLACEHOLDER.len(), data_json.as_str()),
    ];
    splices.sort_by_key(|(at, _, _)| *at);

    let mut acc = String::with_capacity(template.len() + title_html.len() + data_json.len());
    let mut cursor = 0;
    for (at, len, text) in splices {
        acc.push_str(&template[cursor..at]);
        acc.push_str(text);
        cursor = at + len;
    }
    acc.push_str(&template[cursor..]);

    Ok(acc)
}

/// A deck written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckFile {
    pub mode: DeckMode,
    pub path: PathBuf,
    pub slide_count: usize,
    pub byte_count: usize,
}

/// `<out_dir>/<base_name>_INLINE.html`, `<out_dir>/<base_name>_SHEET.html`.
#[must_use]
pub fn deck_file_path(out_dir: &Path, base_name: &str, mode: DeckMode) -> PathBuf {
    out_dir.join(format!(
        "{base_name}{}.{DECK_FILE_EXTENSION}",
        mode.file_suffix()
    ))
}

/// Render and write one file per [`DeckMode`].
///
/// # Errors
///
/// Returns an error if the template is missing a placeholder or a file cannot be
/// written.
pub fn write_deck_files(
    export: &DeckExport,
    template: &str,
    title: &str,
    out_dir: &Path,
    base_name: &str,
) -> miette::Result<Vec<DeckFile>> {
    let mut acc = vec![];

    for mode in DeckMode::iter() {
        let slides = export.slides(mode);
        let html = render_deck_html(template, title, slides)?;
        let path = deck_file_path(out_dir, base_name, mode);

        fs::write(&path, &html)
            .into_diagnostic()
            .wrap_err_with(|| ShowrunnerError::WriteOutput { path: path.clone() })?;

        // % is Display, ? is Debug.
        tracing::debug!(
            message = "wrote deck",
            mode = %mode.as_ref(),
            path = ?path,
            slides = slides.len()
        );

        acc.push(DeckFile {
            mode,
            path,
            slide_count: slides.len(),
            byte_count: html.len(),
        });
    }

    Ok(acc)
}

#[cfg(test)]
mod tests_html_render {
    use super::*;
    use crate::{export_decks, read_rows};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn slides() -> Vec<DeckSlide> {
        vec![DeckSlide::new("source_q", "R1", "</script><b>", "")]
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"Tom & "Jerry" <live>"#),
            "Tom &amp; &quot;Jerry&quot; &lt;live&gt;"
        );
    }

    #[test]
    fn test_render_replaces_first_placeholders_only() -> miette::Result<()> {
        let template = "<title>%%TITLE%%</title><script>const S = %%DATA%%;</script>%%TITLE%%";
        let html = render_deck_html(template, "A & B", &slides())?;

        assert!(html.starts_with("<title>A &amp; B</title>"));
        assert!(html.ends_with("</script>%%TITLE%%"));
        assert!(html.contains(r#""primary_text":"<\/script><b>""#));
        assert!(!html.contains("%%DATA%%"));
        Ok(())
    }

    #[test]
    fn test_placeholder_text_in_title_is_not_substituted() -> miette::Result<()> {
        let template = "%%TITLE%%|%%DATA%%";
        let html = render_deck_html(template, "%%DATA%%", &[])?;
        assert_eq!(html, "%%DATA%%|[]");
        Ok(())
    }

    #[test]
    fn test_script_json_reads_back() -> miette::Result<()> {
        let json = slides_to_script_json(&slides())?;
        let back: Vec<DeckSlide> = serde_json::from_str(&json).into_diagnostic()?;
        assert_eq!(back, slides());
        Ok(())
    }

    #[test]
    fn test_missing_placeholder_is_an_error() {
        let error = render_deck_html("<html>%%TITLE%%</html>", "T", &[]).unwrap_err();
        let error = error.downcast_ref::<ShowrunnerError>().unwrap();
        assert!(matches!(
            error,
            ShowrunnerError::MissingTemplatePlaceholder {
                placeholder: DATA_PLACEHOLDER
            }
        ));
    }

    #[test]
    fn test_default_template_has_both_placeholders() {
        assert!(DEFAULT_DECK_TEMPLATE.contains(TITLE_PLACEHOLDER));
        assert!(DEFAULT_DECK_TEMPLATE.contains(DATA_PLACEHOLDER));
    }

    #[test]
    fn test_write_deck_files() -> miette::Result<()> {
        let dir = TempDir::new().into_diagnostic()?;
        let rows = read_rows("section,slide_type,answer\nR1,source_q,x\nR1,score,");
        let files = write_deck_files(
            &export_decks(&rows),
            DEFAULT_DECK_TEMPLATE,
            DEFAULT_DECK_TITLE,
            dir.path(),
            "SHOW",
        )?;

        let names: Vec<_> = files
            .iter()
            .map(|it| it.path.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, ["SHOW_INLINE.html", "SHOW_SHEET.html"]);
        assert_eq!(files[0].slide_count, 3);
        assert_eq!(files[1].slide_count, 3);

        let sheet = fs::read_to_string(&files[1].path).into_diagnostic()?;
        assert!(sheet.contains("<title>LINECONIC LIVE</title>"));
        assert!(sheet.contains(r#""secondary_text":"1. X""#));
        Ok(())
    }
}
