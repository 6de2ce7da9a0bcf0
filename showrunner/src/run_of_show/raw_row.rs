// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::CsvRecord;

/// Column names understood by the row mapper. Any other column is ignored.
pub mod column {
    pub const SLIDE_NUMBER: &str = "slide_number";
    pub const SECTION: &str = "section";
    pub const SLIDE_TYPE: &str = "slide_type";
    pub const PRIMARY_TEXT: &str = "primary_text";
    pub const SECONDARY_TEXT: &str = "secondary_text";
    pub const ANSWER: &str = "answer";
    pub const ANSWER_SOURCE: &str = "answer_source";
    pub const NOTES: &str = "notes";

    pub const ALL: [&str; 8] = [
        SLIDE_NUMBER,
        SECTION,
        SLIDE_TYPE,
        PRIMARY_TEXT,
        SECONDARY_TEXT,
        ANSWER,
        ANSWER_SOURCE,
        NOTES,
    ];
}

/// One CSV data line keyed by the known column names. `None` means the column was not
/// in the header; accessors read it as an empty string. Only the row mapper and the
/// deck builder consume this type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    pub slide_number: Option<String>,
    pub section: Option<String>,
    pub slide_type: Option<String>,
    pub primary_text: Option<String>,
    pub secondary_text: Option<String>,
    pub answer: Option<String>,
    pub answer_source: Option<String>,
    pub notes: Option<String>,
}

impl RawRow {
    /// Zip `headers` with `record`. Header names and values are trimmed, and a record
    /// shorter than the header reads the missing cells as empty strings.
    #[must_use]
    pub fn from_record(headers: &[String], record: &CsvRecord) -> Self {
        let mut row = Self::default();
        for (idx, header) in headers.iter().enumerate() {
            let value = record.get(idx).map_or("", |it| it.trim());
            row.set(header.trim(), value);
        }
        row
    }

    /// Returns `false` (and stores nothing) when `column_name` is not a known column.
    pub fn set(&mut self, column_name: &str, value: impl Into<String>) -> bool {
        let slot = match column_name {
            column::SLIDE_NUMBER => &mut self.slide_number,
            column::SECTION => &mut self.section,
            column::SLIDE_TYPE => &mut self.slide_type,
            column::PRIMARY_TEXT => &mut self.primary_text,
            column::SECONDARY_TEXT => &mut self.secondary_text,
            column::ANSWER => &mut self.answer,
            column::ANSWER_SOURCE => &mut self.answer_source,
            column::NOTES => &mut self.notes,
            _ => return false,
        };
        *slot = Some(value.into());
        true
    }

    #[must_use]
    pub fn slide_number(&self) -> &str { self.slide_number.as_deref().unwrap_or_default() }

    #[must_use]
    pub fn section(&self) -> &str { self.section.as_deref().unwrap_or_default() }

    #[must_use]
    pub fn slide_type(&self) -> &str { self.slide_type.as_deref().unwrap_or_default() }

    #[must_use]
    pub fn primary_text(&self) -> &str { self.primary_text.as_deref().unwrap_or_default() }

    #[must_use]
    pub fn secondary_text(&self) -> &str {
        self.secondary_text.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn answer(&self) -> &str { self.answer.as_deref().unwrap_or_default() }

    #[must_use]
    pub fn answer_source(&self) -> &str {
        self.answer_source.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn notes(&self) -> &str { self.notes.as_deref().unwrap_or_default() }

    /// Rows with an empty `slide_type` never become slides.
    #[must_use]
    pub fn has_slide_type(&self) -> bool { !self.slide_type().is_empty() }
}

/// Build a row from `(column, value)` pairs, e.g. in tests or from a keyed source other
/// than CSV. Unknown columns are skipped.
impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = Self::default();
        for (key, value) in iter {
            row.set(key.as_ref(), value);
        }
        row
    }
}
