// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, EnumIter};

use crate::{RawRow, SlideType};

/// One slide of a static deck. Serialized with the field names the deck template reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckSlide {
    pub slide_type: SlideType,
    pub section: String,
    pub primary_text: String,
    pub secondary_text: String,
}

impl DeckSlide {
    pub fn new(
        slide_type: impl Into<SlideType>,
        section: impl Into<String>,
        primary_text: impl Into<String>,
        secondary_text: impl Into<String>,
    ) -> Self {
        Self {
            slide_type: slide_type.into(),
            section: section.into(),
            primary_text: primary_text.into(),
            secondary_text: secondary_text.into(),
        }
    }

    /// The row as is, under `section`.
    #[must_use]
    pub fn pass_through(row: &RawRow, section: &str) -> Self {
        Self::new(
            row.slide_type(),
            section,
            row.primary_text(),
            row.secondary_text(),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum DeckMode {
    /// An answer slide follows every answered question.
    Inline,
    /// Answers are collected into an answer sheet after each `score` slide.
    Sheet,
}

impl DeckMode {
    /// Suffix of the output file name, e.g. `SHOW_INLINE.html`.
    #[must_use]
    pub fn file_suffix(self) -> &'static str {
        match self {
            Self::Inline => "_INLINE",
            Self::Sheet => "_SHEET",
        }
    }
}

/// Both decks built from one row stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckExport {
    pub inline: Vec<DeckSlide>,
    pub sheet: Vec<DeckSlide>,
}

impl DeckExport {
    #[must_use]
    pub fn slides(&self, mode: DeckMode) -> &[DeckSlide] {
        match mode {
            DeckMode::Inline => &self.inline,
            DeckMode::Sheet => &self.sheet,
        }
    }
}
