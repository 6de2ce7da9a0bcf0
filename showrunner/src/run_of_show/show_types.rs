// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use crate::{RevealState, SlideType, Team, slugify};

/// Text the renderer draws on a slide. `answer` and `source` are `None` when the row
/// left them empty, which is not the same thing as an empty answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideContent {
    pub primary: String,
    #[serde(default)]
    pub secondary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    /// `s` followed by the slide number, zero padded to 3 digits.
    pub id: String,
    #[serde(rename = "type")]
    pub slide_type: SlideType,
    pub content: SlideContent,
    #[serde(default)]
    pub reveal_state: RevealState,
    #[serde(default)]
    pub team: Team,
    pub timer_seconds: Option<u32>,
    /// Never shown to players.
    pub host_notes: Option<String>,
    /// Bonus point value parsed out of the host notes.
    pub points: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub name: String,
    pub slides: Vec<Slide>,
}

impl Section {
    /// The id is derived from `name` with [`slugify`].
    pub fn new(name: impl Into<String>, slides: Vec<Slide>) -> Self {
        let name = name.into();
        Self {
            id: slugify(&name),
            name,
            slides,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize { self.slides.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.slides.is_empty() }
}

/// A compiled run-of-show. Nothing mutates it after [`crate::compile_show`] returns;
/// playback shares it read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Show {
    pub id: String,
    pub name: String,
    pub sections: Vec<Section>,
    /// Unix epoch milliseconds.
    pub created: i64,
}

impl Show {
    /// Every slide in flat index order.
    pub fn slides(&self) -> impl Iterator<Item = &Slide> {
        self.sections.iter().flat_map(|section| section.slides.iter())
    }

    #[must_use]
    pub fn slide_count(&self) -> usize { self.sections.iter().map(Section::len).sum() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.slide_count() == 0 }
}
