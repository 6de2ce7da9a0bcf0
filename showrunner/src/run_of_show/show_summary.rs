// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::{Section, Show};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSummary {
    pub id: String,
    pub name: String,
    pub slide_count: usize,
}

/// Counts printed after a compile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowSummary {
    pub show_id: String,
    pub sections: Vec<SectionSummary>,
    pub total_slides: usize,
    pub timed_slides: usize,
    pub scored_questions: usize,
    pub bonus_slides: usize,
}

impl From<&Section> for SectionSummary {
    fn from(section: &Section) -> Self {
        Self {
            id: section.id.clone(),
            name: section.name.clone(),
            slide_count: section.len(),
        }
    }
}

impl From<&Show> for ShowSummary {
    fn from(show: &Show) -> Self {
        Self {
            show_id: show.id.clone(),
            sections: show.sections.iter().map(SectionSummary::from).collect(),
            total_slides: show.slide_count(),
            timed_slides: show.slides().filter(|it| it.timer_seconds.is_some()).count(),
            scored_questions: show
                .slides()
                .filter(|it| it.slide_type.is_scored_question())
                .count(),
            bonus_slides: show.slides().filter(|it| it.points.is_some()).count(),
        }
    }
}

/// ```text
///   PRE-SHOW — 2 slides
///   ROUND 1 — 14 slides
/// Total: 16 slides across 2 sections
/// ```
impl Display for ShowSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for section in &self.sections {
            writeln!(f, "  {} — {} slides", section.name, section.slide_count)?;
        }
        write!(
            f,
            "Total: {} slides across {} sections",
            self.total_slides,
            self.sections.len()
        )
    }
}
