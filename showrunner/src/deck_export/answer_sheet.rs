// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::LazyLock;

use regex::Regex;

use crate::{DeckSlide, SlideKind, extract_bonus_points};

pub const ANSWER_SHEET_TITLE_SUFFIX: &str = " : ANSWERS";
pub const LEDGER_SEPARATOR: &str = "|";
const BONUS_KEYWORD: &str = "bonus";

/// `ROUND 3: ` at the start of a section name.
static ROUND_PREFIX_WITH_COLON_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^ROUND [0-9]+: ").expect("Invalid round prefix regex")
});

/// `ROUND 3 ` at the start of a section name.
static ROUND_PREFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ROUND [0-9]+ ").expect("Invalid round prefix regex"));

/// One answered question waiting for the next answer sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerEntry {
    /// 1-based, per section.
    pub qnum: usize,
    /// Already upper-cased.
    pub answer: String,
    pub source: String,
    pub bonus_points: Option<u32>,
}

impl AnswerEntry {
    /// `{qnum}. {ANSWER}`, then ` : {source}` if there is one, then ` [{n}pts]` for a
    /// bonus question.
    #[must_use]
    pub fn ledger_line(&self) -> String {
        let mut acc = format!("{}. {}", self.qnum, self.answer);
        if !self.source.is_empty() {
            acc.push_str(" : ");
            acc.push_str(&self.source);
        }
        if let Some(points) = self.bonus_points {
            acc.push_str(&format!(" [{points}pts]"));
        }
        acc
    }
}

/// Bonus points for the ledger tag. Unlike [`extract_bonus_points`] alone, the notes
/// must also say `bonus`.
///
/// | notes           | tag        |
/// | --------------- | ---------- |
/// | `bonus 3pts`    | `Some(3)`  |
/// | `BONUS: 2 pts`  | `Some(2)`  |
/// | `3pts`          | `None`     |
/// | `bonus`         | `None`     |
#[must_use]
pub fn bonus_tag_points(notes: &str) -> Option<u32> {
    if notes.to_lowercase().contains(BONUS_KEYWORD) {
        extract_bonus_points(notes)
    } else {
        None
    }
}

/// Drop a leading `ROUND <n>: ` and then a leading `ROUND <n> ` from `section`, and add
/// ` : ANSWERS`.
///
/// | section                  | title                   |
/// | ------------------------ | ----------------------- |
/// | `ROUND 1: SOURCE CODE`   | `SOURCE CODE : ANSWERS` |
/// | `ROUND 2 LIGHTNING`      | `LIGHTNING : ANSWERS`   |
/// | `FINAL`                  | `FINAL : ANSWERS`       |
#[must_use]
pub fn answer_sheet_title(section: &str) -> String {
    let title = ROUND_PREFIX_WITH_COLON_REGEX.replace(section, "");
    let title = ROUND_PREFIX_REGEX.replace(&title, "");
    format!("{title}{ANSWER_SHEET_TITLE_SUFFIX}")
}

/// Answers collected since the last sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerLedger {
    entries: Vec<AnswerEntry>,
}

impl AnswerLedger {
    pub fn push(&mut self, entry: AnswerEntry) { self.entries.push(entry); }

    #[must_use]
    pub fn len(&self) -> usize { self.entries.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Drop every entry without emitting a sheet.
    pub fn clear(&mut self) { self.entries.clear(); }

    /// The `answer_sheet` slide for `section`, emptying the ledger. `None` when there
    /// is nothing to list.
    pub fn flush(&mut self, section: &str) -> Option<DeckSlide> {
        if self.entries.is_empty() {
            return None;
        }

        let lines = self
            .entries
            .drain(..)
            .map(|entry| entry.ledger_line())
            .collect::<Vec<_>>()
            .join(LEDGER_SEPARATOR);

        Some(DeckSlide::new(
            SlideKind::AnswerSheet,
            section,
            answer_sheet_title(section),
            lines,
        ))
    }
}
