// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{AnswerEntry, AnswerLedger, DeckExport, DeckMode, DeckSlide, RawRow, SlideKind,
            SlideType, bonus_tag_points};

/// Build both decks from the same rows.
#[must_use]
pub fn export_decks(rows: &[RawRow]) -> DeckExport {
    let export = DeckExport {
        inline: build_deck(rows, DeckMode::Inline),
        sheet: build_deck(rows, DeckMode::Sheet),
    };

    tracing::debug!(
        message = "built decks",
        rows = rows.len(),
        inline = export.inline.len(),
        sheet = export.sheet.len()
    );
    export
}

/// Flatten `rows` into deck slides.
///
/// - A `source_q` / `acronym_q` row with an answer is numbered within its section and
///   emitted as a question slide. The answer never appears on it; `acronym_q` shows its
///   `answer_source` as a hint.
/// - [`DeckMode::Inline`] follows it with a `source_a` / `acronym_a` slide.
/// - [`DeckMode::Sheet`] records it in the ledger, and a `score` row emits the score
///   slide followed by the section's answer sheet. The ledger is discarded when the
///   section changes, so answers after the last `score` row of a section are never
///   listed, not even on the next section's sheet.
/// - Every other row passes through as is.
///
/// A row with a blank `section` stays in the section before it.
#[must_use]
pub fn build_deck(rows: &[RawRow], mode: DeckMode) -> Vec<DeckSlide> {
    let mut cursor = DeckCursor::new(mode);
    for row in rows {
        cursor.push_row(row);
    }
    cursor.slides
}

#[derive(Debug)]
struct DeckCursor {
    mode: DeckMode,
    slides: Vec<DeckSlide>,
    current_section: String,
    qnum: usize,
    ledger: AnswerLedger,
}

impl DeckCursor {
    fn new(mode: DeckMode) -> Self {
        Self {
            mode,
            slides: vec![],
            current_section: String::new(),
            qnum: 0,
            ledger: AnswerLedger::default(),
        }
    }

    fn push_row(&mut self, row: &RawRow) {
        if !row.section().is_empty() && row.section() != self.current_section {
            self.current_section = row.section().to_string();
            self.qnum = 0;
            self.ledger.clear();
        }

        match SlideType::from(row.slide_type()).kind() {
            Some(question) if question.is_scored_question() && !row.answer().is_empty() => {
                self.push_question(row, question);
            }
            Some(SlideKind::Score) => {
                self.slides
                    .push(DeckSlide::pass_through(row, &self.current_section));
                if self.mode == DeckMode::Sheet
                    && let Some(sheet) = self.ledger.flush(&self.current_section)
                {
                    self.slides.push(sheet);
                }
            }
            _ => self
                .slides
                .push(DeckSlide::pass_through(row, &self.current_section)),
        }
    }

    fn push_question(&mut self, row: &RawRow, question: SlideKind) {
        self.qnum += 1;
        let answer = row.answer().to_uppercase();
        let hint = if question == SlideKind::AcronymQ {
            row.answer_source()
        } else {
            ""
        };

        self.slides.push(DeckSlide::new(
            question,
            &self.current_section,
            row.primary_text(),
            hint,
        ));

        match self.mode {
            DeckMode::Inline => {
                if let Some(answer_kind) = question.answer_kind() {
                    self.slides.push(DeckSlide::new(
                        answer_kind,
                        &self.current_section,
                        answer,
                        hint,
                    ));
                }
            }
            DeckMode::Sheet => self.ledger.push(AnswerEntry {
                qnum: self.qnum,
                answer,
                source: row.answer_source().to_string(),
                bonus_points: bonus_tag_points(row.notes()),
            }),
        }
    }
}
