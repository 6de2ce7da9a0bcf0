// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::LazyLock;

use regex::Regex;

use crate::{RawRow, RevealState, Slide, SlideContent, SlideType, Team};

/// A run of ASCII digits followed by `p`, optionally with whitespace in between. Matches
/// `3pts`, `10 points` and `2p`, but not `p3` or `three pts`. Applied to lower-cased
/// notes.
static BONUS_POINTS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+)\s*p").expect("Invalid bonus points regex")
});

/// Turn one row into a [`Slide`]. `positional_index` is the 0-based position of the row
/// among all surviving rows of the show; it numbers the slide when the row has no
/// usable `slide_number`. Never fails: missing fields fall back to defaults.
#[must_use]
pub fn map_slide(row: &RawRow, positional_index: usize) -> Slide {
    let slide_number = resolve_slide_number(row.slide_number(), positional_index);
    let slide_type = SlideType::from(row.slide_type());
    let timer_seconds = slide_type.timer_seconds();

    Slide {
        id: format_slide_id(slide_number),
        content: SlideContent {
            primary: row.primary_text().to_string(),
            secondary: row.secondary_text().to_string(),
            answer: non_empty(row.answer()),
            source: non_empty(row.answer_source()),
        },
        slide_type,
        reveal_state: RevealState::Hidden,
        team: Team::Neutral,
        timer_seconds,
        host_notes: non_empty(row.notes()),
        points: extract_bonus_points(row.notes()),
    }
}

/// First digit run followed by `p` in the lower-cased `notes`.
///
/// | notes                 | points |
/// | --------------------- | ------ |
/// | `bonus 3pts`          | `3`    |
/// | `BONUS 10 POINTS`     | `10`   |
/// | `worth 2p if fast`    | `2`    |
/// | `page 4`              | `None` |
/// | `` (empty)            | `None` |
#[must_use]
pub fn extract_bonus_points(notes: &str) -> Option<u32> {
    let notes = notes.to_lowercase();
    let captures = BONUS_POINTS_REGEX.captures(&notes)?;
    captures.get(1)?.as_str().parse().ok()
}

/// The leading digits of `slide_number` when they form a positive number, otherwise
/// `positional_index + 1`.
///
/// | `slide_number` | index | result |
/// | -------------- | ----- | ------ |
/// | `5`            | 4     | `5`    |
/// | `12b`          | 0     | `12`   |
/// | ``             | 4     | `5`    |
/// | `0`            | 2     | `3`    |
/// | `n/a`          | 9     | `10`   |
#[must_use]
pub fn resolve_slide_number(slide_number: &str, positional_index: usize) -> usize {
    let digits_end = slide_number
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(slide_number.len());

    match slide_number[..digits_end].parse::<usize>() {
        Ok(number) if number > 0 => number,
        _ => positional_index + 1,
    }
}

/// `s` + the number zero padded to 3 digits. Wider numbers are not truncated.
#[must_use]
pub fn format_slide_id(slide_number: usize) -> String { format!("s{slide_number:03}") }

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests_row_mapper {
    use super::*;
    use crate::SlideKind;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn did_i_stutter() -> RawRow {
        [
            ("slide_number", "5"),
            ("section", "ROUND 1"),
            ("slide_type", "source_q"),
            ("primary_text", "DID I STUTTER?"),
            ("answer", "The Office"),
            ("notes", ""),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_maps_question_row() {
        let slide = map_slide(&did_i_stutter(), 4);

        assert_eq!(slide.id, "s005");
        assert_eq!(slide.slide_type, SlideType::Known(SlideKind::SourceQ));
        assert_eq!(slide.timer_seconds, Some(30));
        assert_eq!(slide.content.answer.as_deref(), Some("The Office"));
        assert_eq!(slide.content.source, None);
        assert_eq!(slide.content.secondary, "");
        assert_eq!(slide.reveal_state, RevealState::Hidden);
        assert_eq!(slide.team, Team::Neutral);
        assert_eq!(slide.host_notes, None);
        assert_eq!(slide.points, None);
    }

    #[test]
    fn test_bonus_notes_set_points_and_host_notes() {
        let mut row = did_i_stutter();
        row.set("notes", "bonus 3pts");
        let slide = map_slide(&row, 4);

        assert_eq!(slide.points, Some(3));
        assert_eq!(slide.host_notes.as_deref(), Some("bonus 3pts"));
    }

    #[test]
    fn test_missing_slide_number_uses_position() {
        let row: RawRow = [("slide_type", "attract")].into_iter().collect();
        let slide = map_slide(&row, 0);

        assert_eq!(slide.id, "s001");
        assert_eq!(slide.timer_seconds, None);
        assert_eq!(slide.content, SlideContent::default());
    }

    #[test]
    fn test_unknown_type_passes_through() {
        let row: RawRow = [("slide_type", "smoke_machine")].into_iter().collect();
        let slide = map_slide(&row, 7);

        assert_eq!(slide.slide_type.as_str(), "smoke_machine");
        assert_eq!(slide.id, "s008");
    }

    #[test_case("bonus 3pts", Some(3))]
    #[test_case("BONUS 10 POINTS", Some(10))]
    #[test_case("worth 2p if fast", Some(2))]
    #[test_case("bonus round, 5 Pts", Some(5))]
    #[test_case("page 4", None)]
    #[test_case("three pts", None)]
    #[test_case("", None)]
    #[test_case("99999999999999999999p", None ; "overflow")]
    fn test_extract_bonus_points(notes: &str, expected: Option<u32>) {
        assert_eq!(extract_bonus_points(notes), expected);
    }

    #[test_case("5", 4, 5)]
    #[test_case("12b", 0, 12)]
    #[test_case("", 4, 5)]
    #[test_case("0", 2, 3)]
    #[test_case("-3", 2, 3)]
    #[test_case("n/a", 9, 10)]
    fn test_resolve_slide_number(slide_number: &str, index: usize, expected: usize) {
        assert_eq!(resolve_slide_number(slide_number, index), expected);
    }

    #[test_case(1, "s001")]
    #[test_case(42, "s042")]
    #[test_case(1234, "s1234")]
    fn test_format_slide_id(number: usize, expected: &str) {
        assert_eq!(format_slide_id(number), expected);
    }
}
