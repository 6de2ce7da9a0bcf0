// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Flat index addressing. A flat index is a slide's position when every section of a
//! [`Show`] is concatenated in order.

use crate::{Show, Slide};

/// Every slide of `show`, section by section.
#[must_use]
pub fn flatten(show: &Show) -> Vec<&Slide> { show.slides().collect() }

/// Index of the section that owns `flat_index`. An index past the end belongs to the
/// last section. `None` only when the show has no sections.
#[must_use]
pub fn section_of(show: &Show, flat_index: usize) -> Option<usize> {
    let mut count = 0;
    for (section_index, section) in show.sections.iter().enumerate() {
        count += section.len();
        if flat_index < count {
            return Some(section_index);
        }
    }
    show.sections.len().checked_sub(1)
}

/// Flat index of the first slide of section `section_index`. An index past the last
/// section yields the slide count.
#[must_use]
pub fn section_start(show: &Show, section_index: usize) -> usize {
    show.sections
        .iter()
        .take(section_index)
        .map(|section| section.len())
        .sum()
}

#[cfg(test)]
mod tests_navigation {
    use super::*;
    use crate::compile_show_at;
    use pretty_assertions::assert_eq;

    /// Sections of sizes `[2, 1, 3]`.
    fn show() -> Show {
        let csv = "section,slide_type\n\
                   A,attract\nA,round_title\n\
                   B,score\n\
                   C,source_q\nC,source_q\nC,score";
        compile_show_at(csv, "nav", 0)
    }

    #[test]
    fn test_flatten_keeps_section_order() {
        let show = show();
        let ids: Vec<_> = flatten(&show).into_iter().map(|it| it.id.as_str()).collect();
        assert_eq!(ids, ["s001", "s002", "s003", "s004", "s005", "s006"]);
    }

    #[test]
    fn test_section_of() {
        let show = show();
        let owners: Vec<_> = (0..6).map(|i| section_of(&show, i)).collect();
        assert_eq!(owners, [Some(0), Some(0), Some(1), Some(2), Some(2), Some(2)]);
        assert_eq!(section_of(&show, 99), Some(2));
    }

    #[test]
    fn test_section_start() {
        let show = show();
        assert_eq!(section_start(&show, 0), 0);
        assert_eq!(section_start(&show, 1), 2);
        assert_eq!(section_start(&show, 2), 3);
        assert_eq!(section_start(&show, 3), 6);
        assert_eq!(section_start(&show, 40), 6);
    }

    #[test]
    fn test_flat_index_round_trip() {
        let show = show();
        for i in 0..show.slide_count() {
            let owner = section_of(&show, i).unwrap();
            assert!(section_start(&show, owner) <= i);
            assert!(i < section_start(&show, owner + 1));
        }
    }

    #[test]
    fn test_empty_show() {
        let show = compile_show_at("", "empty", 0);
        assert!(flatten(&show).is_empty());
        assert_eq!(section_of(&show, 0), None);
        assert_eq!(section_start(&show, 3), 0);
    }
}
