// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::mem;

use crate::{RawRow, Section, Slide, map_slide};

/// Partition `rows` into sections by contiguous runs of the same `section` value.
///
/// - Each row is mapped with [`map_slide`] using its position in `rows`.
/// - A blank `section` is a section name like any other.
/// - A name that comes back after a different one opens a second section, with the
///   same derived id. They are not merged.
#[must_use]
pub fn group_into_sections(rows: &[RawRow]) -> Vec<Section> {
    let mut sections = vec![];
    let mut current_name: Option<&str> = None;
    let mut current_slides: Vec<Slide> = vec![];

    for (index, row) in rows.iter().enumerate() {
        let name = row.section();
        if current_name != Some(name) {
            if let Some(prev_name) = current_name {
                sections.push(Section::new(prev_name, mem::take(&mut current_slides)));
            }
            current_name = Some(name);
        }
        current_slides.push(map_slide(row, index));
    }

    if let Some(prev_name) = current_name {
        sections.push(Section::new(prev_name, current_slides));
    }

    sections
}
