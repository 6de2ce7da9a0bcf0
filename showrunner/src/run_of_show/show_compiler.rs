// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{RawRow, Show, group_into_sections, parse_csv, slugify};

/// Parse `csv` and zip every data record with the header row. Rows whose `slide_type`
/// is empty are dropped here, and nowhere else.
#[must_use]
pub fn read_rows(csv: &str) -> Vec<RawRow> {
    let mut records = parse_csv(csv).into_iter();
    let Some(headers) = records.next() else {
        return vec![];
    };

    let mut dropped = 0_usize;
    let rows: Vec<RawRow> = records
        .enumerate()
        .filter_map(|(record_index, record)| {
            let row = RawRow::from_record(&headers, &record);
            if row.has_slide_type() {
                Some(row)
            } else {
                dropped += 1;
                // % is Display, ? is Debug.
                tracing::debug!(
                    message = "dropping row without slide_type",
                    data_row = record_index + 1,
                    section = %row.section()
                );
                None
            }
        })
        .collect();

    tracing::debug!(message = "read rows", kept = rows.len(), dropped);
    rows
}

/// Compile `csv` into a [`Show`] named `show_name`, stamped with the current time.
#[must_use]
pub fn compile_show(csv: &str, show_name: &str) -> Show {
    compile_show_at(csv, show_name, chrono::Utc::now().timestamp_millis())
}

/// Same as [`compile_show`] with an explicit `created` stamp (Unix epoch ms). The
/// output depends only on the arguments.
#[must_use]
pub fn compile_show_at(csv: &str, show_name: &str, created: i64) -> Show {
    let rows = read_rows(csv);
    let sections = group_into_sections(&rows);

    let show = Show {
        id: slugify(show_name),
        name: show_name.to_string(),
        sections,
        created,
    };

    tracing::debug!(
        message = "compiled show",
        show_id = %show.id,
        sections = show.sections.len(),
        slides = show.slide_count()
    );
    show
}
