// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! CSV run-of-show ─▶ [`Show`] compiler.
//!
//! 1. [`parse_csv`] splits raw text into records (BOM, CRLF, quoted commas, escaped
//!    quotes).
//! 2. [`read_rows`] zips each record with the header row into a [`RawRow`], dropping
//!    rows that have no `slide_type`.
//! 3. [`map_slide`] turns one [`RawRow`] into a [`Slide`].
//! 4. [`group_into_sections`] partitions the slides by contiguous `section` value.
//! 5. [`compile_show`] runs the whole pipeline and stamps the result.

// Attach sources.
pub mod csv_parser;
pub mod raw_row;
pub mod row_mapper;
pub mod section_grouper;
pub mod show_compiler;
pub mod show_summary;
pub mod show_types;
pub mod slide_types;
pub mod slug;

// Re-export.
pub use csv_parser::*;
pub use raw_row::*;
pub use row_mapper::*;
pub use section_grouper::*;
pub use show_compiler::*;
pub use show_summary::*;
pub use show_types::*;
pub use slide_types::*;
pub use slug::*;
