// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Batch export of a run-of-show into two flat slide lists for static HTML decks.
//!
//! Both lists come from the same rows (see [`crate::read_rows`]):
//! - [`DeckMode::Inline`] puts an answer slide right after every answered question.
//! - [`DeckMode::Sheet`] holds the answers back and emits one `answer_sheet` slide right
//!   after each `score` slide, listing every answer of the section since the last sheet.
//!
//! [`html_render`] injects a list into an HTML template.

// Attach sources.
pub mod answer_sheet;
pub mod deck_builder;
pub mod deck_types;
pub mod html_render;

// Re-export.
pub use answer_sheet::*;
pub use deck_builder::*;
pub use deck_types::*;
pub use html_render::*;
