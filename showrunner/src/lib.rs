// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

//! # Showrunner
//!
//! Run-of-show compiler and playback state machine for live trivia shows.
//!
//! A show is authored as a spreadsheet and exported as CSV. Each row is one slide
//! (question, answer, scoring beat, operational beat). This crate turns that CSV into a
//! [`Show`]: an ordered list of [`Section`]s, each holding typed [`Slide`]s with derived
//! ids, timers and bonus points. The [`Show`] is then driven by a pure reducer
//! ([`reduce`]) over a playback [`State`], which handles navigation, scoring, answer
//! reveal and overlay toggles, and defines the sync payload ([`SyncPayload`]) that keeps
//! the operator, audience and voting views on the same slide.
//!
//! ## Pipeline
//!
//! ```text
//! CSV text ─▶ parse_csv ─▶ rows ─▶ map_slide ─▶ group_into_sections ─▶ Show
//!                                                                        │
//!                                   Intent ─▶ reduce(&State, &Intent) ◀──┘
//! ```
//!
//! ```
//! use showrunner::{Intent, State, compile_show_at, reduce};
//!
//! let csv = "slide_number,section,slide_type,primary_text,secondary_text,answer,answer_source,notes\n\
//!            1,PRE-SHOW,attract,L,,,,\n\
//!            2,ROUND 1,source_q,DID I STUTTER?,,The Office,,bonus 2pts\n";
//! let show = compile_show_at(csv, "Friday Night", 0);
//! assert_eq!(show.id, "friday-night");
//! assert_eq!(show.sections.len(), 2);
//!
//! let state = reduce(&State::default(), &Intent::set_show(show));
//! let state = reduce(&state, &Intent::NextSlide);
//! assert_eq!(state.current_slide, 1);
//! ```
//!
//! ## Deck export
//!
//! The [`deck_export`] module is a batch pipeline over the same rows that produces two
//! flat slide lists for static HTML decks: one with an answer slide after every
//! question ([`DeckMode::Inline`]), and one that collects answers into an answer sheet
//! after each `score` slide ([`DeckMode::Sheet`]).
//!
//! ## Side effects
//!
//! The compiler, the reducer and the deck builder never fail and never do IO. File
//! access lives in [`storage`] and [`deck_export::html_render`], and returns
//! [`miette::Result`].

// Attach sources.
pub mod deck_export;
pub mod error;
pub mod log;
pub mod playback;
pub mod run_of_show;
pub mod storage;

// Re-export.
pub use deck_export::*;
pub use error::*;
pub use log::*;
pub use playback::*;
pub use run_of_show::*;
pub use storage::*;
