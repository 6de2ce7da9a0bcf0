// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{collections::BTreeMap, sync::Arc};

use serde::{Deserialize, Serialize};

use crate::{RevealState, Show, Slide, flatten};

/// Slide id ─▶ reveal state. Only ever grows during a session.
pub type RevealMap = BTreeMap<String, RevealState>;

/// Team scores. Serialized as `[cyan, pink]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u32; 2]", into = "[u32; 2]")]
pub struct Scores {
    pub cyan: u32,
    pub pink: u32,
}

impl Scores {
    #[must_use]
    pub fn new(cyan: u32, pink: u32) -> Self { Self { cyan, pink } }
}

impl From<[u32; 2]> for Scores {
    fn from([cyan, pink]: [u32; 2]) -> Self { Self { cyan, pink } }
}

impl From<Scores> for [u32; 2] {
    fn from(scores: Scores) -> Self { [scores.cyan, scores.pink] }
}

/// Everything one presentation session knows. The show is shared read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub show: Option<Arc<Show>>,
    /// Flat index into [`flatten`].
    pub current_slide: usize,
    pub scores: Scores,
    pub reveal_state: RevealMap,
    pub show_scoreboard: bool,
    pub show_shortcuts: bool,
    pub show_host_panel: bool,
    pub muted: bool,
    pub receipts: u64,
}

/// No show loaded, audio muted, every overlay closed.
impl Default for State {
    fn default() -> Self {
        Self {
            show: None,
            current_slide: 0,
            scores: Scores::default(),
            reveal_state: RevealMap::new(),
            show_scoreboard: false,
            show_shortcuts: false,
            show_host_panel: false,
            muted: true,
            receipts: 0,
        }
    }
}

impl State {
    #[must_use]
    pub fn current(&self) -> Option<&Slide> {
        let show = self.show.as_deref()?;
        show.slides().nth(self.current_slide)
    }

    /// Slides that were never toggled read as [`RevealState::Hidden`].
    #[must_use]
    pub fn reveal_state_of(&self, slide_id: &str) -> RevealState {
        self.reveal_state.get(slide_id).copied().unwrap_or_default()
    }

    /// Highest valid flat index, `0` when there is no show or it has no slides.
    #[must_use]
    pub fn last_slide_index(&self) -> usize {
        self.show
            .as_deref()
            .map_or(0, |show| show.slide_count().saturating_sub(1))
    }

    #[must_use]
    pub fn slides(&self) -> Vec<&Slide> { self.show.as_deref().map(flatten).unwrap_or_default() }
}
