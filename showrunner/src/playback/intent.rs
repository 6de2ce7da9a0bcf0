// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{RevealMap, Scores, Show};

/// Everything that can happen to a [`crate::State`].
///
/// On the wire an intent is `{"type": "GO_TO_SLIDE", "payload": 4}`; intents without a
/// payload omit it. A `type` this crate does not know decodes to [`Intent::Unknown`],
/// which [`crate::reduce`] ignores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Intent {
    NextSlide,
    PrevSlide,
    /// Section index.
    JumpSection(usize),
    /// Flat slide index. Any value is accepted and clamped.
    GoToSlide(i64),
    ScoreCyan(i32),
    ScorePink(i32),
    ToggleReveal,
    ToggleScoreboard,
    ToggleShortcuts,
    ToggleMute,
    CloseOverlays,
    IncrementReceipts,
    SetShow(Arc<Show>),
    // Remote sync only.
    SetScores(Scores),
    SetRevealState(RevealMap),
    SetScoreboard(bool),
    SetMuted(bool),
    #[serde(other)]
    Unknown,
}

impl Intent {
    pub fn set_show(show: impl Into<Arc<Show>>) -> Self { Self::SetShow(show.into()) }

    /// Wire name, e.g. `NEXT_SLIDE`.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::NextSlide => "NEXT_SLIDE",
            Self::PrevSlide => "PREV_SLIDE",
            Self::JumpSection(_) => "JUMP_SECTION",
            Self::GoToSlide(_) => "GO_TO_SLIDE",
            Self::ScoreCyan(_) => "SCORE_CYAN",
            Self::ScorePink(_) => "SCORE_PINK",
            Self::ToggleReveal => "TOGGLE_REVEAL",
            Self::ToggleScoreboard => "TOGGLE_SCOREBOARD",
            Self::ToggleShortcuts => "TOGGLE_SHORTCUTS",
            Self::ToggleMute => "TOGGLE_MUTE",
            Self::CloseOverlays => "CLOSE_OVERLAYS",
            Self::IncrementReceipts => "INCREMENT_RECEIPTS",
            Self::SetShow(_) => "SET_SHOW",
            Self::SetScores(_) => "SET_SCORES",
            Self::SetRevealState(_) => "SET_REVEAL_STATE",
            Self::SetScoreboard(_) => "SET_SCOREBOARD",
            Self::SetMuted(_) => "SET_MUTED",
            Self::Unknown => "UNKNOWN",
        }
    }
}

#[cfg(test)]
mod tests_intent {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;

    #[test_case(Intent::NextSlide, json!({"type": "NEXT_SLIDE"}))]
    #[test_case(Intent::GoToSlide(-2), json!({"type": "GO_TO_SLIDE", "payload": -2}))]
    #[test_case(Intent::ScorePink(5), json!({"type": "SCORE_PINK", "payload": 5}))]
    #[test_case(
        Intent::SetScores(Scores::new(2, 3)),
        json!({"type": "SET_SCORES", "payload": [2, 3]})
    )]
    #[test_case(Intent::SetMuted(false), json!({"type": "SET_MUTED", "payload": false}))]
    fn test_wire_form(intent: Intent, expected: serde_json::Value) {
        assert_eq!(serde_json::to_value(&intent).unwrap(), expected);
        let back: Intent = serde_json::from_value(expected).unwrap();
        assert_eq!(back, intent);
    }

    #[test]
    fn test_unknown_type_decodes_to_unknown() {
        let intent: Intent = serde_json::from_str(r#"{"type": "FOG_MACHINE"}"#).unwrap();
        assert_eq!(intent, Intent::Unknown);
    }

    #[test]
    fn test_name_matches_wire_tag() {
        let value = serde_json::to_value(Intent::IncrementReceipts).unwrap();
        assert_eq!(value["type"], Intent::IncrementReceipts.name());
    }
}
