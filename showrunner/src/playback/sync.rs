// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::Context;
use serde::{Deserialize, Serialize};

use crate::{Intent, RevealMap, Scores, ShowrunnerError, State, try_deserialize,
            try_serialize};

/// The part of a [`State`] that other devices mirror. These five fields are the only
/// ones exchanged over a sync channel.
///
/// ```json
/// {"slide": 4, "scores": [2, 1], "revealState": {"s005": "revealed"},
///  "scoreboard": false, "muted": true}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncPayload {
    pub slide: usize,
    pub scores: Scores,
    pub reveal_state: RevealMap,
    pub scoreboard: bool,
    pub muted: bool,
}

#[must_use]
pub fn serialize_sync_state(state: &State) -> SyncPayload {
    SyncPayload {
        slide: state.current_slide,
        scores: state.scores,
        reveal_state: state.reveal_state.clone(),
        scoreboard: state.show_scoreboard,
        muted: state.muted,
    }
}

/// The intents that make a local state match `payload`. Apply them as one batch (see
/// [`crate::PlaybackStore::apply_remote_sync`]). The slide index is clamped against the
/// local show like any other [`Intent::GoToSlide`].
#[must_use]
pub fn deserialize_sync_state(payload: SyncPayload) -> [Intent; 5] {
    let SyncPayload {
        slide,
        scores,
        reveal_state,
        scoreboard,
        muted,
    } = payload;

    [
        Intent::GoToSlide(i64::try_from(slide).unwrap_or(i64::MAX)),
        Intent::SetScores(scores),
        Intent::SetRevealState(reveal_state),
        Intent::SetScoreboard(scoreboard),
        Intent::SetMuted(muted),
    ]
}

/// # Errors
///
/// Returns an error if the payload cannot be serialized to JSON.
pub fn sync_payload_to_json(payload: &SyncPayload) -> miette::Result<Vec<u8>> {
    try_serialize(payload).wrap_err(ShowrunnerError::MalformedSyncPayload)
}

/// No validation beyond the schema: a payload with every field present and well typed is
/// accepted as is.
///
/// # Errors
///
/// Returns [`ShowrunnerError::MalformedSyncPayload`] if `bytes` is not JSON or a field
/// is missing or has the wrong type.
pub fn sync_payload_from_json(bytes: &[u8]) -> miette::Result<SyncPayload> {
    try_deserialize(bytes).wrap_err(ShowrunnerError::MalformedSyncPayload)
}
