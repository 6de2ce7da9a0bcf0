// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Intent, State, section_start};

/// Apply `intent` to `state` and return the next state. Never fails.
///
/// | intent                | effect                              | boundary                 |
/// | --------------------- | ----------------------------------- | ------------------------ |
/// | `NextSlide`           | `current_slide + 1`                 | clamped to last slide    |
/// | `PrevSlide`           | `current_slide - 1`                 | clamped to `0`           |
/// | `JumpSection(i)`      | first slide of section `i`          | clamped to last slide    |
/// | `GoToSlide(n)`        | `n`                                 | clamped to `[0, last]`   |
/// | `ScoreCyan(d)`        | `cyan + d`                          | floored at `0`           |
/// | `ScorePink(d)`        | `pink + d`                          | floored at `0`           |
/// | `ToggleReveal`        | flip current slide's reveal state   | no-op without a slide    |
/// | `Toggle*`             | flip the flag                       |                          |
/// | `CloseOverlays`       | shortcuts and host panel off        |                          |
/// | `IncrementReceipts`   | `receipts + 1`                      |                          |
/// | `SetShow(show)`       | replace show, `current_slide = 0`   | rest untouched           |
/// | `Set*` (remote sync)  | replace the field                   |                          |
/// | `Unknown`             | nothing                             |                          |
#[must_use]
pub fn reduce(state: &State, intent: &Intent) -> State {
    tracing::trace!(message = "reduce", intent = intent.name(), slide = state.current_slide);

    let last_index = state.last_slide_index();

    match intent {
        Intent::NextSlide => State {
            current_slide: state.current_slide.saturating_add(1).min(last_index),
            ..state.clone()
        },
        Intent::PrevSlide => State {
            current_slide: state.current_slide.saturating_sub(1),
            ..state.clone()
        },
        Intent::JumpSection(section_index) => {
            let start = state
                .show
                .as_deref()
                .map_or(0, |show| section_start(show, *section_index));
            State {
                current_slide: start.min(last_index),
                ..state.clone()
            }
        }
        Intent::GoToSlide(target) => State {
            current_slide: clamp_flat_index(*target, last_index),
            ..state.clone()
        },
        Intent::ScoreCyan(delta) => {
            let mut next = state.clone();
            next.scores.cyan = next.scores.cyan.saturating_add_signed(*delta);
            next
        }
        Intent::ScorePink(delta) => {
            let mut next = state.clone();
            next.scores.pink = next.scores.pink.saturating_add_signed(*delta);
            next
        }
        Intent::ToggleReveal => {
            let Some(slide) = state.current() else {
                return state.clone();
            };
            let flipped = state.reveal_state_of(&slide.id).toggled();
            let mut next = state.clone();
            next.reveal_state.insert(slide.id.clone(), flipped);
            next
        }
        Intent::ToggleScoreboard => State {
            show_scoreboard: !state.show_scoreboard,
            ..state.clone()
        },
        Intent::ToggleShortcuts => State {
            show_shortcuts: !state.show_shortcuts,
            ..state.clone()
        },
        Intent::ToggleMute => State {
            muted: !state.muted,
            ..state.clone()
        },
        Intent::CloseOverlays => State {
            show_shortcuts: false,
            show_host_panel: false,
            ..state.clone()
        },
        Intent::IncrementReceipts => State {
            receipts: state.receipts.saturating_add(1),
            ..state.clone()
        },
        Intent::SetShow(show) => State {
            show: Some(show.clone()),
            current_slide: 0,
            ..state.clone()
        },
        Intent::SetScores(scores) => State {
            scores: *scores,
            ..state.clone()
        },
        Intent::SetRevealState(reveal_state) => State {
            reveal_state: reveal_state.clone(),
            ..state.clone()
        },
        Intent::SetScoreboard(show_scoreboard) => State {
            show_scoreboard: *show_scoreboard,
            ..state.clone()
        },
        Intent::SetMuted(muted) => State {
            muted: *muted,
            ..state.clone()
        },
        Intent::Unknown => state.clone(),
    }
}

fn clamp_flat_index(target: i64, last_index: usize) -> usize {
    usize::try_from(target).map_or(0, |it| it.min(last_index))
}
