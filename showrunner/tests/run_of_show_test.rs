// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use pretty_assertions::assert_eq;
use showrunner::{DeckMode, Intent, PlaybackStore, RevealState, ShowSummary, SlideKind,
                 SlideType, State, compile_show_at, deserialize_sync_state, export_decks,
                 read_rows, reduce, serialize_sync_state, sync_payload_from_json,
                 sync_payload_to_json};

const FIXTURE: &str = include_str!("fixtures/run_of_show.csv");
const CREATED: i64 = 1_735_689_600_000;

#[test]
fn test_fixture_compiles_into_sections() {
    let show = compile_show_at(FIXTURE, "Friday Night Live!", CREATED);

    assert_eq!(show.id, "friday-night-live");
    assert_eq!(show.created, CREATED);

    let names: Vec<_> = show.sections.iter().map(|it| it.name.as_str()).collect();
    assert_eq!(
        names,
        ["PRE-SHOW", "ROUND 1: SOURCE CODE", "ROUND 2 LIGHTNING", "FINALE"]
    );
    let sizes: Vec<_> = show.sections.iter().map(|it| it.len()).collect();
    assert_eq!(sizes, [2, 4, 4, 1]);
    assert_eq!(show.slide_count(), 11);
}

#[test]
fn test_fixture_slides_are_typed() {
    let show = compile_show_at(FIXTURE, "Friday", CREATED);
    let slides: Vec<_> = show.slides().collect();

    let stutter = slides[3];
    assert_eq!(stutter.id, "s004");
    assert_eq!(stutter.slide_type, SlideType::from(SlideKind::SourceQ));
    assert_eq!(stutter.timer_seconds, Some(30));
    assert_eq!(stutter.content.answer.as_deref(), Some("The Office"));
    assert_eq!(stutter.content.source.as_deref(), Some("NBC"));

    let titanic = slides[4];
    assert_eq!(titanic.content.primary, "I'm the king of the world!");
    assert_eq!(titanic.points, Some(3));

    let acronym = slides[6];
    assert_eq!(acronym.id, "s008");
    assert_eq!(acronym.content.answer.as_deref(), Some("What is it, with Ian"));

    let hotseat = slides[7];
    assert_eq!(hotseat.content.primary, r#"Say "hello""#);
    assert_eq!(hotseat.timer_seconds, Some(30));

    let mystery = slides[9];
    assert_eq!(mystery.slide_type, SlideType::from("mystery_beat"));
    assert_eq!(mystery.timer_seconds, None);

    for slide in &slides {
        assert_eq!(slide.reveal_state, RevealState::Hidden);
    }
}

#[test]
fn test_summary_counts() {
    let show = compile_show_at(FIXTURE, "Friday", CREATED);
    let summary = ShowSummary::from(&show);

    assert_eq!(summary.total_slides, 11);
    assert_eq!(summary.scored_questions, 3);
    assert_eq!(summary.timed_slides, 4);
    assert_eq!(summary.bonus_slides, 1);

    let text = summary.to_string();
    assert!(text.contains("  ROUND 1: SOURCE CODE — 4 slides"), "{text}");
    assert!(text.ends_with("Total: 11 slides across 4 sections"), "{text}");
}

#[test]
fn test_playback_walkthrough() {
    let show = compile_show_at(FIXTURE, "Friday", CREATED);
    let mut store = PlaybackStore::default();

    store.dispatch_batch(&[
        Intent::set_show(show),
        Intent::JumpSection(1),
        Intent::NextSlide,
        Intent::ToggleReveal,
        Intent::ScoreCyan(2),
        Intent::ScorePink(-5),
        Intent::ToggleScoreboard,
    ]);

    let state = store.get_state();
    assert_eq!(state.current_slide, 3);
    assert_eq!(state.reveal_state_of("s004"), RevealState::Revealed);
    assert_eq!((state.scores.cyan, state.scores.pink), (2, 0));
    assert!(state.show_scoreboard);

    store.dispatch_batch(&[Intent::ToggleShortcuts, Intent::CloseOverlays]);
    assert!(!store.get_state().show_shortcuts);
    assert!(store.get_state().show_scoreboard);

    store.dispatch(&Intent::GoToSlide(1_000));
    assert_eq!(store.get_state().current_slide, 10);
    store.dispatch(&Intent::NextSlide);
    assert_eq!(store.get_state().current_slide, 10);
}

#[test]
fn test_sync_payload_moves_a_second_device() -> miette::Result<()> {
    let show = compile_show_at(FIXTURE, "Friday", CREATED);

    let operator = [
        Intent::set_show(show.clone()),
        Intent::GoToSlide(4),
        Intent::ToggleReveal,
        Intent::ScorePink(7),
        Intent::ToggleMute,
    ]
    .iter()
    .fold(State::default(), |state, intent| reduce(&state, intent));

    let bytes = sync_payload_to_json(&serialize_sync_state(&operator))?;
    let json = String::from_utf8_lossy(&bytes);
    assert!(json.contains("\"revealState\""), "{json}");

    let audience = deserialize_sync_state(sync_payload_from_json(&bytes)?)
        .iter()
        .fold(
            reduce(&State::default(), &Intent::set_show(show)),
            |state, intent| reduce(&state, intent),
        );

    assert_eq!(audience.current_slide, operator.current_slide);
    assert_eq!(audience.scores, operator.scores);
    assert_eq!(audience.reveal_state, operator.reveal_state);
    assert!(!audience.muted);
    Ok(())
}

#[test]
fn test_fixture_decks() {
    let rows = read_rows(FIXTURE);
    let export = export_decks(&rows);

    let sheets: Vec<_> = export
        .slides(DeckMode::Sheet)
        .iter()
        .filter(|it| it.slide_type.is_kind(SlideKind::AnswerSheet))
        .map(|it| (it.primary_text.as_str(), it.secondary_text.as_str()))
        .collect();
    assert_eq!(
        sheets,
        [
            (
                "SOURCE CODE : ANSWERS",
                "1. THE OFFICE : NBC|2. TITANIC [3pts]"
            ),
            ("LIGHTNING : ANSWERS", "1. WHAT IS IT, WITH IAN : Ian"),
        ]
    );

    let inline_answers: Vec<_> = export
        .slides(DeckMode::Inline)
        .iter()
        .filter(|it| it.slide_type.is_kind(SlideKind::SourceA))
        .map(|it| it.primary_text.as_str())
        .collect();
    assert_eq!(inline_answers, ["THE OFFICE", "TITANIC"]);
}
