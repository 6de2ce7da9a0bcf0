// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter, Result as FmtResult},
          str::FromStr};

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, EnumIter, EnumString, IntoStaticStr};

/// Countdown length for every timed slide.
pub const QUESTION_TIMER_SECONDS: u32 = 30;

/// Every slide type tag the renderer knows how to draw.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    AsRefStr,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum SlideKind {
    // Operational.
    Attract,
    Fishbowl,
    RoundTitle,
    TierTitle,
    BonusMarker,
    Score,
    Intermission,
    Warning,
    Blackout,
    TransitionBeat,
    Verdict,
    Sentence,
    ReceiptRain,
    LastLine,
    Endcard,
    CrateDrop,
    // Questions.
    SourceQ,
    AcronymQ,
    // Answers.
    SourceA,
    AcronymA,
    AnswerSheet,
    // Content.
    FluencyLine,
    FluencySource,
    DoaRef,
    DoaVerdictDead,
    DoaVerdictAlive,
    HotseatRules,
    HotseatPrompt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlideCategory {
    Operational,
    Question,
    Answer,
    Content,
}

impl SlideKind {
    #[must_use]
    pub fn category(self) -> SlideCategory {
        match self {
            Self::SourceQ | Self::AcronymQ => SlideCategory::Question,
            Self::SourceA | Self::AcronymA | Self::AnswerSheet => SlideCategory::Answer,
            Self::FluencyLine
            | Self::FluencySource
            | Self::DoaRef
            | Self::DoaVerdictDead
            | Self::DoaVerdictAlive
            | Self::HotseatRules
            | Self::HotseatPrompt => SlideCategory::Content,
            _ => SlideCategory::Operational,
        }
    }

    /// Questions that carry an answer and count towards a team score.
    #[must_use]
    pub fn is_scored_question(self) -> bool { matches!(self, Self::SourceQ | Self::AcronymQ) }

    #[must_use]
    pub fn is_timed(self) -> bool {
        matches!(self, Self::SourceQ | Self::AcronymQ | Self::HotseatPrompt)
    }

    /// The answer slide the deck exporter injects after this question, if any.
    #[must_use]
    pub fn answer_kind(self) -> Option<SlideKind> {
        match self {
            Self::SourceQ => Some(Self::SourceA),
            Self::AcronymQ => Some(Self::AcronymA),
            _ => None,
        }
    }
}

/// A slide's `type` tag. Tags this crate does not know are carried through verbatim so
/// newer sheets still compile and render with whatever the host does for them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SlideType {
    Known(SlideKind),
    Unknown(String),
}

impl SlideType {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(kind) => kind.as_ref(),
            Self::Unknown(tag) => tag,
        }
    }

    #[must_use]
    pub fn kind(&self) -> Option<SlideKind> {
        match self {
            Self::Known(kind) => Some(*kind),
            Self::Unknown(_) => None,
        }
    }

    #[must_use]
    pub fn is_kind(&self, kind: SlideKind) -> bool { self.kind() == Some(kind) }

    #[must_use]
    pub fn is_scored_question(&self) -> bool {
        self.kind().is_some_and(SlideKind::is_scored_question)
    }

    #[must_use]
    pub fn is_timed(&self) -> bool { self.kind().is_some_and(SlideKind::is_timed) }

    #[must_use]
    pub fn timer_seconds(&self) -> Option<u32> {
        self.is_timed().then_some(QUESTION_TIMER_SECONDS)
    }
}

impl From<&str> for SlideType {
    fn from(tag: &str) -> Self {
        match SlideKind::from_str(tag) {
            Ok(kind) => Self::Known(kind),
            Err(_) => Self::Unknown(tag.to_string()),
        }
    }
}

impl From<String> for SlideType {
    fn from(tag: String) -> Self {
        match SlideKind::from_str(&tag) {
            Ok(kind) => Self::Known(kind),
            Err(_) => Self::Unknown(tag),
        }
    }
}

impl From<SlideType> for String {
    fn from(slide_type: SlideType) -> Self {
        match slide_type {
            SlideType::Known(kind) => kind.as_ref().to_string(),
            SlideType::Unknown(tag) => tag,
        }
    }
}

impl From<SlideKind> for SlideType {
    fn from(kind: SlideKind) -> Self { Self::Known(kind) }
}

impl Display for SlideType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult { write!(f, "{}", self.as_str()) }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

impl RevealState {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Hidden => Self::Revealed,
            Self::Revealed => Self::Hidden,
        }
    }
}

/// Team attribution for a slide. Nothing in the playback core changes it yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    #[default]
    Neutral,
    Cyan,
    Pink,
}
