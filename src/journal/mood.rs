use std::{fmt::Display, str::FromStr};

use anyhow::anyhow;

use crate::journal::{
    lexicon::{NEGATIVE_WORDS, POSITIVE_WORDS},
    tokens::tokenize,
};

/// Coarse three-valued reading of a day, derived from the mood score alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Neutral,
    Strained,
}

impl Tone {
    pub fn from_score(score: i32) -> Tone {
        if score >= 2 {
            Tone::Positive
        } else if score <= -2 {
            Tone::Strained
        } else {
            Tone::Neutral
        }
    }

    /// Order in which tones are shown in the summary.
    pub const DISPLAY_ORDER: [Tone; 3] = [Tone::Positive, Tone::Neutral, Tone::Strained];
}

impl Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tone::Positive => write!(f, "positive"),
            Tone::Neutral => write!(f, "neutral"),
            Tone::Strained => write!(f, "strained"),
        }
    }
}

impl FromStr for Tone {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "positive" => Ok(Tone::Positive),
            "neutral" => Ok(Tone::Neutral),
            "strained" => Ok(Tone::Strained),
            other => Err(anyhow!("Can't parse {other} into a tone")),
        }
    }
}

/// Computes a signed mood score for already-lowercased answer text and the
/// 1-5 energy rating. Every occurrence of a lexicon word counts, duplicates
/// included, and energy is centered on 3 so the rating alone shifts the
/// score by at most ±2.
pub fn analyse_mood(text: &str, energy: u8) -> (i32, Tone) {
    let mut pos = 0i32;
    let mut neg = 0i32;
    for token in tokenize(text) {
        if POSITIVE_WORDS.contains(token) {
            pos += 1;
        } else if NEGATIVE_WORDS.contains(token) {
            neg += 1;
        }
    }

    let score = pos - neg + (energy as i32 - 3);
    (score, Tone::from_score(score))
}
