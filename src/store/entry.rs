use anyhow::{Context, Result, bail};
use chrono::NaiveDateTime;

use crate::journal::mood::Tone;

/// Column order of the journal file. Kept stable so files written by older
/// versions keep loading.
pub const COLUMNS: [&str; 9] = [
    "timestamp",
    "energy",
    "tone",
    "mood_score",
    "stress_hint",
    "on_mind",
    "went_well",
    "difficult",
    "small_step",
];

/// Local-time second-precision timestamps, ISO-8601 without an offset.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// One persisted reflection session. Never mutated after creation; the
/// journal file is append-only.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub timestamp: NaiveDateTime,
    pub energy: u8,
    pub tone: Tone,
    pub mood_score: i32,
    pub stress_hint: String,
    pub on_mind: String,
    pub went_well: String,
    pub difficult: String,
    pub small_step: String,
}

impl Entry {
    /// The lowercased text the mood analysis and keyword tallies run over.
    /// `small_step` is deliberately left out, it's a plan rather than a
    /// description of the day.
    pub fn combined_text(&self) -> String {
        [
            self.on_mind.as_str(),
            self.went_well.as_str(),
            self.difficult.as_str(),
        ]
        .join(" ")
        .to_lowercase()
    }

    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            self.energy.to_string(),
            self.tone.to_string(),
            self.mood_score.to_string(),
            self.stress_hint.clone(),
            self.on_mind.clone(),
            self.went_well.clone(),
            self.difficult.clone(),
            self.small_step.clone(),
        ]
    }

    pub fn from_row(fields: &[String]) -> Result<Entry> {
        if fields.len() != COLUMNS.len() {
            bail!(
                "Expected {} fields but row has {}",
                COLUMNS.len(),
                fields.len()
            );
        }
        Ok(Entry {
            timestamp: NaiveDateTime::parse_from_str(&fields[0], TIMESTAMP_FORMAT)
                .with_context(|| format!("Bad timestamp {}", fields[0]))?,
            energy: fields[1]
                .parse()
                .with_context(|| format!("Bad energy {}", fields[1]))?,
            tone: fields[2].parse()?,
            mood_score: fields[3]
                .parse()
                .with_context(|| format!("Bad mood score {}", fields[3]))?,
            stress_hint: fields[4].clone(),
            on_mind: fields[5].clone(),
            went_well: fields[6].clone(),
            difficult: fields[7].clone(),
            small_step: fields[8].clone(),
        })
    }

    #[cfg(test)]
    pub fn test_entry(on_mind: &str, went_well: &str, difficult: &str) -> Entry {
        use chrono::{NaiveDate, NaiveTime};

        Entry {
            timestamp: NaiveDateTime::new(
                NaiveDate::from_ymd_opt(2018, 7, 4).unwrap(),
                NaiveTime::MIN,
            ),
            energy: 3,
            tone: Tone::Neutral,
            mood_score: 0,
            stress_hint: String::new(),
            on_mind: on_mind.to_string(),
            went_well: went_well.to_string(),
            difficult: difficult.to_string(),
            small_step: String::new(),
        }
    }
}
