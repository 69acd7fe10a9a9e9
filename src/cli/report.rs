use anyhow::Result;

use crate::{
    journal::{keywords::summarise_keywords, mood::Tone},
    store::{entry::Entry, journal_store::JournalStore},
};

const TOP_KEYWORD_COUNT: usize = 6;
const STRAINED_DAYS_FOR_NOTE: usize = 3;

const ENERGY_WORDS: [&str; 3] = ["sleep", "tired", "exhausted"];
const STRENGTH_WORDS: [&str; 4] = ["progress", "learning", "study", "project"];

const STRAINED_NOTE: &str =
    "There have been several strained days. It might help to notice what repeats on those days.";
const ENERGY_NOTE: &str =
    "Sleep and energy show up often. It could be worth giving them a bit of extra attention.";
const STRENGTH_NOTE: &str =
    "You mention progress and learning quite a lot. That might be a quiet strength to build on.";

/// Everything the summary screen shows, computed up front so rendering stays
/// a plain formatting step.
#[derive(Debug, PartialEq)]
pub struct SummaryReport {
    pub total_days: usize,
    pub average_energy: f64,
    /// Fixed display order, tones with zero days left out.
    pub tone_counts: Vec<(Tone, usize)>,
    pub top_keywords: Vec<(String, u32)>,
    pub observations: Vec<&'static str>,
}

/// Builds the aggregate report, or None when there is nothing recorded yet.
pub fn build_summary(entries: &[Entry]) -> Option<SummaryReport> {
    if entries.is_empty() {
        return None;
    }

    let average_energy =
        entries.iter().map(|e| e.energy as f64).sum::<f64>() / entries.len() as f64;

    let tone_counts = Tone::DISPLAY_ORDER
        .into_iter()
        .filter_map(|tone| {
            let count = entries.iter().filter(|e| e.tone == tone).count();
            (count > 0).then_some((tone, count))
        })
        .collect::<Vec<_>>();

    let keywords = summarise_keywords(entries);
    let top_keywords = keywords
        .top(TOP_KEYWORD_COUNT)
        .into_iter()
        .map(|(word, count)| (word.to_string(), count))
        .collect();

    let strained_days = entries.iter().filter(|e| e.tone == Tone::Strained).count();

    // The three observations are independent checks, any subset can fire.
    let mut observations = Vec::new();
    if strained_days >= STRAINED_DAYS_FOR_NOTE {
        observations.push(STRAINED_NOTE);
    }
    if keywords.contains_any(&ENERGY_WORDS) {
        observations.push(ENERGY_NOTE);
    }
    if keywords.contains_any(&STRENGTH_WORDS) {
        observations.push(STRENGTH_NOTE);
    }

    Some(SummaryReport {
        total_days: entries.len(),
        average_energy,
        tone_counts,
        top_keywords,
        observations,
    })
}

pub fn render_summary(report: &SummaryReport) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str("Reflection summary\n");
    out.push_str(&"-".repeat(40));
    out.push('\n');
    out.push_str(&format!("Total days recorded: {}\n", report.total_days));
    out.push_str(&format!("Average energy: {:.1} / 5\n", report.average_energy));

    for (tone, count) in &report.tone_counts {
        out.push_str(&format!("Days that felt {tone}: {count}\n"));
    }

    if !report.top_keywords.is_empty() {
        let listed = report
            .top_keywords
            .iter()
            .map(|(word, count)| format!("{word} ({count})"))
            .collect::<Vec<_>>()
            .join(", ");
        out.push('\n');
        out.push_str("Words that keep showing up in your reflections:\n");
        out.push_str(&listed);
        out.push('\n');
    }

    out.push('\n');
    out.push_str("Gentle observations:\n");
    for observation in &report.observations {
        out.push_str(&format!("- {observation}\n"));
    }

    out.push('\n');
    out.push_str(
        "You can always add one small step for tomorrow rather than trying to fix everything at once.\n",
    );
    out.push('\n');
    out
}

/// Loads the whole journal and prints the aggregate report, or a short
/// notice when nothing has been recorded yet.
pub async fn show_summary(store: &impl JournalStore) -> Result<()> {
    let entries = store.load_all().await?;
    match build_summary(&entries) {
        None => {
            println!();
            println!("No reflections found yet. Add at least one day first.");
            println!();
        }
        Some(report) => print!("{}", render_summary(&report)),
    }
    Ok(())
}
