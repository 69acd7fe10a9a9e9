use anyhow::Result;
use chrono::{Local, NaiveDateTime, Timelike};
use tokio::io::AsyncBufRead;
use tracing::debug;

use crate::{
    cli::prompt::Prompter,
    journal::{mood::analyse_mood, stress::build_stress_hint},
    store::entry::Entry,
};

/// Raw answers from one capture session, before any analysis.
#[derive(Debug)]
pub struct Answers {
    pub energy: u8,
    pub on_mind: String,
    pub went_well: String,
    pub difficult: String,
    pub small_step: String,
}

/// Runs one reflection session: asks the questions, derives the mood fields
/// and prints the short session summary. Saving is left to the caller.
pub async fn capture_reflection<R: AsyncBufRead + Unpin>(
    prompter: &mut Prompter<R>,
) -> Result<Entry> {
    println!();
    println!("New daily reflection");
    println!("{}", "-".repeat(40));

    let energy = prompter
        .int_in_range(
            "How is your energy today on a scale from 1 (very low) to 5 (very high)? ",
            1,
            5,
        )
        .await? as u8;
    let on_mind = prompter.line("What is on your mind right now? ").await?;
    let went_well = prompter.line("One thing that went well today? ").await?;
    let difficult = prompter.line("One thing that felt difficult today? ").await?;
    let small_step = prompter
        .line("Is there one small step you want to take tomorrow? ")
        .await?;

    let now = Local::now()
        .naive_local()
        .with_nanosecond(0)
        .expect("zero nanoseconds is always valid");
    let entry = derive_entry(
        Answers {
            energy,
            on_mind,
            went_well,
            difficult,
            small_step,
        },
        now,
    );
    debug!("Captured reflection with tone {} score {}", entry.tone, entry.mood_score);

    print_session_summary(&entry);
    Ok(entry)
}

/// Turns raw answers into a finished entry. The mood analysis runs over the
/// lowercased space-joined answers about the day itself; the small step is a
/// plan and stays out of it.
pub fn derive_entry(answers: Answers, timestamp: NaiveDateTime) -> Entry {
    let combined = [
        answers.on_mind.as_str(),
        answers.went_well.as_str(),
        answers.difficult.as_str(),
    ]
    .join(" ")
    .to_lowercase();

    let (mood_score, tone) = analyse_mood(&combined, answers.energy);
    let stress_hint = build_stress_hint(&combined);

    Entry {
        timestamp,
        energy: answers.energy,
        tone,
        mood_score,
        stress_hint,
        on_mind: answers.on_mind,
        went_well: answers.went_well,
        difficult: answers.difficult,
        small_step: answers.small_step,
    }
}

fn print_session_summary(entry: &Entry) {
    println!();
    println!("Thank you. Here is a short reflection summary for today:");
    println!("- Energy: {}/5", entry.energy);
    println!("- Overall tone: {} (mood score {})", entry.tone, entry.mood_score);
    if !entry.stress_hint.is_empty() {
        println!("- Noticed: {}", entry.stress_hint);
    }
    if !entry.small_step.is_empty() {
        println!("- Tomorrow's small step: {}", entry.small_step);
    }
    println!();
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
    use tokio::io::BufReader;

    use crate::{
        cli::{
            capture::{Answers, capture_reflection, derive_entry},
            prompt::Prompter,
        },
        journal::mood::Tone,
    };

    const TEST_TIMESTAMP: NaiveDateTime = NaiveDateTime::new(
        NaiveDate::from_ymd_opt(2018, 7, 4).unwrap(),
        NaiveTime::MIN,
    );

    fn answers(energy: u8, on_mind: &str, went_well: &str, difficult: &str) -> Answers {
        Answers {
            energy,
            on_mind: on_mind.into(),
            went_well: went_well.into(),
            difficult: difficult.into(),
            small_step: String::new(),
        }
    }

    #[test]
    fn test_good_day_reads_positive() {
        let entry = derive_entry(
            answers(5, "I feel grateful and energised", "good progress", ""),
            TEST_TIMESTAMP,
        );

        assert_eq!(entry.tone, Tone::Positive);
        assert!(entry.mood_score >= 2);
        assert_eq!(entry.stress_hint, "");
    }

    #[test]
    fn test_answers_are_lowercased_before_analysis() {
        let entry = derive_entry(answers(3, "TIRED and Tired again", "", ""), TEST_TIMESTAMP);

        assert_eq!(entry.mood_score, -2);
        assert_eq!(entry.tone, Tone::Strained);
        assert_eq!(
            entry.stress_hint,
            "several mentions of being tired or low on energy"
        );
    }

    #[test]
    fn test_raw_answers_are_kept_verbatim() {
        let entry = derive_entry(
            answers(3, "The Exam!", "Held my focus", "Noise"),
            TEST_TIMESTAMP,
        );
        assert_eq!(entry.on_mind, "The Exam!");
        assert_eq!(entry.went_well, "Held my focus");
        assert_eq!(entry.difficult, "Noise");
    }

    #[tokio::test]
    async fn test_scripted_session_with_energy_retry() -> Result<()> {
        let input = "high\n4\nthe project\nsteady progress\n\nkeep going\n";
        let mut prompter = Prompter::new(BufReader::new(input.as_bytes()));

        let entry = capture_reflection(&mut prompter).await?;

        assert_eq!(entry.energy, 4);
        assert_eq!(entry.on_mind, "the project");
        assert_eq!(entry.difficult, "");
        assert_eq!(entry.small_step, "keep going");
        assert_eq!(entry.timestamp.and_utc().timestamp_subsec_nanos(), 0);
        Ok(())
    }
}
