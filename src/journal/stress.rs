use crate::journal::{lexicon::NEGATIVE_WORDS, tokens::tokenize};

/// Builds a short note about repeated negative wording, or an empty string
/// when there is nothing to point out. Rules apply in order and the first
/// match wins: three or more negative occurrences always produce the listing
/// variant, even when they are all the same word.
pub fn build_stress_hint(text: &str) -> String {
    let negatives = tokenize(text)
        .filter(|t| NEGATIVE_WORDS.contains(t))
        .collect::<Vec<_>>();

    if negatives.len() >= 3 {
        let mut unique = negatives.clone();
        unique.sort_unstable();
        unique.dedup();
        return format!("many mentions of {}", unique.join(", "));
    }
    if negatives.iter().any(|t| *t == "tired" || *t == "exhausted") {
        return "several mentions of being tired or low on energy".to_string();
    }
    if negatives.iter().any(|t| *t == "worried" || *t == "anxious") {
        return "worry and anxiety showed up more than once".to_string();
    }
    String::new()
}
