use std::collections::HashMap;

use crate::{
    journal::{lexicon::STOPWORDS, tokens::tokenize},
    store::entry::Entry,
};

/// Keyword frequency across a set of entries. Words are kept in the order
/// they were first seen so that [KeywordCounts::top] can break count ties by
/// first appearance with a stable sort.
#[derive(Debug, Default)]
pub struct KeywordCounts {
    words: Vec<(String, u32)>,
    index: HashMap<String, usize>,
}

impl KeywordCounts {
    fn bump(&mut self, token: &str) {
        match self.index.get(token) {
            Some(&at) => self.words[at].1 += 1,
            None => {
                self.index.insert(token.to_string(), self.words.len());
                self.words.push((token.to_string(), 1));
            }
        }
    }

    pub fn get(&self, word: &str) -> u32 {
        self.index.get(word).map(|&at| self.words[at].1).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True if any of the given words was counted at least once.
    pub fn contains_any(&self, words: &[&str]) -> bool {
        words.iter().any(|w| self.index.contains_key(*w))
    }

    /// Up to `n` words with the highest counts, most frequent first. The sort
    /// is stable, so equal counts stay in first-seen order.
    pub fn top(&self, n: usize) -> Vec<(&str, u32)> {
        let mut ranked = self
            .words
            .iter()
            .map(|(word, count)| (word.as_str(), *count))
            .collect::<Vec<_>>();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}

/// Tallies every non-stopword token across the analysed answers of all
/// entries. Counts are global over the whole collection, not per entry.
pub fn summarise_keywords(entries: &[Entry]) -> KeywordCounts {
    let mut counts = KeywordCounts::default();
    for entry in entries {
        let text = entry.combined_text();
        for token in tokenize(&text) {
            if token.is_empty() || STOPWORDS.contains(token) {
                continue;
            }
            counts.bump(token);
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use crate::{journal::keywords::summarise_keywords, store::entry::Entry};

    fn entry(on_mind: &str, went_well: &str, difficult: &str) -> Entry {
        Entry::test_entry(on_mind, went_well, difficult)
    }

    #[test]
    fn test_stopwords_and_empty_tokens_are_skipped() {
        let entries = [entry("the project went well", "", "")];
        let counts = summarise_keywords(&entries);

        assert_eq!(counts.get("project"), 1);
        assert_eq!(counts.get("went"), 1);
        assert_eq!(counts.get("well"), 1);
        assert_eq!(counts.get("the"), 0);
        assert_eq!(counts.len(), 3);
    }

    #[test]
    fn test_counts_are_global_across_entries() {
        let entries = [
            entry("slow progress", "progress on the essay", ""),
            entry("", "", "no progress at all"),
        ];
        let counts = summarise_keywords(&entries);

        assert_eq!(counts.get("progress"), 3);
        assert_eq!(counts.get("essay"), 1);
    }

    #[test]
    fn test_answers_are_lowercased_before_counting() {
        let entries = [entry("Running", "running AGAIN", "")];
        let counts = summarise_keywords(&entries);
        assert_eq!(counts.get("running"), 2);
        assert_eq!(counts.get("again"), 1);
    }

    #[test]
    fn test_summarise_is_idempotent() {
        let entries = [
            entry("study study sleep", "good study session", ""),
            entry("more sleep", "", "sleep"),
        ];
        let first = summarise_keywords(&entries);
        let second = summarise_keywords(&entries);

        assert_eq!(first.len(), second.len());
        for (word, count) in first.top(usize::MAX) {
            assert_eq!(second.get(word), count);
        }
    }

    #[test]
    fn test_top_ranks_by_count() {
        let entries = [entry(
            "sleep sleep sleep study study essay",
            "",
            "",
        )];
        let counts = summarise_keywords(&entries);
        let top = counts.top(2);

        assert_eq!(top, vec![("sleep", 3), ("study", 2)]);
    }

    #[test]
    fn test_top_breaks_ties_by_first_seen() {
        let entries = [entry("walk walk essay essay music", "", "")];
        let counts = summarise_keywords(&entries);

        assert_eq!(
            counts.top(3),
            vec![("walk", 2), ("essay", 2), ("music", 1)]
        );
    }

    #[test]
    fn test_contains_any() {
        let counts = summarise_keywords(&[entry("tired after practice", "", "")]);
        assert!(counts.contains_any(&["sleep", "tired", "exhausted"]));
        assert!(!counts.contains_any(&["progress", "learning"]));
    }
}
