use std::{collections::HashSet, sync::LazyLock};

/// Words that pull the mood score up when they appear in an answer.
pub static POSITIVE_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "calm", "grateful", "happy", "good", "hopeful", "relaxed", "progress",
        "energy", "energised", "energized", "proud", "excited", "okay", "better",
    ])
});

/// Words that pull the mood score down. Also the source set for stress hints.
pub static NEGATIVE_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "tired", "exhausted", "anxious", "worried", "stressed", "overwhelmed",
        "low", "drained", "sad", "down", "frustrated", "angry", "tense",
    ])
});

/// Filler words excluded from keyword tallies.
pub static STOPWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "the", "and", "a", "an", "to", "for", "in", "on", "of", "at", "it",
        "is", "was", "am", "are", "this", "that", "with", "but", "so", "just",
        "have", "had", "been", "from", "today", "yesterday", "tomorrow",
    ])
});
