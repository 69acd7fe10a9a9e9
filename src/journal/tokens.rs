/// Splits text on whitespace and trims leading/trailing ASCII punctuation
/// from every token. Tokens that were pure punctuation come out empty, so
/// callers that care have to skip them explicitly.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
        .map(|t| t.trim_matches(|c: char| c.is_ascii_punctuation()))
}
