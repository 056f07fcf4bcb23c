//! Text tokenization for search indexing and query evaluation.

/// Minimum token length. Single characters carry no signal in API text.
const MIN_TOKEN_LENGTH: usize = 2;

/// Stop words filtered from *natural-mode queries only*. Exact, partial and
/// path modes must keep these: a user may search for "in" as a literal
/// substring.
pub(crate) const STOP_WORDS: &[&str] = &["a", "an", "the", "of", "to", "for", "in", "is", "and"];

/// Tokenizes text: lower-case, split on non-alphanumeric boundaries, drop
/// tokens shorter than [`MIN_TOKEN_LENGTH`]. No stemming; the corpus is API
/// vocabulary, not prose.
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.chars().count() >= MIN_TOKEN_LENGTH)
        .map(str::to_lowercase)
        .collect()
}

/// Drops stop words from a token list. Applied to natural-mode queries
/// before scoring.
pub(crate) fn strip_stop_words(tokens: Vec<String>) -> Vec<String> {
    tokens
        .into_iter()
        .filter(|t| !STOP_WORDS.contains(&t.as_str()))
        .collect()
}
