/// Leading tokens that are ignored when comparing responses.
const LEADING_ARTICLES: [&str; 4] = ["a", "an", "the", "to"];

/// Converts a response into its canonical form for equality judging.
///
/// The steps are applied in order:
///
/// 1. Lowercase the text
/// 2. Replace `&` with `and`
/// 3. Strip ASCII punctuation and collapse whitespace runs
/// 4. Drop leading `a`, `an`, `the` or `to` tokens while another token follows
///
/// Two responses are judged equal iff their canonical forms are equal.
///
/// # Example
///
/// ```
/// use quizboard_engine::normalize;
///
/// assert_eq!(normalize("A Tale of Two Cities"), "tale of two cities");
/// assert_eq!(normalize("Rock & Roll!"), "rock and roll");
/// assert_eq!(normalize(""), "");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase().replace('&', "and");
    let stripped = lowered
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect::<String>();

    let mut tokens = stripped.split_whitespace().collect::<Vec<_>>();
    // Repeated so that normalizing a canonical form is a no-op.
    let skip = tokens
        .iter()
        .take(tokens.len().saturating_sub(1))
        .take_while(|token| LEADING_ARTICLES.contains(token))
        .count();
    tokens.drain(..skip);
    tokens.join(" ")
}
