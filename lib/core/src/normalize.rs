//! Text normalization and tokenization
//!
//! Every string entering the engine passes through [`normalize`] first, at
//! index-build time for catalog names and per request for queries, so that
//! vocabulary terms line up exactly on both sides.

/// Normalize free text for matching.
///
/// Lowercases, maps every character outside `[a-z0-9]` to a space, collapses
/// whitespace runs and trims. Total and idempotent: any input yields a valid
/// (possibly empty) string.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut pending_space = false;

    for c in lowered.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            out.push(c);
            pending_space = false;
        } else {
            pending_space = true;
        }
    }

    out
}

/// Tokenize normalized text into unigrams and bigrams.
///
/// A bigram is two adjacent whitespace-separated tokens joined by a single
/// space, order preserved. Plural folding is applied per token so that a
/// query for "horse" lines up with a catalog entry for "horses"; it runs on
/// both sides of the match, keeping vocabulary terms comparable. Input is
/// expected to already be normalized; the output order is unigrams first,
/// then bigrams, each in text order.
pub fn ngrams(normalized: &str) -> Vec<String> {
    let words: Vec<&str> = normalized.split_whitespace().map(fold_plural).collect();
    let mut terms = Vec::with_capacity(words.len().saturating_mul(2));

    for word in &words {
        terms.push((*word).to_string());
    }
    for pair in words.windows(2) {
        terms.push(format!("{} {}", pair[0], pair[1]));
    }

    terms
}

/// Strip a trailing plural `s` from a token.
///
/// Intentionally minimal: only a single trailing `s` on tokens longer than
/// three characters, never after a double `s` ("glass", "gas" are kept).
fn fold_plural(token: &str) -> &str {
    if token.len() > 3 && token.ends_with('s') && !token.ends_with("ss") {
        &token[..token.len() - 1]
    } else {
        token
    }
}
