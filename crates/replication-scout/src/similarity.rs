//! Text similarity scoring for title matching.
//!
//! Pure functions, no side effects. Tokens of length <= 3 are discarded
//! everywhere to suppress stop-word noise; empty or missing input scores 0.

use std::collections::HashSet;

/// Significant-token set of a text: whitespace-split, lowercased, tokens
/// longer than 3 characters.
fn token_set(text: &str) -> HashSet<String> {
    text.split_whitespace()
        .filter(|word| word.chars().count() > 3)
        .map(str::to_lowercase)
        .collect()
}

/// Jaccard coefficient of the two titles' significant-token sets.
///
/// Returns a value in [0, 1]; 0 when the union is empty.
#[must_use]
pub fn title_similarity(a: &str, b: &str) -> f64 {
    let set_a = token_set(a);
    let set_b = token_set(b);

    let union = set_a.union(&set_b).count();
    if union == 0 {
        return 0.0;
    }

    let intersection = set_a.intersection(&set_b).count();
    intersection as f64 / union as f64
}

/// Shared-token count over the smaller set.
///
/// Captures whether one title is a strict superset/subset of the other,
/// common when a repository listing truncates or extends the paper title.
/// Returns a value in [0, 1]; 0 when either set is empty.
#[must_use]
pub fn word_match_ratio(a: &str, b: &str) -> f64 {
    let set_a = token_set(a);
    let set_b = token_set(b);

    let smaller = set_a.len().min(set_b.len());
    if smaller == 0 {
        return 0.0;
    }

    let intersection = set_a.intersection(&set_b).count();
    intersection as f64 / smaller as f64
}

/// First author's surname from an author-list string.
///
/// The list is either a single name or `"First Last; First Last"`. A
/// `"Last, First"` segment yields the part before the comma; otherwise the
/// last whitespace token of the first segment.
#[must_use]
pub fn first_surname(authors: &str) -> Option<String> {
    let first = authors.split(';').next()?.trim();
    if first.is_empty() {
        return None;
    }

    if let Some((last, _)) = first.split_once(',') {
        let last = last.trim();
        if !last.is_empty() {
            return Some(last.to_lowercase());
        }
    }

    first.split_whitespace().next_back().map(str::to_lowercase)
}

/// Whether the query's first author surname appears anywhere in the
/// candidate text (case-insensitive). Missing input reports false.
#[must_use]
pub fn author_match(authors: Option<&str>, candidate_text: &str) -> bool {
    let Some(surname) = authors.and_then(first_surname) else {
        return false;
    };

    candidate_text.to_lowercase().contains(&surname)
}

/// Significant title terms for free-text queries: punctuation stripped,
/// tokens longer than 3 characters, first `max` kept in title order.
#[must_use]
pub fn query_terms(title: &str, max: usize) -> Vec<String> {
    let cleaned: String =
        title.chars().map(|c| if c.is_alphanumeric() { c } else { ' ' }).collect();

    cleaned
        .split_whitespace()
        .filter(|word| word.chars().count() > 3)
        .take(max)
        .map(str::to_lowercase)
        .collect()
}
