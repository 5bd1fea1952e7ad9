//! Candidate ranking: composite scoring and threshold acceptance.

use crate::config::ScoringConfig;
use crate::models::{PaperQuery, RawCandidate, ScoredCandidate};
use crate::similarity;

/// Score one candidate against the originating query.
#[must_use]
pub fn score(query: &PaperQuery, candidate: RawCandidate, scoring: &ScoringConfig) -> ScoredCandidate {
    let title_similarity = similarity::title_similarity(&query.title, &candidate.title);
    let word_ratio = similarity::word_match_ratio(&query.title, &candidate.title);
    let author_match = similarity::author_match(query.authors.as_deref(), &candidate.match_text());

    let composite = scoring.title_weight * title_similarity
        + scoring.word_ratio_weight * word_ratio
        + scoring.author_weight * f64::from(u8::from(author_match));

    ScoredCandidate { candidate, title_similarity, word_ratio, author_match, composite }
}

/// Select the best candidate above the acceptance threshold, or none.
///
/// At most `scoring.top_k` candidates are evaluated. Ties break to the
/// first-seen candidate (strict `>` in the max scan), so the selection is
/// deterministic given the adapter's output order.
#[must_use]
pub fn select_best(
    query: &PaperQuery,
    candidates: Vec<RawCandidate>,
    scoring: &ScoringConfig,
) -> Option<ScoredCandidate> {
    let mut best: Option<ScoredCandidate> = None;

    for candidate in candidates.into_iter().take(scoring.top_k) {
        let scored = score(query, candidate, scoring);
        match &best {
            Some(current) if scored.composite <= current.composite => {}
            _ => best = Some(scored),
        }
    }

    best.filter(|scored| scored.composite >= scoring.threshold)
}
