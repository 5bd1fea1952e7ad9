//! Property tests for the similarity scorer and ranker.

use proptest::prelude::*;

use replication_scout::config::ScoringConfig;
use replication_scout::models::{PaperQuery, RawCandidate, SourceKind};
use replication_scout::{rank, similarity};

fn candidate(title: &str) -> RawCandidate {
    RawCandidate {
        title: title.to_string(),
        identifier: "https://example.org/1".to_string(),
        metadata: None,
        source: SourceKind::Zenodo,
    }
}

proptest! {
    #[test]
    fn similarity_is_bounded(a in ".{0,80}", b in ".{0,80}") {
        let score = similarity::title_similarity(&a, &b);
        prop_assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn word_ratio_is_bounded(a in ".{0,80}", b in ".{0,80}") {
        let ratio = similarity::word_match_ratio(&a, &b);
        prop_assert!((0.0..=1.0).contains(&ratio));
    }

    #[test]
    fn similarity_is_symmetric(a in ".{0,80}", b in ".{0,80}") {
        let forward = similarity::title_similarity(&a, &b);
        let backward = similarity::title_similarity(&b, &a);
        prop_assert!((forward - backward).abs() < f64::EPSILON);
    }

    #[test]
    fn self_similarity_is_one_or_empty(a in ".{0,80}") {
        let score = similarity::title_similarity(&a, &a);
        // 1.0 when any significant token exists, 0.0 otherwise.
        prop_assert!((score - 1.0).abs() < f64::EPSILON || score == 0.0);
    }

    #[test]
    fn composite_is_bounded(a in ".{0,80}", b in ".{0,80}") {
        let query = PaperQuery {
            title: a,
            venue: "J".to_string(),
            ..PaperQuery::default()
        };
        let scored = rank::score(&query, candidate(&b), &ScoringConfig::default());
        prop_assert!((0.0..=1.0).contains(&scored.composite));
    }

    #[test]
    fn raising_threshold_never_accepts_more(
        a in "[a-z]{4,12}( [a-z]{4,12}){0,6}",
        b in "[a-z]{4,12}( [a-z]{4,12}){0,6}",
        low in 0.0f64..1.0,
        high in 0.0f64..1.0,
    ) {
        prop_assume!(low <= high);

        let query = PaperQuery {
            title: a,
            venue: "J".to_string(),
            ..PaperQuery::default()
        };

        let strict = ScoringConfig { threshold: high, ..ScoringConfig::default() };
        let lenient = ScoringConfig { threshold: low, ..ScoringConfig::default() };

        let accepted_strict = rank::select_best(&query, vec![candidate(&b)], &strict).is_some();
        let accepted_lenient = rank::select_best(&query, vec![candidate(&b)], &lenient).is_some();

        // Anything accepted at the higher threshold is accepted at the lower.
        prop_assert!(!accepted_strict || accepted_lenient);
    }
}
