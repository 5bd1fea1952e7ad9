//! Candidate records produced by source adapters and scored by the ranker.

use serde::Serialize;

/// Which hosting service produced a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceKind {
    /// Publisher article page (direct link extraction).
    PublisherPage,

    /// Zenodo (DOI-indexed repository).
    Zenodo,

    /// A Dataverse installation (generic artifact repository).
    Dataverse,

    /// openICPSR (institutional archive).
    Icpsr,
}

impl SourceKind {
    /// Stable name for logs and exports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PublisherPage => "publisher-page",
            Self::Zenodo => "zenodo",
            Self::Dataverse => "dataverse",
            Self::Icpsr => "icpsr",
        }
    }
}

/// One hit returned by a source adapter, before scoring.
#[derive(Debug, Clone)]
pub struct RawCandidate {
    /// Candidate title as listed by the service.
    pub title: String,

    /// Candidate identifier/URL.
    pub identifier: String,

    /// Description/abstract text, used for identifier cross-checks and
    /// author matching.
    pub metadata: Option<String>,

    /// The adapter that produced this candidate.
    pub source: SourceKind,
}

impl RawCandidate {
    /// Title and metadata joined, the text the author-match signal scans.
    #[must_use]
    pub fn match_text(&self) -> String {
        match self.metadata.as_deref() {
            Some(meta) => format!("{} {}", self.title, meta),
            None => self.title.clone(),
        }
    }
}

/// A raw candidate plus its similarity components and composite score.
#[derive(Debug, Clone)]
pub struct ScoredCandidate {
    /// The underlying candidate.
    pub candidate: RawCandidate,

    /// Jaccard title similarity in [0, 1].
    pub title_similarity: f64,

    /// Word-match ratio in [0, 1].
    pub word_ratio: f64,

    /// Whether the query's first author surname appears in the candidate.
    pub author_match: bool,

    /// Weighted composite of the three signals.
    pub composite: f64,
}
