//! Configuration for the replication package resolver.

use std::time::Duration;

/// Hosting service endpoints and HTTP tuning constants.
pub mod services {
    use std::time::Duration;

    /// AEA article page, addressed by the paper's own DOI. The canonical
    /// `doi.org` redirect for AEA titles answers 403 upstream, so metadata
    /// is fetched from the publisher's page instead.
    pub const AEA_ARTICLES_URL: &str = "https://www.aeaweb.org/articles";

    /// Zenodo records search endpoint.
    pub const ZENODO_SEARCH_URL: &str = "https://zenodo.org/api/records";

    /// Base for Zenodo record landing pages.
    pub const ZENODO_RECORD_BASE: &str = "https://zenodo.org/record";

    /// Harvard Dataverse installation.
    pub const DATAVERSE_HARVARD_URL: &str = "https://dataverse.harvard.edu";

    /// UNC (Odum Institute) Dataverse installation.
    pub const DATAVERSE_UNC_URL: &str = "https://dataverse.unc.edu";

    /// openICPSR study search page.
    pub const ICPSR_SEARCH_URL: &str = "https://www.openicpsr.org/openicpsr/search/studies";

    /// CrossRef works endpoint (bibliographic metadata source).
    pub const CROSSREF_WORKS_URL: &str = "https://api.crossref.org/works";

    /// Timeout for repository search calls.
    pub const SEARCH_TIMEOUT: Duration = Duration::from_secs(5);

    /// Timeout for publisher article pages (heavier HTML payloads).
    pub const PAGE_TIMEOUT: Duration = Duration::from_secs(10);

    /// Timeout for CrossRef works requests.
    pub const CROSSREF_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Spacing between successive CrossRef requests. Applies to the
    /// metadata fetch only; resolver adapter calls have no enforced spacing.
    pub const CROSSREF_DELAY: Duration = Duration::from_secs(1);

    /// Cache TTL (5 minutes).
    pub const CACHE_TTL: Duration = Duration::from_secs(300);

    /// Maximum cache size.
    pub const CACHE_MAX_SIZE: u64 = 1000;

    /// Maximum keepalive connections.
    pub const MAX_KEEPALIVE: usize = 10;

    /// Keepalive expiry.
    pub const KEEPALIVE_EXPIRY: Duration = Duration::from_secs(30);

    /// User agent sent to every service.
    pub const USER_AGENT: &str = "replication-scout/0.1 (mailto:research@university.edu)";
}

/// Candidate scoring constants. Empirically chosen; treat as tunable
/// defaults, not fixed law.
pub mod scoring {
    /// Weight of the Jaccard title similarity in the composite score.
    pub const TITLE_WEIGHT: f64 = 0.6;

    /// Weight of the word-match ratio.
    pub const WORD_RATIO_WEIGHT: f64 = 0.3;

    /// Weight of the binary author-match signal.
    pub const AUTHOR_WEIGHT: f64 = 0.1;

    /// Minimum composite score for a candidate to be accepted.
    pub const ACCEPT_THRESHOLD: f64 = 0.4;

    /// Candidates evaluated per adapter query.
    pub const TOP_K: usize = 5;

    /// Significant title tokens kept when building free-text queries.
    pub const MAX_QUERY_TERMS: usize = 5;
}

/// Weights, acceptance threshold and evaluation cap for the candidate ranker.
#[derive(Debug, Clone, Copy)]
pub struct ScoringConfig {
    /// Weight of the title similarity term.
    pub title_weight: f64,

    /// Weight of the word-match ratio term.
    pub word_ratio_weight: f64,

    /// Weight of the author-match term.
    pub author_weight: f64,

    /// Minimum composite score for acceptance.
    pub threshold: f64,

    /// Maximum candidates evaluated per query.
    pub top_k: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            title_weight: scoring::TITLE_WEIGHT,
            word_ratio_weight: scoring::WORD_RATIO_WEIGHT,
            author_weight: scoring::AUTHOR_WEIGHT,
            threshold: scoring::ACCEPT_THRESHOLD,
            top_k: scoring::TOP_K,
        }
    }
}

/// One Dataverse installation (the adapter code is installation-generic).
#[derive(Debug, Clone)]
pub struct DataverseInstance {
    /// Short label used in logs and source tags.
    pub label: String,

    /// Installation base URL; `/api/search` and `/dataset.xhtml` hang off it.
    pub base_url: String,
}

/// Resolver configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Publisher article page base URL (Service A).
    pub publisher_articles_url: String,

    /// Zenodo search endpoint (Service B).
    pub zenodo_search_url: String,

    /// Zenodo record landing page base.
    pub zenodo_record_base: String,

    /// Primary Dataverse installation (Service C).
    pub dataverse_primary: DataverseInstance,

    /// Secondary Dataverse installation (Service C).
    pub dataverse_secondary: DataverseInstance,

    /// openICPSR search endpoint (Service D).
    pub icpsr_search_url: String,

    /// CrossRef works endpoint.
    pub crossref_works_url: String,

    /// Timeout for repository search calls.
    pub search_timeout: Duration,

    /// Timeout for publisher article pages.
    pub page_timeout: Duration,

    /// Timeout for CrossRef requests.
    pub crossref_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Spacing between successive CrossRef requests.
    pub crossref_delay: Duration,

    /// Response cache TTL.
    pub cache_ttl: Duration,

    /// Maximum response cache entries.
    pub cache_max_size: u64,

    /// Candidate scoring parameters.
    pub scoring: ScoringConfig,
}

impl Config {
    /// Create the production configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            publisher_articles_url: services::AEA_ARTICLES_URL.to_string(),
            zenodo_search_url: services::ZENODO_SEARCH_URL.to_string(),
            zenodo_record_base: services::ZENODO_RECORD_BASE.to_string(),
            dataverse_primary: DataverseInstance {
                label: "harvard".to_string(),
                base_url: services::DATAVERSE_HARVARD_URL.to_string(),
            },
            dataverse_secondary: DataverseInstance {
                label: "unc".to_string(),
                base_url: services::DATAVERSE_UNC_URL.to_string(),
            },
            icpsr_search_url: services::ICPSR_SEARCH_URL.to_string(),
            crossref_works_url: services::CROSSREF_WORKS_URL.to_string(),
            search_timeout: services::SEARCH_TIMEOUT,
            page_timeout: services::PAGE_TIMEOUT,
            crossref_timeout: services::CROSSREF_TIMEOUT,
            connect_timeout: services::CONNECT_TIMEOUT,
            crossref_delay: services::CROSSREF_DELAY,
            cache_ttl: services::CACHE_TTL,
            cache_max_size: services::CACHE_MAX_SIZE,
            scoring: ScoringConfig::default(),
        }
    }

    /// Create a test configuration pointing every service at a mock server.
    ///
    /// Each service gets a distinct path prefix under `base_url` so one
    /// wiremock instance can stand in for all of them.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            publisher_articles_url: format!("{base_url}/aea/articles"),
            zenodo_search_url: format!("{base_url}/zenodo/api/records"),
            zenodo_record_base: format!("{base_url}/zenodo/record"),
            dataverse_primary: DataverseInstance {
                label: "harvard".to_string(),
                base_url: format!("{base_url}/dataverse1"),
            },
            dataverse_secondary: DataverseInstance {
                label: "unc".to_string(),
                base_url: format!("{base_url}/dataverse2"),
            },
            icpsr_search_url: format!("{base_url}/icpsr/search/studies"),
            crossref_works_url: format!("{base_url}/crossref/works"),
            search_timeout: Duration::from_secs(2),
            page_timeout: Duration::from_secs(2),
            crossref_timeout: Duration::from_secs(2),
            connect_timeout: Duration::from_secs(1),
            crossref_delay: Duration::from_millis(0), // No spacing in tests
            cache_ttl: Duration::from_secs(0),        // No caching in tests
            cache_max_size: 0,
            scoring: ScoringConfig::default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
