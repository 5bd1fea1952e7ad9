//! Resolution orchestrator.
//!
//! One run per paper query: scan the paper's own text for an embedded
//! repository URL, otherwise classify the venue, then sweep the adapters in
//! policy order until one yields an accepted candidate. The orchestrator
//! never raises; an exhausted sweep is reported as `NotFound`.

use std::sync::LazyLock;

use regex::Regex;

use crate::client::HttpContext;
use crate::config::{Config, ScoringConfig};
use crate::models::{PaperQuery, ResolutionOutcome};
use crate::rank;
use crate::sources::{SearchPolicy, SearchTerms, SourceRegistry};

/// URLs embedded in title/abstract text.
static EMBEDDED_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://[^\s\)\]>]+").expect("valid pattern"));

/// Hosts recognized as replication-package repositories during the
/// direct-URL scan.
const REPOSITORY_HOSTS: &[&str] = &[
    "github.com",
    "zenodo.org",
    "dataverse.harvard.edu",
    "figshare.com",
    "osf.io",
    "openicpsr.org",
];

/// Hierarchical multi-source resolver.
pub struct Resolver {
    registry: SourceRegistry,
    scoring: ScoringConfig,
}

impl Resolver {
    /// Wire the resolver from configuration and a shared HTTP context.
    #[must_use]
    pub fn new(config: &Config, http: &HttpContext) -> Self {
        Self { registry: SourceRegistry::new(config, http), scoring: config.scoring }
    }

    /// First repository URL embedded in the paper's own text, verbatim.
    ///
    /// A hit here is an immediate accepted result; no adapter is invoked
    /// and no scoring runs.
    #[must_use]
    pub fn scan_embedded_url(query: &PaperQuery) -> Option<String> {
        let text = query.scan_text();

        for found in EMBEDDED_URL.find_iter(&text) {
            let candidate = found.as_str().trim_end_matches(['.', ',', ';']);
            let Ok(parsed) = url::Url::parse(candidate) else {
                continue;
            };
            let Some(host) = parsed.host_str() else {
                continue;
            };

            let host = host.to_lowercase();
            let known = REPOSITORY_HOSTS
                .iter()
                .any(|repo| host == *repo || host.ends_with(&format!(".{repo}")));
            if known {
                return Some(candidate.to_string());
            }
        }

        None
    }

    /// Resolve one paper query to a terminal outcome.
    pub async fn resolve(&self, query: &PaperQuery) -> ResolutionOutcome {
        if let Some(url) = Self::scan_embedded_url(query) {
            tracing::info!(title = %query.title, url = %url, "embedded repository URL");
            return ResolutionOutcome::Found(url);
        }

        let policy = SearchPolicy::for_venue(&query.venue);
        tracing::debug!(venue = %query.venue, ?policy, "sweeping adapters");

        let terms = SearchTerms::from_query(query);
        for adapter in self.registry.in_policy_order(policy) {
            let candidates = adapter.search(&terms).await;
            if candidates.is_empty() {
                tracing::debug!(source = adapter.label(), "no candidates");
                continue;
            }

            if let Some(accepted) = rank::select_best(query, candidates, &self.scoring) {
                tracing::info!(
                    source = adapter.label(),
                    url = %accepted.candidate.identifier,
                    composite = accepted.composite,
                    "accepted candidate"
                );
                return ResolutionOutcome::Found(accepted.candidate.identifier);
            }

            tracing::debug!(source = adapter.label(), "all candidates below threshold");
        }

        ResolutionOutcome::NotFound
    }
}
