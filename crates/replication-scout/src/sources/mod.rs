//! Source adapters, one per hosting service.
//!
//! Each adapter wraps one external search/lookup surface and returns zero
//! or more raw candidates for a query. Identifier-based lookup runs first
//! when a DOI is supplied; free-text title search is the fallback. A single
//! timeout-bounded attempt is made per distinct query, and any transport or
//! parse failure is absorbed into an empty result rather than propagated.

mod dataverse;
mod icpsr;
mod publisher;
mod zenodo;

pub use dataverse::DataverseSource;
pub use icpsr::IcpsrSource;
pub use publisher::PublisherPageSource;
pub use zenodo::ZenodoSource;

use crate::client::HttpContext;
use crate::config::Config;
use crate::models::{PaperQuery, RawCandidate, SourceKind};
use crate::similarity;

/// Query fields handed to an adapter, derived from one paper query.
#[derive(Debug, Clone)]
pub struct SearchTerms<'a> {
    /// Persistent identifier (DOI), when the paper has one.
    pub identifier: Option<&'a str>,

    /// Paper title.
    pub title: &'a str,

    /// First author surname, lowercased, when extractable.
    pub author_surname: Option<String>,
}

impl<'a> SearchTerms<'a> {
    /// Derive search terms from a paper query.
    #[must_use]
    pub fn from_query(query: &'a PaperQuery) -> Self {
        Self {
            identifier: query.doi.as_deref(),
            title: &query.title,
            author_surname: query.authors.as_deref().and_then(similarity::first_surname),
        }
    }
}

/// One hosting service's search capability.
#[async_trait::async_trait]
pub trait SourceAdapter: Send + Sync {
    /// Which service family this adapter belongs to.
    fn kind(&self) -> SourceKind;

    /// Instance label for logs (distinguishes Dataverse installations).
    fn label(&self) -> &str;

    /// Look up candidates for the given terms.
    ///
    /// Infallible by contract: network failure is local and non-fatal, so
    /// implementations absorb every error into an empty sequence.
    async fn search(&self, terms: &SearchTerms<'_>) -> Vec<RawCandidate>;
}

/// Adapter-order policy for one venue family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPolicy {
    /// The venue's own publisher page first, then the repositories.
    VenueFirst,

    /// Generic repositories first; the publisher page is the last resort.
    GenericFirst,
}

/// Venue substrings that map to the venue-first policy (AEA family).
const VENUE_FIRST_FAMILIES: &[&str] = &["american economic"];

impl SearchPolicy {
    /// Classify a venue name. Unknown venues fall back to the generic-first
    /// policy; classification never fails.
    #[must_use]
    pub fn for_venue(venue: &str) -> Self {
        let venue = venue.to_lowercase();
        if VENUE_FIRST_FAMILIES.iter().any(|family| venue.contains(family)) {
            Self::VenueFirst
        } else {
            Self::GenericFirst
        }
    }
}

/// The wired adapter set, swept in policy order.
pub struct SourceRegistry {
    publisher: PublisherPageSource,
    zenodo: ZenodoSource,
    dataverse_primary: DataverseSource,
    dataverse_secondary: DataverseSource,
    archive: IcpsrSource,
}

impl SourceRegistry {
    /// Wire every adapter from configuration against a shared HTTP context.
    #[must_use]
    pub fn new(config: &Config, http: &HttpContext) -> Self {
        Self {
            publisher: PublisherPageSource::new(config, http.clone()),
            zenodo: ZenodoSource::new(config, http.clone()),
            dataverse_primary: DataverseSource::new(&config.dataverse_primary, config, http.clone()),
            dataverse_secondary: DataverseSource::new(
                &config.dataverse_secondary,
                config,
                http.clone(),
            ),
            archive: IcpsrSource::new(config, http.clone()),
        }
    }

    /// Adapters in the order the given policy sweeps them.
    #[must_use]
    pub fn in_policy_order(&self, policy: SearchPolicy) -> Vec<&dyn SourceAdapter> {
        match policy {
            SearchPolicy::VenueFirst => vec![
                &self.publisher,
                &self.zenodo,
                &self.dataverse_primary,
                &self.dataverse_secondary,
                &self.archive,
            ],
            SearchPolicy::GenericFirst => vec![
                &self.zenodo,
                &self.dataverse_primary,
                &self.dataverse_secondary,
                &self.archive,
                &self.publisher,
            ],
        }
    }
}
