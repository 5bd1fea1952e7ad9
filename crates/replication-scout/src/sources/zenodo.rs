//! Zenodo adapter (DOI-indexed repository).
//!
//! Identifier lookup searches for datasets whose related-identifier list or
//! description references the paper's DOI; the free-text fallback quotes the
//! cleaned title and appends the first author surname when available.

use std::time::Duration;

use serde::Deserialize;

use super::{SearchTerms, SourceAdapter};
use crate::client::HttpContext;
use crate::config::Config;
use crate::error::ClientResult;
use crate::models::{RawCandidate, SourceKind};
use crate::similarity;

/// Zenodo records search.
pub struct ZenodoSource {
    http: HttpContext,
    search_url: String,
    record_base: String,
    timeout: Duration,
    top_k: usize,
    max_terms: usize,
}

#[derive(Deserialize)]
struct RecordsResponse {
    #[serde(default)]
    hits: Hits,
}

#[derive(Deserialize, Default)]
struct Hits {
    #[serde(default)]
    hits: Vec<Hit>,
}

#[derive(Deserialize)]
struct Hit {
    id: serde_json::Value,
    #[serde(default)]
    metadata: HitMetadata,
}

#[derive(Deserialize, Default)]
struct HitMetadata {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    related_identifiers: Vec<RelatedIdentifier>,
}

#[derive(Deserialize)]
struct RelatedIdentifier {
    #[serde(default)]
    identifier: String,
}

impl ZenodoSource {
    /// Build the adapter against the configured endpoint.
    #[must_use]
    pub fn new(config: &Config, http: HttpContext) -> Self {
        Self {
            http,
            search_url: config.zenodo_search_url.clone(),
            record_base: config.zenodo_record_base.clone(),
            timeout: config.search_timeout,
            top_k: config.scoring.top_k,
            max_terms: crate::config::scoring::MAX_QUERY_TERMS,
        }
    }

    async fn query_records(&self, query: String) -> ClientResult<Vec<Hit>> {
        let params = vec![
            ("q".to_string(), query),
            ("type".to_string(), "dataset".to_string()),
            ("size".to_string(), self.top_k.to_string()),
        ];

        let value = self.http.get_json(&self.search_url, &params, self.timeout).await?;
        let response: RecordsResponse = serde_json::from_value(value)?;
        Ok(response.hits.hits)
    }

    fn candidate_from(&self, hit: &Hit) -> RawCandidate {
        // Record ids arrive as numbers or strings depending on API version.
        let id = match &hit.id {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        };

        RawCandidate {
            title: hit.metadata.title.clone(),
            identifier: format!("{}/{}", self.record_base, id),
            metadata: hit.metadata.description.clone(),
            source: SourceKind::Zenodo,
        }
    }

    /// Hits whose related identifiers or description reference the DOI.
    fn doi_linked<'h>(hits: &'h [Hit], doi: &str) -> Vec<&'h Hit> {
        let doi = doi.to_lowercase();
        hits.iter()
            .filter(|hit| {
                let in_related = hit
                    .metadata
                    .related_identifiers
                    .iter()
                    .any(|rel| rel.identifier.to_lowercase().contains(&doi));
                let in_description = hit
                    .metadata
                    .description
                    .as_deref()
                    .is_some_and(|desc| desc.to_lowercase().contains(&doi));
                in_related || in_description
            })
            .collect()
    }

    async fn lookup(&self, terms: &SearchTerms<'_>) -> ClientResult<Vec<RawCandidate>> {
        if let Some(doi) = terms.identifier {
            let query = format!("related.identifier:\"{doi}\" OR \"{doi}\"");
            let hits = self.query_records(query).await?;
            let linked = Self::doi_linked(&hits, doi);
            if !linked.is_empty() {
                return Ok(linked.into_iter().map(|hit| self.candidate_from(hit)).collect());
            }
        }

        // Free-text fallback by cleaned title, narrowed by surname when known.
        let search_title = similarity::query_terms(terms.title, self.max_terms).join(" ");
        let query = match &terms.author_surname {
            Some(surname) => format!("\"{search_title}\" {surname}"),
            None => format!("\"{search_title}\" replication"),
        };

        let hits = self.query_records(query).await?;
        Ok(hits.iter().map(|hit| self.candidate_from(hit)).collect())
    }
}

#[async_trait::async_trait]
impl SourceAdapter for ZenodoSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Zenodo
    }

    fn label(&self) -> &str {
        "zenodo"
    }

    async fn search(&self, terms: &SearchTerms<'_>) -> Vec<RawCandidate> {
        match self.lookup(terms).await {
            Ok(candidates) => candidates,
            Err(err) => {
                tracing::debug!(source = self.label(), error = %err, "search absorbed");
                Vec::new()
            }
        }
    }
}
