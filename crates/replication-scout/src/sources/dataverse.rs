//! Dataverse adapter (generic artifact repository).
//!
//! The Dataverse search API is installation-generic, so one adapter serves
//! any installation; the registry wires two instances. Identifier lookup
//! walks a ladder of three query shapes, from the dedicated publication-DOI
//! field down to a verbatim mention anywhere.

use std::time::Duration;

use serde::Deserialize;

use super::{SearchTerms, SourceAdapter};
use crate::client::HttpContext;
use crate::config::{Config, DataverseInstance};
use crate::error::ClientResult;
use crate::models::{RawCandidate, SourceKind};
use crate::similarity;

/// One Dataverse installation's search.
pub struct DataverseSource {
    http: HttpContext,
    label: String,
    base_url: String,
    timeout: Duration,
    top_k: usize,
    max_terms: usize,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: SearchData,
}

#[derive(Deserialize, Default)]
struct SearchData {
    #[serde(default)]
    items: Vec<Item>,
}

#[derive(Deserialize)]
struct Item {
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    global_id: String,
}

impl DataverseSource {
    /// Build the adapter for one installation.
    #[must_use]
    pub fn new(instance: &DataverseInstance, config: &Config, http: HttpContext) -> Self {
        Self {
            http,
            label: instance.label.clone(),
            base_url: instance.base_url.clone(),
            timeout: config.search_timeout,
            top_k: config.scoring.top_k,
            max_terms: crate::config::scoring::MAX_QUERY_TERMS,
        }
    }

    async fn query_items(&self, query: String) -> ClientResult<Vec<Item>> {
        let url = format!("{}/api/search", self.base_url);
        let params = vec![
            ("q".to_string(), query),
            ("type".to_string(), "dataset".to_string()),
            ("per_page".to_string(), self.top_k.to_string()),
        ];

        let value = self.http.get_json(&url, &params, self.timeout).await?;
        let response: SearchResponse = serde_json::from_value(value)?;
        Ok(response.data.items)
    }

    /// Map a dataset's persistent id onto a resolvable URL.
    fn dataset_url(&self, global_id: &str) -> Option<String> {
        if global_id.is_empty() {
            return None;
        }

        if let Some(doi) = global_id.strip_prefix("doi:") {
            Some(format!("https://doi.org/{doi}"))
        } else if let Some(hdl) = global_id.strip_prefix("hdl:") {
            Some(format!("https://hdl.handle.net/{hdl}"))
        } else {
            Some(format!("{}/dataset.xhtml?persistentId={global_id}", self.base_url))
        }
    }

    fn candidates_from(&self, items: Vec<Item>) -> Vec<RawCandidate> {
        items
            .into_iter()
            .filter_map(|item| {
                let identifier = self.dataset_url(&item.global_id)?;
                Some(RawCandidate {
                    title: item.name,
                    identifier,
                    metadata: item.description,
                    source: SourceKind::Dataverse,
                })
            })
            .collect()
    }

    async fn lookup(&self, terms: &SearchTerms<'_>) -> ClientResult<Vec<RawCandidate>> {
        if let Some(doi) = terms.identifier {
            // Most precise field first, then a verbatim mention anywhere.
            let queries = [
                format!("publicationIdValue:\"{doi}\""),
                format!("\"{doi}\""),
                format!("relatedPublication:\"{doi}\""),
            ];

            for query in queries {
                let items = self.query_items(query).await?;
                if !items.is_empty() {
                    return Ok(self.candidates_from(items));
                }
            }
        }

        let search_title = similarity::query_terms(terms.title, self.max_terms).join(" ");
        let query = format!(
            "(\"{search_title}\") AND (replication OR \"replication data\" OR \"replication package\")"
        );

        let items = self.query_items(query).await?;
        Ok(self.candidates_from(items))
    }
}

#[async_trait::async_trait]
impl SourceAdapter for DataverseSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Dataverse
    }

    fn label(&self) -> &str {
        &self.label
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
