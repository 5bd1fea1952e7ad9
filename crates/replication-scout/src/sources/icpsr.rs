//! openICPSR adapter (institutional archive).
//!
//! openICPSR exposes no DOI index, only a study search returning an HTML
//! result list, so this adapter is free-text only and ignores the
//! identifier. Relative study links are resolved against the search URL.

use std::time::Duration;

use scraper::{Html, Selector};

use super::{SearchTerms, SourceAdapter};
use crate::client::HttpContext;
use crate::config::Config;
use crate::error::ClientResult;
use crate::models::{RawCandidate, SourceKind};
use crate::similarity;

/// openICPSR study search.
pub struct IcpsrSource {
    http: HttpContext,
    search_url: String,
    timeout: Duration,
    top_k: usize,
    max_terms: usize,
}

impl IcpsrSource {
    /// Build the adapter against the configured endpoint.
    #[must_use]
    pub fn new(config: &Config, http: HttpContext) -> Self {
        Self {
            http,
            search_url: config.icpsr_search_url.clone(),
            timeout: config.search_timeout,
            top_k: config.scoring.top_k,
            max_terms: crate::config::scoring::MAX_QUERY_TERMS,
        }
    }

    /// Extract study candidates from the result-list markup.
    fn parse_results(&self, body: &str) -> Vec<RawCandidate> {
        let document = Html::parse_document(body);
        let result = Selector::parse("div.search-result").expect("valid selector");
        let title_link = Selector::parse("a.title").expect("valid selector");
        let abstract_text = Selector::parse("p.abstract").expect("valid selector");

        let base = url::Url::parse(&self.search_url).ok();

        let mut candidates = Vec::new();
        for entry in document.select(&result).take(self.top_k) {
            let Some(link) = entry.select(&title_link).next() else {
                continue;
            };
            let Some(href) = link.value().attr("href") else {
                continue;
            };

            let identifier = match &base {
                Some(base) => match base.join(href) {
                    Ok(joined) => joined.to_string(),
                    Err(_) => continue,
                },
                None => href.to_string(),
            };

            let title = link.text().collect::<String>().trim().to_string();
            if title.is_empty() {
                continue;
            }

            let description = entry
                .select(&abstract_text)
                .next()
                .map(|node| node.text().collect::<String>().trim().to_string())
                .filter(|text| !text.is_empty());

            candidates.push(RawCandidate {
                title,
                identifier,
                metadata: description,
                source: SourceKind::Icpsr,
            });
        }

        candidates
    }

    async fn lookup(&self, terms: &SearchTerms<'_>) -> ClientResult<Vec<RawCandidate>> {
        let query = similarity::query_terms(terms.title, self.max_terms).join(" ");
        let params = vec![("q".to_string(), query)];

        let body = self.http.get_html(&self.search_url, &params, self.timeout).await?;
        Ok(self.parse_results(&body))
    }
}

#[async_trait::async_trait]
impl SourceAdapter for IcpsrSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Icpsr
    }

    fn label(&self) -> &str {
        "icpsr"
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
