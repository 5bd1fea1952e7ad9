//! Bibliographic metadata source (CrossRef works API).
//!
//! Thin collaborator: fetches journal issues by ISSN and date range and
//! shapes them into paper queries. A politeness delay is enforced between
//! successive requests here; resolver adapter calls have no such spacing.

use std::time::Duration;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::client::HttpContext;
use crate::config::Config;
use crate::error::{ClientResult, PipelineError, PipelineResult};
use crate::models::PaperQuery;

/// Static journal registry: the top-15 economics journals by RePEc ranking,
/// with their ISSNs.
pub mod journals {
    /// Journal name / ISSN pairs known to the CLI.
    pub const TOP_ECON: &[(&str, &str)] = &[
        ("American Economic Review", "0002-8282"),
        ("Quarterly Journal of Economics", "0033-5533"),
        ("Journal of Political Economy", "0022-3808"),
        ("Econometrica", "0012-9682"),
        ("Review of Economic Studies", "0034-6527"),
        ("Journal of Economic Theory", "0022-0531"),
        ("Journal of Monetary Economics", "0304-3932"),
        ("Economic Journal", "0013-0133"),
        ("Journal of the European Economic Association", "1542-4766"),
        ("Review of Economics and Statistics", "0034-6535"),
        ("Journal of Economic Growth", "1381-4338"),
        ("Journal of International Economics", "0022-1996"),
        ("Journal of Public Economics", "0047-2727"),
        ("Journal of Labor Economics", "0734-306X"),
        ("Journal of Development Economics", "0304-3878"),
    ];

    /// ISSN for a registered journal name.
    #[must_use]
    pub fn issn(name: &str) -> Option<&'static str> {
        TOP_ECON.iter().find(|(journal, _)| *journal == name).map(|(_, issn)| *issn)
    }
}

/// Resolve requested journal names against the registry; an empty request
/// selects the whole registry.
pub fn select_journals(names: &[String]) -> PipelineResult<Vec<(&'static str, &'static str)>> {
    if names.is_empty() {
        return Ok(journals::TOP_ECON.to_vec());
    }

    names
        .iter()
        .map(|name| {
            journals::TOP_ECON
                .iter()
                .find(|(journal, _)| journal.eq_ignore_ascii_case(name))
                .copied()
                .ok_or_else(|| PipelineError::UnknownJournal(name.clone()))
        })
        .collect()
}

/// Fields requested from the works endpoint.
const SELECT_FIELDS: &str = "title,author,published-print,published-online,DOI,abstract,container-title";

/// Rows fetched per request.
const ROWS_PER_REQUEST: usize = 50;

/// Cap on requests per journal.
const MAX_REQUESTS: usize = 10;

/// CrossRef works client.
pub struct CrossRefClient {
    http: HttpContext,
    works_url: String,
    timeout: Duration,
    delay: Duration,
}

#[derive(Deserialize)]
struct WorksResponse {
    #[serde(default)]
    message: Message,
}

#[derive(Deserialize, Default)]
struct Message {
    #[serde(default)]
    items: Vec<Work>,
}

#[derive(Deserialize)]
struct Work {
    #[serde(default)]
    title: Vec<String>,
    #[serde(default)]
    author: Vec<WorkAuthor>,
    #[serde(rename = "DOI", default)]
    doi: Option<String>,
    #[serde(default)]
    r#abstract: Option<String>,
    #[serde(rename = "container-title", default)]
    container_title: Vec<String>,
    #[serde(rename = "published-print", default)]
    published_print: Option<DateField>,
    #[serde(rename = "published-online", default)]
    published_online: Option<DateField>,
}

#[derive(Deserialize)]
struct WorkAuthor {
    #[serde(default)]
    given: Option<String>,
    #[serde(default)]
    family: Option<String>,
}

#[derive(Deserialize)]
struct DateField {
    #[serde(rename = "date-parts", default)]
    date_parts: Vec<Vec<i32>>,
}

impl CrossRefClient {
    /// Build the client from configuration.
    #[must_use]
    pub fn new(config: &Config, http: HttpContext) -> Self {
        Self {
            http,
            works_url: config.crossref_works_url.clone(),
            timeout: config.crossref_timeout,
            delay: config.crossref_delay,
        }
    }

    /// Fetch up to `target` papers for one journal over a year range.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure or an unparseable response.
    pub async fn journal_papers(
        &self,
        journal: &str,
        issn: &str,
        start_year: i32,
        end_year: i32,
        target: usize,
    ) -> ClientResult<Vec<PaperQuery>> {
        let mut papers = Vec::new();
        let mut offset = 0;

        tracing::info!(journal, issn, start_year, end_year, "fetching journal");

        for _ in 0..MAX_REQUESTS {
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }

            let params = vec![
                (
                    "filter".to_string(),
                    format!("issn:{issn},from-pub-date:{start_year},until-pub-date:{end_year}"),
                ),
                ("rows".to_string(), ROWS_PER_REQUEST.to_string()),
                ("offset".to_string(), offset.to_string()),
                ("select".to_string(), SELECT_FIELDS.to_string()),
                ("sort".to_string(), "published".to_string()),
                ("order".to_string(), "desc".to_string()),
            ];

            let value = self.http.get_json(&self.works_url, &params, self.timeout).await?;
            let response: WorksResponse = serde_json::from_value(value)?;
            let batch = response.message.items.len();

            papers.extend(response.message.items.into_iter().filter_map(|work| parse_work(work, journal)));

            if papers.len() >= target || batch < ROWS_PER_REQUEST {
                break;
            }
            offset += ROWS_PER_REQUEST;
        }

        papers.truncate(target);
        tracing::info!(journal, count = papers.len(), "journal fetched");
        Ok(papers)
    }
}

/// Shape one CrossRef work into a paper query. Untitled works are dropped.
fn parse_work(work: Work, journal: &str) -> Option<PaperQuery> {
    let title = work.title.join(" ").trim().to_string();
    if title.is_empty() {
        return None;
    }

    let authors: Vec<String> = work
        .author
        .iter()
        .take(10)
        .map(|author| {
            format!(
                "{} {}",
                author.given.as_deref().unwrap_or(""),
                author.family.as_deref().unwrap_or("")
            )
            .trim()
            .to_string()
        })
        .filter(|name| !name.is_empty())
        .collect();

    let date = work.published_print.as_ref().or(work.published_online.as_ref());
    let (year, published) = match date.and_then(|d| d.date_parts.first()) {
        Some(parts) => {
            let year = parts.first().copied();
            let month = parts.get(1).copied().unwrap_or(1);
            let day = parts.get(2).copied().unwrap_or(1);
            let published = year
                .and_then(|y| NaiveDate::from_ymd_opt(y, month.max(1) as u32, day.max(1) as u32))
                .map(|d| d.format("%Y-%m-%d").to_string());
            (year, published)
        }
        None => (None, None),
    };

    let venue = work
        .container_title
        .first()
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .unwrap_or(journal)
        .to_string();

    Some(PaperQuery {
        doi: work.doi,
        title,
        r#abstract: work.r#abstract,
        venue,
        authors: if authors.is_empty() { None } else { Some(authors.join("; ")) },
        year,
        published,
    })
}
