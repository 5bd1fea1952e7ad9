//! Paper query record, the input to one resolution.

use serde::{Deserialize, Serialize};

/// Identifying fields of one paper, as supplied by the bibliographic source.
///
/// Constructed fresh per paper and not mutated for the duration of one
/// resolution.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaperQuery {
    /// Persistent identifier (DOI), when the index supplies one.
    #[serde(default)]
    pub doi: Option<String>,

    /// Paper title.
    pub title: String,

    /// Abstract or other free text; may contain embedded URLs.
    #[serde(default)]
    pub r#abstract: Option<String>,

    /// Publishing venue name; also selects the adapter-order policy.
    pub venue: String,

    /// Author list, either a single name or `"First Last; First Last"`.
    #[serde(default)]
    pub authors: Option<String>,

    /// Publication year. Not consulted by resolution; carried for export.
    #[serde(default)]
    pub year: Option<i32>,

    /// Publication date (`YYYY-MM-DD`). Carried for export.
    #[serde(default)]
    pub published: Option<String>,
}

impl PaperQuery {
    /// Title and abstract joined, the text scanned for embedded URLs.
    #[must_use]
    pub fn scan_text(&self) -> String {
        match self.r#abstract.as_deref() {
            Some(text) => format!("{} {}", self.title, text),
            None => self.title.clone(),
        }
    }

    /// The DOI-based article link, when a DOI is present.
    #[must_use]
    pub fn link(&self) -> Option<String> {
        self.doi.as_ref().map(|doi| format!("https://doi.org/{doi}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_text_joins_title_and_abstract() {
        let paper = PaperQuery {
            title: "Credit Cycles".to_string(),
            r#abstract: Some("Data at https://zenodo.org/record/1".to_string()),
            ..PaperQuery::default()
        };
        assert_eq!(paper.scan_text(), "Credit Cycles Data at https://zenodo.org/record/1");
    }

    #[test]
    fn test_link_requires_doi() {
        let mut paper = PaperQuery { title: "T".to_string(), ..PaperQuery::default() };
        assert_eq!(paper.link(), None);

        paper.doi = Some("10.1257/aer.20170001".to_string());
        assert_eq!(paper.link().as_deref(), Some("https://doi.org/10.1257/aer.20170001"));
    }
}
