//! Terminal result of one resolution.

use serde::{Deserialize, Serialize};

/// Outcome of resolving one paper query.
///
/// At most one outcome is produced per query; the first adapter in policy
/// order to yield an accepted candidate determines it. A `NotFound` is
/// indistinguishable between "no package exists" and "all lookups failed";
/// absorbed failures are visible at `debug` log level only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "url", rename_all = "kebab-case")]
pub enum ResolutionOutcome {
    /// A replication package was located at the carried URL.
    Found(String),

    /// Every adapter was exhausted without an accepted candidate.
    NotFound,
}

impl ResolutionOutcome {
    /// Whether a package was located.
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The accepted package URL, when found.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Found(url) => Some(url),
            Self::NotFound => None,
        }
    }
}
