//! Value types flowing through the resolver.
//!
//! All records are explicit, immutable-by-convention structs; candidate
//! records are ephemeral, created during one adapter call and consumed by
//! the ranker in the same call.

mod candidate;
mod outcome;
mod paper;

pub use candidate::{RawCandidate, ScoredCandidate, SourceKind};
pub use outcome::ResolutionOutcome;
pub use paper::PaperQuery;
