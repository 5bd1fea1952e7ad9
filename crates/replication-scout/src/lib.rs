//! Replication package scout
//!
//! Locates, for a given academic paper, an external dataset/code repository
//! ("replication package") by querying candidate hosting services in a
//! prioritized order and scoring matches by textual and metadata similarity.
//!
//! # Design
//!
//! - **Hierarchical resolution**: a paper's own abstract is scanned for an
//!   embedded repository URL first; otherwise adapters for the publisher's
//!   article page, Zenodo, two Dataverse installations, and openICPSR are
//!   swept in a venue-dependent order, and the first accepted match wins.
//! - **Failure tolerant**: every transport or parse failure is absorbed at
//!   the adapter boundary as "zero candidates"; the resolver always reaches
//!   a terminal outcome.
//! - **Sequential**: one paper at a time, one adapter call at a time, each
//!   bounded by a per-adapter timeout.
//!
//! # Example
//!
//! ```no_run
//! use replication_scout::{Config, HttpContext, Resolver, PaperQuery};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::new();
//!     let http = HttpContext::new(&config)?;
//!     let resolver = Resolver::new(&config, &http);
//!
//!     let paper = PaperQuery {
//!         doi: Some("10.1257/aer.20170001".to_string()),
//!         title: "Credit, Crisis, and Recovery".to_string(),
//!         venue: "American Economic Review".to_string(),
//!         ..PaperQuery::default()
//!     };
//!
//!     let outcome = resolver.resolve(&paper).await;
//!     println!("found: {:?}", outcome.url());
//!     Ok(())
//! }
//! ```

pub mod bibliography;
pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod pipeline;
pub mod rank;
pub mod resolver;
pub mod similarity;
pub mod sources;

pub use client::HttpContext;
pub use config::Config;
pub use error::{ClientError, PipelineError};
pub use models::{PaperQuery, RawCandidate, ResolutionOutcome, ScoredCandidate};
pub use pipeline::{Pipeline, ResolvedPaper};
pub use resolver::Resolver;
