//! Curriculum Search
//!
//! Topic and concept lookup over a tabular curriculum dataset (levels,
//! units, topics, vocabulary, skills, genres), served as a browser page
//! and a small JSON API.
//!
//! # Features
//!
//! - **Query expansion**: stop-word filtering, base-form normalization, synonyms
//! - **Ranking**: whole-word exact matches above fuzzy partial-ratio matches
//! - **Highlighting**: first occurrence of the matched term marked in each cell
//! - **Read-only table**: CSV loaded once, shared for the process lifetime
//!
//! # Modules
//!
//! - `types`: Core data structures (CurriculumRow, SearchCategory, MatchCandidate)
//! - `curriculum`: CSV loading and the immutable table
//! - `search`: Synonyms, query expansion, fuzzy scoring, matching, highlighting
//! - `api`: Axum router, HTML page and REST endpoints
//! - `config`: Environment configuration
//! - `error`: Error type
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use curriculum_search::{CurriculumTable, Matcher, QueryExpander, SearchCategory, Thesaurus};
//!
//! fn main() -> curriculum_search::SearchResult<()> {
//!     let table = CurriculumTable::from_path("curriculum.csv")?;
//!     let matcher = Matcher::new(Arc::new(QueryExpander::new(Thesaurus::builtin())));
//!     for hit in matcher.search("habitat", SearchCategory::Vocabulary, &table)? {
//!         println!("{} {}", hit.score, hit.text);
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod curriculum;
pub mod error;
pub mod search;
pub mod types;

// Re-export commonly used items at crate root
pub use config::AppConfig;
pub use curriculum::{CurriculumTable, TableStats};
pub use error::{SearchError, SearchResult};
pub use search::{Highlight, Matcher, QueryExpander, Thesaurus};
pub use types::{
    CurriculumColumn, CurriculumRow, ExpandedQuery, MatchCandidate, MatchKind, SearchCategory,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
