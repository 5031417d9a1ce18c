//! Data types for curriculum search
//!
//! This module contains the core data structures shared by the loader,
//! the matcher and the HTTP layer.

mod candidate;
mod category;
mod query;
mod row;

pub use candidate::{MatchCandidate, MatchKind, EXACT_SCORE, MAX_FUZZY_SCORE};
pub use category::SearchCategory;
pub use query::ExpandedQuery;
pub use row::{CurriculumColumn, CurriculumRow};
