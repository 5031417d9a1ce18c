//! Shared application state

use std::sync::Arc;

use crate::curriculum::CurriculumTable;
use crate::error::SearchResult;
use crate::search::Matcher;
use crate::types::{MatchCandidate, SearchCategory};

/// State shared by every request
///
/// The table is read-only after startup, so no locking is needed.
pub struct AppState {
    pub table: Arc<CurriculumTable>,
    pub matcher: Matcher,
}

impl AppState {
    pub fn new(table: Arc<CurriculumTable>, matcher: Matcher) -> Self {
        Self { table, matcher }
    }

    /// Run a search against the loaded table
    pub fn search(&self, query: &str, category: SearchCategory) -> SearchResult<Vec<MatchCandidate>> {
        let results = self.matcher.search(query, category, self.table.rows())?;
        log::info!(
            "[Search] q='{}' category={} -> {} results",
            query.trim(),
            category,
            results.len()
        );
        Ok(results)
    }
}
