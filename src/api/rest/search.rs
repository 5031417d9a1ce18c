//! Search endpoint

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use super::{error_response, ApiError, ApiResponse};
use crate::api::state::AppState;
use crate::search::Highlight;
use crate::types::{CurriculumRow, MatchCandidate, MatchKind, SearchCategory};

/// Hard cap on returned matches
const MAX_LIMIT: usize = 1000;

/// Query parameters for search
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Search query string
    pub q: Option<String>,
    /// Vocabulary, Skill or Genre (default: Vocabulary)
    pub category: Option<String>,
    /// Maximum number of results
    pub limit: Option<usize>,
}

/// One ranked match with its row's locating fields
#[derive(Debug, Serialize)]
pub struct SearchHit {
    pub score: u8,
    pub kind: MatchKind,
    pub level: String,
    pub unit: String,
    pub topic: String,
    pub part: String,
    /// CSV header of the matched column
    pub column: &'static str,
    pub text: String,
    #[serde(rename = "matchedTerm")]
    pub matched_term: String,
    /// Cell text as HTML with the matched term in `<mark>`
    pub highlighted: String,
}

impl SearchHit {
    pub fn new(candidate: &MatchCandidate, row: &CurriculumRow) -> Self {
        Self {
            score: candidate.score,
            kind: candidate.kind,
            level: row.level.clone(),
            unit: row.unit.clone(),
            topic: row.topic.clone(),
            part: row.part.clone(),
            column: candidate.column.header(),
            text: candidate.text.clone(),
            matched_term: candidate.matched_term.clone(),
            highlighted: Highlight::of(candidate).to_html(),
        }
    }
}

/// GET /api/search - Ranked matches for a query within a category
pub async fn search_rows(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    let query = match params.q.as_deref() {
        Some(q) if !q.trim().is_empty() => q,
        _ => {
            let error = ApiError::bad_request("Query parameter 'q' is required");
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    let category = match params.category.as_deref() {
        Some(raw) => match raw.parse::<SearchCategory>() {
            Ok(category) => category,
            Err(e) => return error_response(&e),
        },
        None => SearchCategory::default(),
    };

    match state.search(query, category) {
        Ok(candidates) => {
            let total = candidates.len();
            let limit = params.limit.unwrap_or(MAX_LIMIT).min(MAX_LIMIT);

            let hits: Vec<SearchHit> = candidates
                .iter()
                .take(limit)
                .filter_map(|c| state.table.get(c.row_index).map(|row| SearchHit::new(c, row)))
                .collect();

            (StatusCode::OK, Json(ApiResponse::with_total(hits, total))).into_response()
        }
        Err(e) => error_response(&e),
    }
}
