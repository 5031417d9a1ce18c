//! Category listing endpoint

use axum::{response::IntoResponse, Json};
use serde::Serialize;

use super::ApiResponse;
use crate::types::SearchCategory;

#[derive(Debug, Serialize)]
pub struct CategoryInfo {
    pub name: SearchCategory,
    /// CSV headers searched for this category, in scan order
    pub columns: Vec<&'static str>,
}

/// GET /api/categories - Categories and the columns each one searches
pub async fn list_categories() -> impl IntoResponse {
    let categories: Vec<CategoryInfo> = SearchCategory::ALL
        .iter()
        .map(|&name| CategoryInfo {
            name,
            columns: name.columns().iter().map(|c| c.header()).collect(),
        })
        .collect();

    Json(ApiResponse::new(categories))
}
