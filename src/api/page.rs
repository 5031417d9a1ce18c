//! Server-rendered search page
//!
//! A single form (query text + category radio) submitted with GET to `/`,
//! followed by the ranked results with the matched term highlighted.

use std::fmt::Write;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
};
use serde::Deserialize;

use super::state::AppState;
use crate::curriculum::CurriculumTable;
use crate::error::SearchError;
use crate::search::{escape_html, Highlight};
use crate::types::{MatchCandidate, SearchCategory};

pub const PAGE_TITLE: &str = "Reach Higher Curriculum Search";
pub const NO_RESULTS_MESSAGE: &str =
    "No exact matches found. Try simplifying your search or using different keywords.";

const STYLE: &str = "\
body{font-family:sans-serif;margin:2rem auto;max-width:60rem;padding:0 1rem}\
table{border-collapse:collapse;width:100%}\
th,td{border:1px solid #ccc;padding:.4rem;text-align:left;vertical-align:top}\
mark{background-color:yellow}\
.warning{background:#fff4e5;border:1px solid #f0a000;padding:.6rem}\
.error{background:#fde8e8;border:1px solid #d00;padding:.6rem}";

#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub q: Option<String>,
    pub category: Option<String>,
}

/// GET / - Search form and results
pub async fn search_page(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
) -> impl IntoResponse {
    let query = params.q.as_deref().unwrap_or("").trim();

    let category = match params.category.as_deref() {
        Some(raw) => match raw.parse::<SearchCategory>() {
            Ok(category) => category,
            Err(e) => {
                let body = render_page(query, SearchCategory::default(), Outcome::Failed(&e), &state.table);
                return (StatusCode::BAD_REQUEST, Html(body));
            }
        },
        None => SearchCategory::default(),
    };

    if query.is_empty() {
        return (StatusCode::OK, Html(render_page(query, category, Outcome::Idle, &state.table)));
    }

    match state.search(query, category) {
        Ok(results) => {
            let body = render_page(query, category, Outcome::Results(&results), &state.table);
            (StatusCode::OK, Html(body))
        }
        Err(e) => {
            let status = if e.is_client_error() {
                StatusCode::BAD_REQUEST
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            (status, Html(render_page(query, category, Outcome::Failed(&e), &state.table)))
        }
    }
}

/// What the results area shows
pub enum Outcome<'a> {
    Idle,
    Results(&'a [MatchCandidate]),
    Failed(&'a SearchError),
}

/// Render the whole page
pub fn render_page(
    query: &str,
    category: SearchCategory,
    outcome: Outcome<'_>,
    table: &CurriculumTable,
) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>{PAGE_TITLE}</title>\
         <style>{STYLE}</style></head><body><h1>{PAGE_TITLE}</h1>"
    );

    render_form(&mut html, query, category);

    match outcome {
        Outcome::Idle => {}
        Outcome::Results([]) => {
            let _ = write!(html, "<p class=\"warning\">{NO_RESULTS_MESSAGE}</p>");
        }
        Outcome::Results(results) => render_results(&mut html, results, table),
        Outcome::Failed(e) => {
            let _ = write!(html, "<p class=\"error\">{}</p>", escape_html(&e.to_string()));
        }
    }

    html.push_str("</body></html>");
    html
}

fn render_form(html: &mut String, query: &str, category: SearchCategory) {
    let _ = write!(
        html,
        "<form method=\"get\" action=\"/\">\
         <label>Enter a topic or concept: \
         <input type=\"text\" name=\"q\" value=\"{}\" autofocus></label>\
         <fieldset><legend>Search for:</legend>",
        escape_html(query)
    );

    for option in SearchCategory::ALL {
        let checked = if option == category { " checked" } else { "" };
        let _ = write!(
            html,
            "<label><input type=\"radio\" name=\"category\" value=\"{option}\"{checked}> {option}</label> "
        );
    }

    html.push_str("</fieldset><button type=\"submit\">Search</button></form>");
}

fn render_results(html: &mut String, results: &[MatchCandidate], table: &CurriculumTable) {
    html.push_str(
        "<h3>Search Results:</h3><table><thead><tr>\
         <th>Level</th><th>Unit</th><th>Topic</th><th>Part</th><th>Matched Content</th>\
         </tr></thead><tbody>",
    );

    for candidate in results {
        let Some(row) = table.get(candidate.row_index) else {
            continue;
        };
        let _ = write!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(&row.level),
            escape_html(&row.unit),
            escape_html(&row.topic),
            escape_html(&row.part),
            Highlight::of(candidate).to_html()
        );
    }

    html.push_str("</tbody></table>");
}
