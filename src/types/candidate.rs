//! Match candidates produced by a table scan

use serde::{Deserialize, Serialize};

use super::CurriculumColumn;

/// Score reserved for whole-word matches of the raw query
pub const EXACT_SCORE: u8 = 100;

/// Highest score a fuzzy match may carry
pub const MAX_FUZZY_SCORE: u8 = EXACT_SCORE - 1;

/// How a cell matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Exact,
    Fuzzy,
}

/// One matching cell, ranked by score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchCandidate {
    pub score: u8,
    pub kind: MatchKind,
    /// Position of the row in the loaded table
    #[serde(rename = "rowIndex")]
    pub row_index: usize,
    pub column: CurriculumColumn,
    /// Full text of the matched cell
    pub text: String,
    /// Raw query for exact matches, winning expanded term for fuzzy ones
    #[serde(rename = "matchedTerm")]
    pub matched_term: String,
}

impl MatchCandidate {
    pub fn exact(row_index: usize, column: CurriculumColumn, text: &str, query: &str) -> Self {
        Self {
            score: EXACT_SCORE,
            kind: MatchKind::Exact,
            row_index,
            column,
            text: text.to_string(),
            matched_term: query.to_string(),
        }
    }

    pub fn fuzzy(
        row_index: usize,
        column: CurriculumColumn,
        text: &str,
        term: &str,
        score: u8,
    ) -> Self {
        Self {
            score: score.min(MAX_FUZZY_SCORE),
            kind: MatchKind::Fuzzy,
            row_index,
            column,
            text: text.to_string(),
            matched_term: term.to_string(),
        }
    }

    pub fn is_exact(&self) -> bool {
        self.kind == MatchKind::Exact
    }
}
