//! Expanded query type

use std::collections::BTreeSet;

/// A user query after tokenizing and synonym expansion
///
/// `terms` is ordered so that scans over it are deterministic; membership
/// is all that matters to callers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedQuery {
    /// Query as typed, outer whitespace trimmed
    pub raw: String,
    /// Lowercase whitespace tokens of the raw query, stop words included
    pub tokens: Vec<String>,
    /// Original tokens plus synonym expansions, all lowercase
    pub terms: BTreeSet<String>,
}

impl ExpandedQuery {
    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }
}
