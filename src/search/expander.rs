//! Query expansion: tokenize, drop stop words, add synonyms

use std::collections::BTreeSet;

use super::synonyms::{normalize_phrase, Thesaurus};
use crate::types::ExpandedQuery;

/// Common words ignored when looking up synonyms
pub const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "the", "in", "on", "at", "to", "for", "of", "with", "by", "about",
];

pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(&token)
}

/// Maps an inflected word to a base form known to the thesaurus
pub trait Lemmatizer: Send + Sync {
    fn base_form(&self, word: &str, thesaurus: &Thesaurus) -> Option<String>;
}

/// Irregular forms that suffix rules cannot reach
const EXCEPTIONS: &[(&str, &str)] = &[
    ("children", "child"),
    ("people", "person"),
    ("men", "man"),
    ("women", "woman"),
    ("mice", "mouse"),
    ("geese", "goose"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("leaves", "leaf"),
    ("wolves", "wolf"),
    ("lives", "life"),
    ("went", "go"),
    ("ran", "run"),
    ("saw", "see"),
    ("wrote", "write"),
    ("written", "write"),
    ("read", "read"),
    ("told", "tell"),
    ("grew", "grow"),
    ("grown", "grow"),
    ("better", "good"),
    ("best", "good"),
];

/// Suffix detachment rules, tried in order
const SUFFIX_RULES: &[(&str, &str)] = &[
    ("ies", "y"),
    ("ses", "s"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("es", "e"),
    ("es", ""),
    ("s", ""),
    ("ing", "e"),
    ("ing", ""),
    ("ed", "e"),
    ("ed", ""),
    ("er", ""),
    ("est", ""),
];

/// Rule-based lemmatizer in the style of WordNet's morphy
///
/// A candidate base form is accepted only if the thesaurus knows it.
#[derive(Debug, Clone, Copy, Default)]
pub struct InflectionLemmatizer;

impl Lemmatizer for InflectionLemmatizer {
    fn base_form(&self, word: &str, thesaurus: &Thesaurus) -> Option<String> {
        if thesaurus.contains(word) {
            return Some(word.to_string());
        }

        if let Some((_, base)) = EXCEPTIONS.iter().find(|(form, _)| *form == word) {
            if thesaurus.contains(base) {
                return Some(base.to_string());
            }
        }

        SUFFIX_RULES
            .iter()
            .filter_map(|(suffix, replacement)| {
                let stem = word.strip_suffix(suffix)?;
                (!stem.is_empty()).then(|| format!("{stem}{replacement}"))
            })
            .find(|candidate| thesaurus.contains(candidate))
    }
}

/// Turns a raw query into the set of terms used for fuzzy matching
pub struct QueryExpander {
    thesaurus: Thesaurus,
    lemmatizer: Option<Box<dyn Lemmatizer>>,
}

impl QueryExpander {
    /// Expander with the default inflection lemmatizer
    pub fn new(thesaurus: Thesaurus) -> Self {
        Self {
            thesaurus,
            lemmatizer: Some(Box::new(InflectionLemmatizer)),
        }
    }

    pub fn with_lemmatizer(thesaurus: Thesaurus, lemmatizer: Box<dyn Lemmatizer>) -> Self {
        Self {
            thesaurus,
            lemmatizer: Some(lemmatizer),
        }
    }

    /// Expander that looks tokens up as typed
    pub fn without_lemmatizer(thesaurus: Thesaurus) -> Self {
        Self {
            thesaurus,
            lemmatizer: None,
        }
    }

    pub fn thesaurus(&self) -> &Thesaurus {
        &self.thesaurus
    }

    /// Expand a query into lowercase search terms
    ///
    /// The non-stop-word tokens are always included. A query made only of
    /// stop words keeps its literal tokens so the result is never empty for
    /// non-empty input.
    pub fn expand(&self, query: &str) -> ExpandedQuery {
        let raw = query.trim().to_string();
        let tokens: Vec<String> = raw.to_lowercase().split_whitespace().map(String::from).collect();

        let content: Vec<&String> = tokens.iter().filter(|t| !is_stop_word(t)).collect();
        let mut terms: BTreeSet<String> = content.iter().map(|t| t.to_string()).collect();

        for token in &content {
            let base = self.base_form(token);
            if let Some(synonyms) = self.thesaurus.synonyms(&base) {
                terms.extend(
                    synonyms
                        .iter()
                        .map(|s| normalize_phrase(s))
                        .filter(|s| !s.is_empty()),
                );
            }
        }

        if terms.is_empty() {
            terms.extend(tokens.iter().cloned());
        }

        ExpandedQuery { raw, tokens, terms }
    }

    fn base_form(&self, token: &str) -> String {
        self.lemmatizer
            .as_ref()
            .and_then(|l| l.base_form(token, &self.thesaurus))
            .unwrap_or_else(|| token.to_string())
    }
}

impl Default for QueryExpander {
    fn default() -> Self {
        Self::new(Thesaurus::builtin())
    }
}
