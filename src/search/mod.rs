//! Curriculum search with synonym expansion and fuzzy ranking
//!
//! This module provides the search pipeline:
//! - Synonym dictionary and query expansion with stop-word filtering
//! - Substring-tolerant fuzzy similarity
//! - Row/column matcher that ranks exact matches above fuzzy ones
//! - Highlighting of the matched term for display

mod expander;
mod fuzzy;
mod highlight;
mod matcher;
mod synonyms;

pub use expander::{is_stop_word, InflectionLemmatizer, Lemmatizer, QueryExpander, STOP_WORDS};
pub use fuzzy::{partial_ratio, ratio};
pub use highlight::{escape_html, Highlight};
pub use matcher::{rank, Matcher, DEFAULT_FUZZY_THRESHOLD};
pub use synonyms::{normalize_phrase, Thesaurus, SYNONYM_GROUPS};
