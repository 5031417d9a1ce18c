//! Synonym dictionary for query expansion
//!
//! A compiled-in set of curriculum synonym groups, optionally extended by a
//! JSON file. Words in the same group are treated as lexical synonyms.

use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::SearchResult;

/// Synonym groups - words in same group are considered semantically similar
pub const SYNONYM_GROUPS: &[&[&str]] = &[
    // Science & nature
    &["environment", "surroundings", "habitat", "ecosystem", "milieu"],
    &["forest", "woods", "woodland", "timberland"],
    &["plant", "flora", "vegetation"],
    &["animal", "creature", "beast", "fauna"],
    &["weather", "climate", "conditions"],
    &["water", "h2o", "liquid"],
    &["earth", "ground", "soil", "land", "dirt"],
    &["ocean", "sea", "marine"],
    &["sun", "sunlight", "sunshine"],
    &["change", "alteration", "modification", "transformation"],
    &["energy", "power", "force", "vigor"],
    &["rock", "stone", "boulder"],
    &["season", "time of year"],
    &["life cycle", "life history", "lifecycle"],
    &["survive", "endure", "last", "live on"],
    // Social studies
    &["community", "neighborhood", "town", "society"],
    &["family", "household", "relatives", "kin"],
    &["government", "authorities", "administration", "regime"],
    &["history", "past", "chronicle"],
    &["culture", "civilization", "tradition", "heritage"],
    &["map", "chart", "atlas"],
    &["money", "currency", "cash", "funds"],
    &["job", "occupation", "career", "work", "profession"],
    &["rule", "law", "regulation", "principle"],
    // Feelings & people
    &["happy", "glad", "joyful", "cheerful", "felicitous"],
    &["sad", "unhappy", "sorrowful", "gloomy"],
    &["friend", "companion", "pal", "buddy"],
    &["help", "assist", "aid", "support"],
    &["brave", "courageous", "fearless", "bold"],
    // Language skills
    &["compare", "contrast", "comparison", "equate"],
    &["describe", "depict", "characterize", "portray"],
    &["explain", "explicate", "clarify", "interpret"],
    &["predict", "forecast", "anticipate", "foretell"],
    &["summarize", "summarise", "sum up", "recap", "summary"],
    &["sequence", "order", "succession", "chronological order"],
    &["cause", "reason", "origin", "grounds"],
    &["effect", "result", "consequence", "outcome"],
    &["main idea", "central idea", "gist"],
    &["detail", "particular", "specific", "item"],
    &["question", "inquiry", "query", "ask"],
    &["opinion", "view", "belief", "persuasion"],
    &["fact", "truth", "reality"],
    &["vocabulary", "lexicon", "word", "terminology"],
    &["pronoun", "pronominal"],
    &["verb", "action word"],
    &["noun", "naming word"],
    &["adjective", "describing word", "modifier"],
    &["plural", "plural form"],
    &["sentence", "clause", "statement"],
    &["phonics", "letter sounds", "sound spelling"],
    &["vowel", "vowel sound"],
    &["rhyme", "rime", "rhyming"],
    &["writing", "composition", "authorship"],
    &["speaking", "oral", "spoken", "talking"],
    &["read", "interpret", "scan", "peruse"],
    // Genres
    &["story", "narrative", "tale", "fiction"],
    &["poem", "verse", "poetry", "rhyme"],
    &["song", "vocal", "ballad", "tune"],
    &["fable", "parable", "allegory", "apologue"],
    &["folk tale", "folktale", "folk story", "legend", "myth"],
    &["biography", "life story", "life history"],
    &["autobiography", "memoir"],
    &["article", "report", "news story"],
    &["play", "drama", "skit", "theater"],
    &["letter", "missive", "correspondence"],
    &["informational text", "nonfiction", "expository text"],
    &["science fiction", "sci-fi"],
    &["realistic fiction", "contemporary fiction"],
];

/// Normalize a synonym phrase: lowercase, `_`/whitespace runs to single spaces
pub fn normalize_phrase(phrase: &str) -> String {
    phrase
        .to_lowercase()
        .split(|c: char| c == '_' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// On-disk synonym formats
///
/// Either a list of groups (`[["a", "b"], ...]`) or a map from headword
/// to its synonyms (`{"a": ["b", "c"]}`).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SynonymFile {
    Groups(Vec<Vec<String>>),
    Map(HashMap<String, Vec<String>>),
}

/// Lookup table from a headword to its synonym phrases
#[derive(Debug, Clone, Default)]
pub struct Thesaurus {
    entries: HashMap<String, BTreeSet<String>>,
}

impl Thesaurus {
    /// Thesaurus with no entries; expansion yields literal tokens only
    pub fn empty() -> Self {
        Self::default()
    }

    /// Thesaurus built from the compiled-in groups
    pub fn builtin() -> Self {
        let mut thesaurus = Self::empty();
        for group in SYNONYM_GROUPS {
            thesaurus.add_group(group.iter().copied());
        }
        thesaurus
    }

    /// Parse a JSON synonym file
    pub fn from_json(json: &str) -> SearchResult<Self> {
        let mut thesaurus = Self::empty();
        match serde_json::from_str::<SynonymFile>(json)? {
            SynonymFile::Groups(groups) => {
                for group in &groups {
                    thesaurus.add_group(group.iter().map(String::as_str));
                }
            }
            SynonymFile::Map(map) => {
                for (word, synonyms) in &map {
                    thesaurus.add_entry(word, synonyms.iter().map(String::as_str));
                }
            }
        }
        Ok(thesaurus)
    }

    /// Load a JSON synonym file from disk
    pub fn from_path(path: impl AsRef<Path>) -> SearchResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Built-in groups extended with an optional file
    ///
    /// A file that cannot be read or parsed is logged and skipped.
    pub fn load(path: Option<&Path>) -> Self {
        let mut thesaurus = Self::builtin();
        if let Some(path) = path {
            match Self::from_path(path) {
                Ok(extra) => {
                    log::info!(
                        "[Synonyms] Loaded {} headwords from {}",
                        extra.len(),
                        path.display()
                    );
                    thesaurus.merge(extra);
                }
                Err(e) => {
                    log::warn!(
                        "[Synonyms] Could not load {}: {}; using built-in groups only",
                        path.display(),
                        e
                    );
                }
            }
        }
        thesaurus
    }

    /// Every member of the group becomes a synonym of every other member
    pub fn add_group<'a>(&mut self, group: impl IntoIterator<Item = &'a str>) {
        let members: BTreeSet<String> = group
            .into_iter()
            .map(normalize_phrase)
            .filter(|w| !w.is_empty())
            .collect();

        for member in &members {
            self.entries
                .entry(member.clone())
                .or_default()
                .extend(members.iter().cloned());
        }
    }

    /// One-directional entry: `word` expands to `synonyms`
    pub fn add_entry<'a>(&mut self, word: &str, synonyms: impl IntoIterator<Item = &'a str>) {
        let word = normalize_phrase(word);
        if word.is_empty() {
            return;
        }
        let entry = self.entries.entry(word.clone()).or_default();
        entry.insert(word);
        entry.extend(
            synonyms
                .into_iter()
                .map(normalize_phrase)
                .filter(|s| !s.is_empty()),
        );
    }

    pub fn merge(&mut self, other: Thesaurus) {
        for (word, synonyms) in other.entries {
            self.entries.entry(word).or_default().extend(synonyms);
        }
    }

    /// Synonym phrases for a headword, the headword included
    pub fn synonyms(&self, word: &str) -> Option<&BTreeSet<String>> {
        self.entries.get(word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Number of headwords
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
