//! Curriculum table - the loaded, read-only dataset
//!
//! The table is built once from a CSV file at startup and shared behind an
//! `Arc` for the life of the process.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::ops::Deref;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::SearchResult;
use crate::types::{CurriculumColumn, CurriculumRow};

/// Headers the loader maps onto row fields
const KNOWN_HEADERS: &[CurriculumColumn] = &[
    CurriculumColumn::Level,
    CurriculumColumn::Unit,
    CurriculumColumn::Topic,
    CurriculumColumn::Part,
    CurriculumColumn::ContentVocabulary,
    CurriculumColumn::AcademicVocabulary,
    CurriculumColumn::LanguageSkill,
    CurriculumColumn::ThinkingMapSkill,
    CurriculumColumn::ReadingSkill,
    CurriculumColumn::PhonicsSkill,
    CurriculumColumn::GrammarSkill,
    CurriculumColumn::OralLanguageProject,
    CurriculumColumn::WritingProject,
    CurriculumColumn::Genres,
];

/// Immutable in-memory curriculum dataset
#[derive(Debug, Clone)]
pub struct CurriculumTable {
    rows: Vec<CurriculumRow>,
    source: Option<PathBuf>,
    loaded_at: DateTime<Utc>,
}

/// Table statistics
#[derive(Debug, Clone, Serialize)]
pub struct TableStats {
    pub rows: usize,
    pub levels: usize,
    pub units: usize,
    pub topics: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(rename = "loadedAt")]
    pub loaded_at: DateTime<Utc>,
}

impl CurriculumTable {
    /// Create a table from rows already in memory
    pub fn from_rows(rows: Vec<CurriculumRow>) -> Self {
        Self {
            rows,
            source: None,
            loaded_at: Utc::now(),
        }
    }

    /// Parse CSV with a header row
    ///
    /// Every value is read as a string. Missing columns and empty cells
    /// become empty strings; unknown columns are ignored.
    pub fn from_reader<R: Read>(reader: R) -> SearchResult<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        for column in KNOWN_HEADERS {
            if !headers.iter().any(|h| h == column.header()) {
                log::warn!("[Table] Column '{}' missing; treating as empty", column.header());
            }
        }

        let mut rows = Vec::new();
        for record in csv_reader.records() {
            let mut record = record?;
            // Short rows: pad so every header has a (blank) value
            while record.len() < headers.len() {
                record.push_field("");
            }
            rows.push(record.deserialize::<CurriculumRow>(Some(&headers))?);
        }

        Ok(Self::from_rows(rows))
    }

    /// Load the table from a CSV file
    pub fn from_path(path: impl AsRef<Path>) -> SearchResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let mut table = Self::from_reader(file)?;
        table.source = Some(path.to_path_buf());

        log::info!("[Table] Loaded {} rows from {}", table.len(), path.display());
        Ok(table)
    }

    pub fn rows(&self) -> &[CurriculumRow] {
        &self.rows
    }

    pub fn get(&self, index: usize) -> Option<&CurriculumRow> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn stats(&self) -> TableStats {
        let distinct = |column: CurriculumColumn| {
            self.rows
                .iter()
                .map(|r| r.get(column))
                .filter(|v| !v.is_empty())
                .collect::<BTreeSet<_>>()
                .len()
        };

        TableStats {
            rows: self.rows.len(),
            levels: distinct(CurriculumColumn::Level),
            units: distinct(CurriculumColumn::Unit),
            topics: distinct(CurriculumColumn::Topic),
            source: self.source.as_ref().map(|p| p.display().to_string()),
            loaded_at: self.loaded_at,
        }
    }
}

impl Deref for CurriculumTable {
    type Target = [CurriculumRow];

    fn deref(&self) -> &Self::Target {
        &self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
LEVEL,UNIT,TOPIC AND CONTENT AREA,PART,CONTENT VOCABULARY,ACADEMIC VOCABULARY,GENRES
A,1,Plants / Science,1,\"seed, root, stem\",describe,Song
A,1,Plants / Science,2,,compare,
B,2,Communities,1,neighborhood,,\"Realistic Fiction\"
";

    #[test]
    fn test_from_reader_maps_headers() {
        let table = CurriculumTable::from_reader(SAMPLE.as_bytes()).unwrap();

        assert_eq!(table.len(), 3);
        let first = table.get(0).unwrap();
        assert_eq!(first.level, "A");
        assert_eq!(first.topic, "Plants / Science");
        assert_eq!(first.content_vocabulary, "seed, root, stem");
        assert_eq!(first.genres, "Song");
        // Column absent from the file
        assert_eq!(first.reading_skill, "");
    }

    #[test]
    fn test_empty_cells_are_empty_strings() {
        let table = CurriculumTable::from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(table[1].content_vocabulary, "");
        assert_eq!(table[1].genres, "");
        assert_eq!(table[2].academic_vocabulary, "");
    }

    #[test]
    fn test_short_rows_are_tolerated() {
        let csv = "LEVEL,UNIT,GENRES\nA,1\n";
        let table = CurriculumTable::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(table[0].unit, "1");
        assert_eq!(table[0].genres, "");
    }

    #[test]
    fn test_header_only_file_is_empty_table() {
        let table = CurriculumTable::from_reader("LEVEL,UNIT\n".as_bytes()).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_stats() {
        let table = CurriculumTable::from_reader(SAMPLE.as_bytes()).unwrap();
        let stats = table.stats();
        assert_eq!(stats.rows, 3);
        assert_eq!(stats.levels, 2);
        assert_eq!(stats.units, 2);
        assert_eq!(stats.topics, 2);
        assert!(stats.source.is_none());
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = CurriculumTable::from_path("/nonexistent/curriculum.csv").unwrap_err();
        assert!(matches!(err, crate::error::SearchError::Io(_)));
    }
}
