//! Curriculum row and column types

use serde::{Deserialize, Serialize};

/// One row of the curriculum dataset
///
/// Every field is free text. A missing column or an empty cell is an empty
/// string, never a null marker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurriculumRow {
    #[serde(rename = "LEVEL")]
    pub level: String,
    #[serde(rename = "UNIT")]
    pub unit: String,
    #[serde(rename = "TOPIC AND CONTENT AREA")]
    pub topic: String,
    #[serde(rename = "PART")]
    pub part: String,
    #[serde(rename = "CONTENT VOCABULARY")]
    pub content_vocabulary: String,
    #[serde(rename = "ACADEMIC VOCABULARY")]
    pub academic_vocabulary: String,
    #[serde(rename = "LANGUAGE SKILL")]
    pub language_skill: String,
    #[serde(rename = "THINKING MAP SKILL")]
    pub thinking_map_skill: String,
    #[serde(rename = "READING SKILL")]
    pub reading_skill: String,
    #[serde(rename = "PHONICS SKILL")]
    pub phonics_skill: String,
    #[serde(rename = "GRAMMAR SKILL")]
    pub grammar_skill: String,
    #[serde(rename = "ORAL LANGUAGE PROJECT")]
    pub oral_language_project: String,
    #[serde(rename = "WRITING PROJECT")]
    pub writing_project: String,
    #[serde(rename = "GENRES")]
    pub genres: String,
}

impl CurriculumRow {
    /// Create a row with only the locating fields set
    pub fn new(level: &str, unit: &str, topic: &str, part: &str) -> Self {
        Self {
            level: level.to_string(),
            unit: unit.to_string(),
            topic: topic.to_string(),
            part: part.to_string(),
            ..Self::default()
        }
    }

    /// Builder-style setter for any column
    pub fn with(mut self, column: CurriculumColumn, value: &str) -> Self {
        *self.get_mut(column) = value.to_string();
        self
    }

    /// Cell text for a column
    pub fn get(&self, column: CurriculumColumn) -> &str {
        match column {
            CurriculumColumn::Level => &self.level,
            CurriculumColumn::Unit => &self.unit,
            CurriculumColumn::Topic => &self.topic,
            CurriculumColumn::Part => &self.part,
            CurriculumColumn::ContentVocabulary => &self.content_vocabulary,
            CurriculumColumn::AcademicVocabulary => &self.academic_vocabulary,
            CurriculumColumn::LanguageSkill => &self.language_skill,
            CurriculumColumn::ThinkingMapSkill => &self.thinking_map_skill,
            CurriculumColumn::ReadingSkill => &self.reading_skill,
            CurriculumColumn::PhonicsSkill => &self.phonics_skill,
            CurriculumColumn::GrammarSkill => &self.grammar_skill,
            CurriculumColumn::OralLanguageProject => &self.oral_language_project,
            CurriculumColumn::WritingProject => &self.writing_project,
            CurriculumColumn::Genres => &self.genres,
        }
    }

    fn get_mut(&mut self, column: CurriculumColumn) -> &mut String {
        match column {
            CurriculumColumn::Level => &mut self.level,
            CurriculumColumn::Unit => &mut self.unit,
            CurriculumColumn::Topic => &mut self.topic,
            CurriculumColumn::Part => &mut self.part,
            CurriculumColumn::ContentVocabulary => &mut self.content_vocabulary,
            CurriculumColumn::AcademicVocabulary => &mut self.academic_vocabulary,
            CurriculumColumn::LanguageSkill => &mut self.language_skill,
            CurriculumColumn::ThinkingMapSkill => &mut self.thinking_map_skill,
            CurriculumColumn::ReadingSkill => &mut self.reading_skill,
            CurriculumColumn::PhonicsSkill => &mut self.phonics_skill,
            CurriculumColumn::GrammarSkill => &mut self.grammar_skill,
            CurriculumColumn::OralLanguageProject => &mut self.oral_language_project,
            CurriculumColumn::WritingProject => &mut self.writing_project,
            CurriculumColumn::Genres => &mut self.genres,
        }
    }
}

/// Named column of the curriculum dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurriculumColumn {
    Level,
    Unit,
    Topic,
    Part,
    ContentVocabulary,
    AcademicVocabulary,
    LanguageSkill,
    ThinkingMapSkill,
    ReadingSkill,
    PhonicsSkill,
    GrammarSkill,
    OralLanguageProject,
    WritingProject,
    Genres,
}

impl CurriculumColumn {
    /// Short code columns that locate a row; matched exactly, never fuzzily
    pub const LOCATORS: [CurriculumColumn; 3] = [Self::Level, Self::Unit, Self::Part];

    /// Header text used by the CSV file
    pub fn header(self) -> &'static str {
        match self {
            Self::Level => "LEVEL",
            Self::Unit => "UNIT",
            Self::Topic => "TOPIC AND CONTENT AREA",
            Self::Part => "PART",
            Self::ContentVocabulary => "CONTENT VOCABULARY",
            Self::AcademicVocabulary => "ACADEMIC VOCABULARY",
            Self::LanguageSkill => "LANGUAGE SKILL",
            Self::ThinkingMapSkill => "THINKING MAP SKILL",
            Self::ReadingSkill => "READING SKILL",
            Self::PhonicsSkill => "PHONICS SKILL",
            Self::GrammarSkill => "GRAMMAR SKILL",
            Self::OralLanguageProject => "ORAL LANGUAGE PROJECT",
            Self::WritingProject => "WRITING PROJECT",
            Self::Genres => "GENRES",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_and_accessor() {
        let row = CurriculumRow::new("A", "1", "Plants", "1")
            .with(CurriculumColumn::ContentVocabulary, "seed, root");

        assert_eq!(row.get(CurriculumColumn::Level), "A");
        assert_eq!(row.get(CurriculumColumn::ContentVocabulary), "seed, root");
        assert_eq!(row.get(CurriculumColumn::Genres), "");
    }

    #[test]
    fn test_header_names() {
        assert_eq!(CurriculumColumn::Topic.header(), "TOPIC AND CONTENT AREA");
        assert_eq!(CurriculumColumn::OralLanguageProject.header(), "ORAL LANGUAGE PROJECT");
    }
}
