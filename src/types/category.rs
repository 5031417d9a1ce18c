//! Search categories and the columns each one scans

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::CurriculumColumn;
use super::CurriculumColumn::*;
use crate::error::SearchError;

// Level, unit and part are short locator codes. They are reported with every
// match and only checked for exact matches (see `CurriculumColumn::LOCATORS`).
const VOCABULARY_COLUMNS: &[CurriculumColumn] = &[Topic, ContentVocabulary, AcademicVocabulary];

const SKILL_COLUMNS: &[CurriculumColumn] = &[
    Topic,
    LanguageSkill,
    ThinkingMapSkill,
    ReadingSkill,
    PhonicsSkill,
    GrammarSkill,
    OralLanguageProject,
    WritingProject,
];

const GENRE_COLUMNS: &[CurriculumColumn] = &[Topic, Genres];

/// What the user is looking for; decides which columns are searched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SearchCategory {
    #[default]
    Vocabulary,
    Skill,
    Genre,
}

impl SearchCategory {
    pub const ALL: [SearchCategory; 3] = [Self::Vocabulary, Self::Skill, Self::Genre];

    /// Columns scanned for this category, in scan order
    pub fn columns(self) -> &'static [CurriculumColumn] {
        match self {
            Self::Vocabulary => VOCABULARY_COLUMNS,
            Self::Skill => SKILL_COLUMNS,
            Self::Genre => GENRE_COLUMNS,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Vocabulary => "Vocabulary",
            Self::Skill => "Skill",
            Self::Genre => "Genre",
        }
    }
}

impl fmt::Display for SearchCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchCategory {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "vocabulary" => Ok(Self::Vocabulary),
            "skill" => Ok(Self::Skill),
            "genre" => Ok(Self::Genre),
            _ => Err(SearchError::InvalidCategory(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("Vocabulary".parse::<SearchCategory>().unwrap(), SearchCategory::Vocabulary);
        assert_eq!(" skill ".parse::<SearchCategory>().unwrap(), SearchCategory::Skill);
        assert_eq!("GENRE".parse::<SearchCategory>().unwrap(), SearchCategory::Genre);
    }

    #[test]
    fn test_parse_unknown_is_invalid_argument() {
        let err = "grammar".parse::<SearchCategory>().unwrap_err();
        assert!(matches!(err, SearchError::InvalidCategory(ref c) if c == "grammar"));
    }

    #[test]
    fn test_columns_start_with_topic() {
        for category in SearchCategory::ALL {
            assert_eq!(category.columns()[0], Topic);
            assert!(!category.columns().contains(&Level));
        }
        assert_eq!(SearchCategory::Genre.columns(), &[Topic, Genres]);
        assert_eq!(SearchCategory::Skill.columns().len(), 8);
    }
}
