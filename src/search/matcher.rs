//! Row matcher and ranker
//!
//! Scans the searched columns of every row, classifies each non-empty cell
//! as an exact (whole-word) or fuzzy match, and orders the results with
//! exact matches first.

use std::sync::Arc;

use rayon::prelude::*;
use regex::Regex;

use super::expander::QueryExpander;
use super::fuzzy::partial_ratio;
use super::highlight::whole_word_pattern;
use crate::error::{SearchError, SearchResult};
use crate::types::{
    CurriculumColumn, CurriculumRow, ExpandedQuery, MatchCandidate, MatchKind, SearchCategory,
};

/// Fuzzy scores must exceed this to count as a match; also the lowest
/// threshold a matcher accepts
pub const DEFAULT_FUZZY_THRESHOLD: u8 = 60;

/// Threshold for using parallel scan (row count)
const PARALLEL_SEARCH_THRESHOLD: usize = 1000;

/// Searches a curriculum table for a query within one category
#[derive(Clone)]
pub struct Matcher {
    expander: Arc<QueryExpander>,
    threshold: u8,
}

impl Matcher {
    pub fn new(expander: Arc<QueryExpander>) -> Self {
        Self {
            expander,
            threshold: DEFAULT_FUZZY_THRESHOLD,
        }
    }

    /// Raise the fuzzy threshold; values below the default are ignored
    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold.max(DEFAULT_FUZZY_THRESHOLD);
        self
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    pub fn expander(&self) -> &QueryExpander {
        &self.expander
    }

    /// Ranked matches of `query` in the rows of `table`
    ///
    /// Each row/column pair yields at most one candidate. Locator columns
    /// (level, unit, part) are checked for exact matches only. Exact matches
    /// (score 100) come first, then fuzzy matches, each group ordered by
    /// descending score with scan order kept on ties.
    pub fn search(
        &self,
        query: &str,
        category: SearchCategory,
        table: &[CurriculumRow],
    ) -> SearchResult<Vec<MatchCandidate>> {
        if query.trim().is_empty() {
            return Err(SearchError::EmptyQuery);
        }

        let expanded = self.expander.expand(query);
        let exact = whole_word_pattern(&expanded.raw)?;
        let columns = category.columns();

        let scan = |(index, row): (usize, &CurriculumRow)| {
            self.scan_row(index, row, columns, &exact, &expanded)
        };

        // Per-row vectors keep scan order identical in both branches
        let per_row: Vec<Vec<MatchCandidate>> = if table.len() > PARALLEL_SEARCH_THRESHOLD {
            table.par_iter().enumerate().map(scan).collect()
        } else {
            table.iter().enumerate().map(scan).collect()
        };

        let candidates = rank(per_row.into_iter().flatten().collect());

        log::debug!(
            "[Search] '{}' in {}: {} terms, {} matches",
            expanded.raw,
            category,
            expanded.len(),
            candidates.len()
        );

        Ok(candidates)
    }

    fn scan_row(
        &self,
        index: usize,
        row: &CurriculumRow,
        columns: &[CurriculumColumn],
        exact: &Regex,
        expanded: &ExpandedQuery,
    ) -> Vec<MatchCandidate> {
        let scored = columns.iter().filter_map(|&column| {
            let text = row.get(column);
            if text.trim().is_empty() {
                return None;
            }

            if exact.is_match(text) {
                return Some(MatchCandidate::exact(index, column, text, &expanded.raw));
            }

            let (term, score) = best_term(text, expanded)?;
            (score > self.threshold)
                .then(|| MatchCandidate::fuzzy(index, column, text, term, score))
        });

        // One-character codes would fuzzy-match almost any term
        let locators = CurriculumColumn::LOCATORS.into_iter().filter_map(|column| {
            let text = row.get(column);
            (!text.trim().is_empty() && exact.is_match(text))
                .then(|| MatchCandidate::exact(index, column, text, &expanded.raw))
        });

        scored.chain(locators).collect()
    }
}

/// Highest-scoring expanded term for a cell; the first term wins ties
fn best_term<'q>(text: &str, expanded: &'q ExpandedQuery) -> Option<(&'q str, u8)> {
    let mut best: Option<(&str, u8)> = None;
    for term in expanded.iter() {
        let score = partial_ratio(term, text);
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((term, score)),
        }
        if score == 100 {
            break;
        }
    }
    best
}

/// Exact group then fuzzy group, each stably sorted by descending score
pub fn rank(candidates: Vec<MatchCandidate>) -> Vec<MatchCandidate> {
    let (mut exact, mut fuzzy): (Vec<_>, Vec<_>) = candidates
        .into_iter()
        .partition(|c| c.kind == MatchKind::Exact);

    exact.sort_by(|a, b| b.score.cmp(&a.score));
    fuzzy.sort_by(|a, b| b.score.cmp(&a.score));

    exact.extend(fuzzy);
    exact
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::synonyms::Thesaurus;
    use crate::types::{EXACT_SCORE, MAX_FUZZY_SCORE};

    fn matcher() -> Matcher {
        Matcher::new(Arc::new(QueryExpander::default()))
    }

    fn vocab_row(level: &str, content: &str) -> CurriculumRow {
        CurriculumRow::new(level, "1", "Science", "1")
            .with(CurriculumColumn::ContentVocabulary, content)
    }

    #[test]
    fn test_exact_match_scores_100() {
        let table = vec![vocab_row("A", "environment and ecosystem")];
        let results = matcher()
            .search("environment", SearchCategory::Vocabulary, &table)
            .unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].score, EXACT_SCORE);
        assert_eq!(results[0].kind, MatchKind::Exact);
        assert_eq!(results[0].matched_term, "environment");
        assert_eq!(results[0].column, CurriculumColumn::ContentVocabulary);
    }

    #[test]
    fn test_no_match_is_empty() {
        let table = vec![vocab_row("A", "photosynthesis"), vocab_row("B", "volcano, lava")];
        let results = matcher()
            .search("happy", SearchCategory::Vocabulary, &table)
            .unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_whole_word_only_for_exact() {
        let table = vec![vocab_row("A", "forests")];
        let results = matcher()
            .search("forest", SearchCategory::Vocabulary, &table)
            .unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].kind, MatchKind::Fuzzy);
        assert_eq!(results[0].score, MAX_FUZZY_SCORE);
    }

    #[test]
    fn test_exact_is_case_insensitive() {
        let table = vec![vocab_row("A", "The ENVIRONMENT")];
        let results = matcher()
            .search("Environment", SearchCategory::Vocabulary, &table)
            .unwrap();
        assert_eq!(results[0].kind, MatchKind::Exact);
        assert_eq!(results[0].matched_term, "Environment");
    }

    #[test]
    fn test_fuzzy_via_synonym() {
        let table = vec![vocab_row("A", "woodland animals")];
        let results = matcher()
            .search("forest", SearchCategory::Vocabulary, &table)
            .unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].kind, MatchKind::Fuzzy);
        assert_eq!(results[0].matched_term, "woodland");
    }

    #[test]
    fn test_exact_phrase_keeps_stop_words() {
        let table = vec![
            CurriculumRow::new("A", "2", "Nature", "1")
                .with(CurriculumColumn::WritingProject, "Describe a forest"),
            CurriculumRow::new("A", "2", "Nature", "2")
                .with(CurriculumColumn::WritingProject, "forest of the north"),
        ];
        let results = matcher()
            .search("a forest", SearchCategory::Skill, &table)
            .unwrap();

        assert_eq!(results[0].row_index, 0);
        assert_eq!(results[0].kind, MatchKind::Exact);
        assert_eq!(results[0].matched_term, "a forest");
        assert_eq!(results[1].row_index, 1);
        assert_eq!(results[1].kind, MatchKind::Fuzzy);
    }

    #[test]
    fn test_category_limits_columns() {
        let table = vec![CurriculumRow::new("A", "1", "Plants", "1")
            .with(CurriculumColumn::Genres, "fable")];

        let vocab = matcher()
            .search("fable", SearchCategory::Vocabulary, &table)
            .unwrap();
        assert!(vocab.is_empty());

        let genre = matcher()
            .search("fable", SearchCategory::Genre, &table)
            .unwrap();
        assert_eq!(genre.len(), 1);
        assert_eq!(genre[0].column, CurriculumColumn::Genres);
    }

    #[test]
    fn test_one_candidate_per_cell_and_topic_searched() {
        let table = vec![CurriculumRow::new("A", "1", "Habitats", "1")
            .with(CurriculumColumn::ContentVocabulary, "habitats, shelter")];
        let results = matcher()
            .search("habitats", SearchCategory::Vocabulary, &table)
            .unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].column, CurriculumColumn::Topic);
        assert_eq!(results[1].column, CurriculumColumn::ContentVocabulary);
    }

    #[test]
    fn test_ordering_exact_before_fuzzy_and_descending() {
        let table = vec![
            vocab_row("A", "enviroment"),
            vocab_row("B", "environment"),
            vocab_row("C", "environmental studies"),
            vocab_row("D", "The environment"),
        ];
        let results = matcher()
            .search("environment", SearchCategory::Vocabulary, &table)
            .unwrap();

        let first_fuzzy = results
            .iter()
            .position(|c| c.kind == MatchKind::Fuzzy)
            .unwrap_or(results.len());
        assert!(results[..first_fuzzy].iter().all(|c| c.score == EXACT_SCORE));
        assert!(results[first_fuzzy..].iter().all(|c| c.score < EXACT_SCORE));
        assert!(results[first_fuzzy..].windows(2).all(|w| w[0].score >= w[1].score));
        assert!(results.iter().all(|c| c.is_exact() || c.score > DEFAULT_FUZZY_THRESHOLD));

        let exact_rows: Vec<usize> = results[..first_fuzzy].iter().map(|c| c.row_index).collect();
        assert_eq!(exact_rows, vec![1, 3]);
    }

    #[test]
    fn test_stable_on_ties() {
        let table = vec![
            vocab_row("A", "seed"),
            vocab_row("B", "seed"),
            vocab_row("C", "seed"),
        ];
        let results = matcher()
            .search("seed", SearchCategory::Vocabulary, &table)
            .unwrap();
        let rows: Vec<usize> = results.iter().map(|c| c.row_index).collect();
        assert_eq!(rows, vec![0, 1, 2]);
    }

    #[test]
    fn test_empty_table_and_empty_query() {
        let m = matcher();
        assert!(m.search("forest", SearchCategory::Genre, &[]).unwrap().is_empty());
        assert!(matches!(
            m.search("   ", SearchCategory::Genre, &[]),
            Err(SearchError::EmptyQuery)
        ));
    }

    #[test]
    fn test_threshold_cannot_drop_below_default() {
        let m = matcher().with_threshold(10);
        assert_eq!(m.threshold(), DEFAULT_FUZZY_THRESHOLD);

        let table = vec![vocab_row("A", "photosynthesis")];
        let results = m.search("happy", SearchCategory::Vocabulary, &table).unwrap();
        assert!(results.iter().all(|c| c.is_exact() || c.score > DEFAULT_FUZZY_THRESHOLD));
        assert!(results.is_empty());
    }

    #[test]
    fn test_locator_columns_match_exactly_only() {
        let table = vec![
            CurriculumRow::new("A", "2", "Plants", "1")
                .with(CurriculumColumn::ContentVocabulary, "seed, root"),
            CurriculumRow::new("A", "12", "Animals", "2")
                .with(CurriculumColumn::ContentVocabulary, "fur, claws"),
        ];

        let results = matcher().search("2", SearchCategory::Vocabulary, &table).unwrap();
        let hits: Vec<(usize, CurriculumColumn)> =
            results.iter().map(|c| (c.row_index, c.column)).collect();
        assert_eq!(
            hits,
            vec![(0, CurriculumColumn::Unit), (1, CurriculumColumn::Part)]
        );
        assert!(results.iter().all(|c| c.is_exact()));

        // Locators never produce fuzzy candidates
        let results = matcher().search("seeds", SearchCategory::Vocabulary, &table).unwrap();
        assert!(results
            .iter()
            .all(|c| !CurriculumColumn::LOCATORS.contains(&c.column)));
    }

    #[test]
    fn test_threshold_is_strict() {
        let m = Matcher::new(Arc::new(QueryExpander::new(Thesaurus::empty()))).with_threshold(100);
        let table = vec![vocab_row("A", "forests")];
        assert!(m.search("forest", SearchCategory::Vocabulary, &table).unwrap().is_empty());
    }

    #[test]
    fn test_parallel_scan_matches_sequential_order() {
        let table: Vec<CurriculumRow> = (0..PARALLEL_SEARCH_THRESHOLD + 50)
            .map(|i| vocab_row(&i.to_string(), if i % 7 == 0 { "river delta" } else { "rivers" }))
            .collect();
        let m = matcher();
        let first = m.search("river", SearchCategory::Vocabulary, &table).unwrap();
        let second = m.search("river", SearchCategory::Vocabulary, &table).unwrap();

        assert_eq!(first, second);
        let exact: Vec<usize> = first.iter().filter(|c| c.is_exact()).map(|c| c.row_index).collect();
        assert!(exact.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(exact.len(), (0..PARALLEL_SEARCH_THRESHOLD + 50).filter(|i| i % 7 == 0).count());
    }

    #[test]
    fn test_rank_partitions_by_kind() {
        use CurriculumColumn::Genres;
        let ranked = rank(vec![
            MatchCandidate::fuzzy(0, Genres, "x", "x", 70),
            MatchCandidate::exact(1, Genres, "y", "y"),
            MatchCandidate::fuzzy(2, Genres, "z", "z", 90),
            MatchCandidate::fuzzy(3, Genres, "w", "w", 70),
        ]);
        let order: Vec<usize> = ranked.iter().map(|c| c.row_index).collect();
        assert_eq!(order, vec![1, 2, 0, 3]);
    }
}
