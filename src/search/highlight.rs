//! Highlighting of the matched term inside a cell

use regex::{Regex, RegexBuilder};

use crate::types::{MatchCandidate, MatchKind};

/// Cell text split around the first occurrence of a term
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight<'a> {
    pub before: &'a str,
    pub matched: &'a str,
    pub after: &'a str,
}

impl<'a> Highlight<'a> {
    /// Highlight a candidate the way it was matched
    ///
    /// Exact candidates mark the first whole-word occurrence, the same span
    /// the matcher accepted. Fuzzy candidates mark any occurrence.
    pub fn of(candidate: &'a MatchCandidate) -> Self {
        match candidate.kind {
            MatchKind::Exact => Self::find_word(&candidate.text, &candidate.matched_term),
            MatchKind::Fuzzy => Self::find(&candidate.text, &candidate.matched_term),
        }
    }

    /// Locate the first case-insensitive occurrence of `term` in `text`
    ///
    /// When the term does not occur literally the whole text lands in
    /// `before` and `matched` is empty.
    pub fn find(text: &'a str, term: &str) -> Self {
        let term = term.trim();
        if term.is_empty() {
            return Self::unmarked(text);
        }
        let pattern = RegexBuilder::new(&regex::escape(term))
            .case_insensitive(true)
            .build();
        Self::split(text, pattern.ok())
    }

    /// Like [`Highlight::find`], but only whole-word occurrences count
    pub fn find_word(text: &'a str, term: &str) -> Self {
        let term = term.trim();
        if term.is_empty() {
            return Self::unmarked(text);
        }
        Self::split(text, whole_word_pattern(term).ok())
    }

    fn unmarked(text: &'a str) -> Self {
        Self {
            before: text,
            matched: "",
            after: "",
        }
    }

    fn split(text: &'a str, pattern: Option<Regex>) -> Self {
        let Some(pattern) = pattern else {
            return Self::unmarked(text);
        };

        match pattern.find(text) {
            Some(m) => Self {
                before: &text[..m.start()],
                matched: m.as_str(),
                after: &text[m.end()..],
            },
            None => Self::unmarked(text),
        }
    }

    pub fn has_match(&self) -> bool {
        !self.matched.is_empty()
    }

    /// HTML with the match wrapped in `<mark>`; all text is escaped
    pub fn to_html(&self) -> String {
        if !self.has_match() {
            return escape_html(self.before);
        }
        format!(
            "{}<mark>{}</mark>{}",
            escape_html(self.before),
            escape_html(self.matched),
            escape_html(self.after)
        )
    }

    /// Plain text with the match wrapped in `**`
    pub fn to_plain(&self) -> String {
        if !self.has_match() {
            return self.before.to_string();
        }
        format!("{}**{}**{}", self.before, self.matched, self.after)
    }
}

/// Case-insensitive whole-word pattern for a literal term
pub(crate) fn whole_word_pattern(term: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(&format!(r"\b{}\b", regex::escape(term)))
        .case_insensitive(true)
        .build()
}

/// Escape text for HTML element and attribute content
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
