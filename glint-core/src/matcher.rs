//! Keyword matching strategies
//!
//! A [`Matcher`] turns a text and a keyword into the `char` offsets where the
//! keyword starts. Matches may overlap: after a match at `i` the scan resumes
//! at `i + 1`, so `"aa"` is found twice in `"aaa"`.

use serde::{Deserialize, Serialize};

/// Strategy for locating a keyword inside a text
pub trait Matcher {
    /// Start offsets, in chars, of every occurrence of `keyword` in `origin`.
    ///
    /// Returns an empty list for an empty keyword.
    fn match_indices(&self, origin: &str, keyword: &str) -> Vec<usize>;

    /// Whether `keyword` occurs in `origin` at all
    fn is_highlightable(&self, origin: &str, keyword: &str) -> bool {
        !self.match_indices(origin, keyword).is_empty()
    }
}

/// Case-sensitive literal matching
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExactMatcher;

impl Matcher for ExactMatcher {
    fn match_indices(&self, origin: &str, keyword: &str) -> Vec<usize> {
        find_overlapping(origin, keyword)
    }
}

/// Literal matching that ignores case.
///
/// Both strings are lowercased one char at a time. A char whose lowercase
/// form is more than one char is compared as-is, so every folded text has
/// the same char count as its origin and offsets map back unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaseInsensitiveMatcher;

impl Matcher for CaseInsensitiveMatcher {
    fn match_indices(&self, origin: &str, keyword: &str) -> Vec<usize> {
        find_overlapping(&fold_case(origin), &fold_case(keyword))
    }
}

/// Built-in matcher selection, e.g. from configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum MatcherKind {
    Exact,
    #[default]
    CaseInsensitive,
}

impl MatcherKind {
    pub fn all() -> &'static [MatcherKind] {
        &[MatcherKind::Exact, MatcherKind::CaseInsensitive]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MatcherKind::Exact => "Exact",
            MatcherKind::CaseInsensitive => "Ignore case",
        }
    }

    /// The other built-in matcher
    pub fn toggled(&self) -> Self {
        match self {
            MatcherKind::Exact => MatcherKind::CaseInsensitive,
            MatcherKind::CaseInsensitive => MatcherKind::Exact,
        }
    }
}

impl Matcher for MatcherKind {
    fn match_indices(&self, origin: &str, keyword: &str) -> Vec<usize> {
        match self {
            MatcherKind::Exact => ExactMatcher.match_indices(origin, keyword),
            MatcherKind::CaseInsensitive => CaseInsensitiveMatcher.match_indices(origin, keyword),
        }
    }
}

fn find_overlapping(origin: &str, keyword: &str) -> Vec<usize> {
    let mut indices = Vec::new();
    if keyword.is_empty() {
        return indices;
    }

    let mut search_from = 0;
    let mut counted_to = 0;
    let mut char_index = 0;

    while let Some(pos) = origin[search_from..].find(keyword) {
        let start = search_from + pos;
        char_index += origin[counted_to..start].chars().count();
        counted_to = start;
        indices.push(char_index);

        // Resume one char after the match start
        let step = origin[start..].chars().next().map_or(1, char::len_utf8);
        search_from = start + step;
    }

    indices
}

fn fold_case(text: &str) -> String {
    text.chars()
        .map(|c| {
            let mut lower = c.to_lowercase();
            match (lower.next(), lower.next()) {
                (Some(folded), None) => folded,
                _ => c,
            }
        })
        .collect()
}
