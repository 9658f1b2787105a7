//! Multi-keyword search over lower-cased text

use crate::error::{Result, ScreenerError};
use aho_corasick::{AhoCorasick, MatchKind};
use std::collections::BTreeSet;

/// Aho-Corasick automaton over a fixed keyword list. Pattern ids are the
/// keyword positions in the list, so callers get results in list order.
pub struct KeywordSet {
    automaton: AhoCorasick,
    keyword_count: usize,
}

impl KeywordSet {
    pub fn new(keywords: &[&str]) -> Result<Self> {
        // Standard semantics are required for overlapping search
        let automaton = AhoCorasick::builder()
            .match_kind(MatchKind::Standard)
            .build(keywords)
            .map_err(|e| ScreenerError::Processing(format!("Failed to build keyword matcher: {}", e)))?;

        Ok(Self {
            automaton,
            keyword_count: keywords.len(),
        })
    }

    /// Ids of keywords occurring as standalone tokens
    pub fn whole_word_matches(&self, haystack: &str) -> BTreeSet<usize> {
        self.automaton
            .find_overlapping_iter(haystack)
            .filter(|m| is_token_boundary(haystack, m.start(), m.end()))
            .map(|m| m.pattern().as_usize())
            .collect()
    }

    /// Ids of keywords occurring anywhere, including inside longer words
    pub fn substring_matches(&self, haystack: &str) -> BTreeSet<usize> {
        self.automaton
            .find_overlapping_iter(haystack)
            .map(|m| m.pattern().as_usize())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.keyword_count
    }

    pub fn is_empty(&self) -> bool {
        self.keyword_count == 0
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// True when `haystack[start..end]` is not glued to a neighbouring word character
fn is_token_boundary(haystack: &str, start: usize, end: usize) -> bool {
    let before = haystack[..start].chars().next_back();
    let after = haystack[end..].chars().next();
    !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
}
