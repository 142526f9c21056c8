//! Fuzzy subsequence matching
//!
//! A query matches a candidate when every character of the query appears in
//! the candidate, in order, ignoring case. Matches keep the candidate order;
//! there is no scoring.
//!
//! # Examples
//!
//! ```
//! use ignorepick::matcher::fuzzy_filter;
//!
//! let items = ["Node.gitignore", "Python.gitignore", "Go.gitignore"];
//! assert_eq!(fuzzy_filter("py", &items), vec!["Python.gitignore"]);
//! ```

use regex::{Regex, RegexBuilder};

/// Collapse whitespace runs into single spaces and trim both ends
#[must_use]
pub fn normalize_query(query: &str) -> String {
    query.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Compiled form of a normalized query
///
/// `None` inner pattern means the query was empty and everything matches.
#[derive(Debug, Clone)]
pub struct QueryPattern {
    regex: Option<Regex>,
    /// Set when the pattern could not be compiled (size limit)
    invalid: bool,
}

impl QueryPattern {
    /// Build a pattern from a raw query
    ///
    /// Each character is escaped so regex syntax in the query is taken
    /// literally, then the characters are joined with `.*`.
    #[must_use]
    pub fn new(query: &str) -> Self {
        let normalized = normalize_query(query);
        if normalized.is_empty() {
            return Self {
                regex: None,
                invalid: false,
            };
        }

        let source = normalized
            .chars()
            .map(|c| regex::escape(c.encode_utf8(&mut [0; 4])))
            .collect::<Vec<_>>()
            .join(".*");

        match RegexBuilder::new(&source).case_insensitive(true).build() {
            Ok(regex) => Self {
                regex: Some(regex),
                invalid: false,
            },
            Err(_) => Self {
                regex: None,
                invalid: true,
            },
        }
    }

    /// Whether this pattern accepts every candidate
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.regex.is_none() && !self.invalid
    }

    /// Test a single candidate
    #[must_use]
    pub fn is_match(&self, candidate: &str) -> bool {
        match &self.regex {
            Some(regex) => regex.is_match(candidate),
            None => !self.invalid,
        }
    }
}

/// Indices of the items matching `query`, in their original order
#[must_use]
pub fn matching_indices<S: AsRef<str>>(query: &str, items: &[S]) -> Vec<usize> {
    let pattern = QueryPattern::new(query);
    if pattern.is_empty() {
        return (0..items.len()).collect();
    }

    items
        .iter()
        .enumerate()
        .filter(|(_, item)| pattern.is_match(item.as_ref()))
        .map(|(idx, _)| idx)
        .collect()
}

/// Items matching `query`, in their original order
#[must_use]
pub fn fuzzy_filter<'a, S: AsRef<str>>(query: &str, items: &'a [S]) -> Vec<&'a str> {
    matching_indices(query, items)
        .into_iter()
        .map(|idx| items[idx].as_ref())
        .collect()
}
