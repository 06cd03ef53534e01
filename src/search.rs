//! Fuzzy matching over category and unit names, backed by `nucleo`.

use std::sync::Arc;

use nucleo::pattern::{CaseMatching, Normalization};
use nucleo::{Config, Nucleo};

/// Longest query accepted from the keyboard
const MAX_QUERY_LEN: usize = 64;
/// Milliseconds each matcher tick may block waiting for workers
const TICK_TIMEOUT_MS: u64 = 10;

/// A fixed list of names filtered by a fuzzy query
pub struct FuzzyList {
    nucleo: Nucleo<String>,
    items: Vec<String>,
    query: String,
}

impl FuzzyList {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items: Vec<String> = items.into_iter().map(Into::into).collect();
        let nucleo = Nucleo::new(Config::DEFAULT, Arc::new(|| {}), None, 1);

        let injector = nucleo.injector();
        for item in &items {
            injector.push(item.clone(), |item, cols| {
                cols[0] = item.as_str().into();
            });
        }

        let mut list = Self { nucleo, items, query: String::new() };
        list.settle();
        list
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: &str) {
        let query: String = query.chars().take(MAX_QUERY_LEN).collect();
        let append = query.starts_with(&self.query) && !self.query.is_empty();
        self.query = query;
        self.nucleo.pattern.reparse(
            0,
            &self.query,
            CaseMatching::Ignore,
            Normalization::Smart,
            append,
        );
        self.settle();
    }

    pub fn push_char(&mut self, c: char) {
        let mut query = self.query.clone();
        query.push(c);
        self.set_query(&query);
    }

    /// Remove the last query character; returns false if the query was empty
    pub fn pop_char(&mut self) -> bool {
        let mut query = self.query.clone();
        if query.pop().is_none() {
            return false;
        }
        self.set_query(&query);
        true
    }

    pub fn clear_query(&mut self) {
        self.set_query("");
    }

    /// Matching names, best first. With an empty query every item is
    /// returned in its original order.
    pub fn matches(&self) -> Vec<&str> {
        if self.query.is_empty() {
            return self.items.iter().map(String::as_str).collect();
        }
        let snapshot = self.nucleo.snapshot();
        snapshot
            .matched_items(..snapshot.matched_item_count())
            .map(|item| item.data.as_str())
            .collect()
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }

    /// Tick until the worker pool has processed the current pattern
    fn settle(&mut self) {
        while self.nucleo.tick(TICK_TIMEOUT_MS).running {}
    }
}

/// Up to `limit` candidates that fuzzily match `query`, best first
pub fn suggest<'a, I>(query: &str, candidates: I, limit: usize) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut list = FuzzyList::new(candidates);
    list.set_query(query);
    list.matches().into_iter().take(limit).map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{list_categories, list_units};

    #[test]
    fn test_empty_query_returns_all_in_order() {
        let list = FuzzyList::new(["Bits", "Bytes", "Kilobits"]);
        assert_eq!(list.matches(), vec!["Bits", "Bytes", "Kilobits"]);
        assert_eq!(list.total(), 3);
    }

    #[test]
    fn test_query_filters_items() {
        let mut list = FuzzyList::new(list_units("Length").unwrap());
        list.set_query("kilo");
        assert_eq!(list.matches(), vec!["Kilometers"]);
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let mut list = FuzzyList::new(list_categories());
        list.set_query("TEMP");
        assert_eq!(list.matches().first(), Some(&"Temperature"));
    }

    #[test]
    fn test_push_and_pop_char() {
        let mut list = FuzzyList::new(list_units("Mass").unwrap());
        list.push_char('o');
        list.push_char('u');
        list.push_char('n');
        list.push_char('c');
        assert_eq!(list.query(), "ounc");
        assert_eq!(list.matches(), vec!["Ounces"]);

        assert!(list.pop_char());
        assert!(list.pop_char());
        assert!(list.pop_char());
        assert!(list.pop_char());
        assert!(!list.pop_char());
        assert_eq!(list.matches().len(), 5);
    }

    #[test]
    fn test_no_match() {
        let mut list = FuzzyList::new(["Hertz", "Kilohertz"]);
        list.set_query("zzzq");
        assert!(list.matches().is_empty());
    }

    #[test]
    fn test_query_length_is_capped() {
        let mut list = FuzzyList::new(["Hertz"]);
        list.set_query(&"x".repeat(200));
        assert_eq!(list.query().len(), MAX_QUERY_LEN);
    }

    #[test]
    fn test_suggest_typo() {
        let suggestions = suggest("Kilometer", list_units("Length").unwrap(), 3);
        assert_eq!(suggestions.first().map(String::as_str), Some("Kilometers"));
    }

    #[test]
    fn test_suggest_respects_limit() {
        let suggestions = suggest("s", list_categories(), 2);
        assert!(suggestions.len() <= 2);
    }
}
