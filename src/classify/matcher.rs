//! Process-wide registry of compiled category matchers.
//!
//! Each pattern-backed category is compiled once into two regular
//! expressions: one matching runs of member characters and one matching runs
//! of non-member characters. Filtering a string then becomes a single
//! `replace_all` pass with the opposite expression, and a category and its
//! complement use the two halves of the same pair, which keeps them exact
//! complements of each other.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashMap;
use tracing::trace;

use crate::classify::category::{Category, Definition};

/// Compiled membership test for one category.
pub(crate) enum Matcher {
    Pattern {
        /// Runs of characters inside the category.
        members: Regex,
        /// Runs of characters outside the category.
        outsiders: Regex,
    },
    Predicate(fn(char) -> bool),
}

static REGISTRY: Lazy<FxHashMap<Category, Matcher>> = Lazy::new(|| {
    trace!(categories = Category::ALL.len(), "compiling category matchers");
    Category::ALL
        .iter()
        .map(|&category| (category, Matcher::compile(category)))
        .collect()
});

/// Get the shared matcher of `category`.
#[inline]
pub(crate) fn matcher(category: Category) -> &'static Matcher {
    &REGISTRY[&category]
}

impl Matcher {
    fn compile(category: Category) -> Self {
        match category.definition() {
            Definition::Pattern(class) => {
                // The class fragments are constants of this crate.
                let members = Regex::new(&format!("{class}+"))
                    .unwrap_or_else(|e| panic!("invalid class for {category}: {e}"));
                let outsiders = Regex::new(&format!("[^{class}]+"))
                    .unwrap_or_else(|e| panic!("invalid class for {category}: {e}"));
                Matcher::Pattern { members, outsiders }
            }
            Definition::Predicate(predicate) => Matcher::Predicate(predicate),
        }
    }

    /// Check whether `c` belongs to the category.
    #[inline]
    pub(crate) fn matches(&self, c: char) -> bool {
        match self {
            Matcher::Pattern { members, .. } => {
                let mut buf = [0u8; 4];
                members.is_match(c.encode_utf8(&mut buf))
            }
            Matcher::Predicate(predicate) => predicate(c),
        }
    }

    /// Keep the characters of `text` that belong to the category, or to its
    /// complement when `negated` is set.
    pub(crate) fn retain<'a>(&self, text: &'a str, negated: bool) -> Cow<'a, str> {
        match self {
            Matcher::Pattern { members, outsiders } => {
                let strip = if negated { members } else { outsiders };
                strip.replace_all(text, "")
            }
            Matcher::Predicate(predicate) => {
                if text.chars().all(|c| predicate(c) != negated) {
                    Cow::Borrowed(text)
                } else {
                    Cow::Owned(text.chars().filter(|&c| predicate(c) != negated).collect())
                }
            }
        }
    }

    /// Count the characters of `text` that belong to the category, or to its
    /// complement when `negated` is set.
    pub(crate) fn count(&self, text: &str, negated: bool) -> usize {
        match self {
            Matcher::Pattern { members, outsiders } => {
                let keep = if negated { outsiders } else { members };
                keep.find_iter(text).map(|m| m.as_str().chars().count()).sum()
            }
            Matcher::Predicate(predicate) => {
                text.chars().filter(|&c| predicate(c) != negated).count()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_compiles() {
        for &category in Category::ALL {
            // Forces compilation of both halves
            let _ = matcher(category).matches('a');
        }
    }

    #[test]
    fn test_pattern_matcher() {
        let m = matcher(Category::UppercaseLetter);
        assert!(m.matches('A'));
        assert!(m.matches('Ж'));
        assert!(!m.matches('a'));
        assert_eq!(m.retain("aBcDé", false), "BD");
        assert_eq!(m.retain("aBcDé", true), "acé");
        assert_eq!(m.count("aBcDé", false), 2);
        assert_eq!(m.count("aBcDé", true), 3);
    }

    #[test]
    fn test_predicate_matcher_borrows_when_unchanged() {
        let m = matcher(Category::Vowel);
        assert!(matches!(m.retain("aeiou", false), Cow::Borrowed(_)));
        assert_eq!(m.retain("education", false), "euaio");
        assert_eq!(m.retain("education", true), "dctn");
    }

    #[test]
    fn test_nested_negated_class() {
        let m = matcher(Category::Graph);
        assert_eq!(m.retain("a b\tc", false), "abc");
        assert_eq!(m.retain("a b\tc", true), " \t");
    }
}
