//! Bulk keep/remove/count filters over strings.
//!
//! All three operations are parameterized by a [`CharClass`]: a
//! [`Category`] or its complement. They make a single left-to-right pass and
//! never reorder characters, so for every string `s` and class `C`:
//!
//! - `keep(keep(s, C), C) == keep(s, C)`
//! - `keep(s, C)` and `remove(s, C)` together contain every character of `s`
//!   exactly once, each in its original relative order
//! - `count(s, C) == keep(s, C).chars().count()`
//!
//! # Example
//!
//! ```rust
//! use libtextkit::filter::{count, keep, remove};
//! use libtextkit::classify::Category;
//!
//! assert_eq!(keep("R2-D2 & C-3PO", Category::Digit), "223");
//! assert_eq!(remove("R2-D2 & C-3PO", Category::Digit), "R-D & C-PO");
//! assert_eq!(count("R2-D2 & C-3PO", Category::UppercaseLetter), 5);
//! ```

pub mod named;

use std::borrow::Cow;

use tracing::debug;

use crate::classify::matcher::matcher;
use crate::classify::{Category, CharClass};

pub use named::*;

/// Keep the characters of `text` that belong to `class`.
///
/// Returns the input borrowed when nothing has to be dropped.
pub fn keep_cow<K: Into<CharClass>>(text: &str, class: K) -> Cow<'_, str> {
    if text.is_empty() {
        return Cow::Borrowed(text);
    }
    let class = class.into();
    matcher(class.category()).retain(text, class.is_negated())
}

/// Keep the characters of `text` that belong to `class`.
#[inline]
pub fn keep<K: Into<CharClass>>(text: &str, class: K) -> String {
    keep_cow(text, class).into_owned()
}

/// Remove the characters of `text` that belong to `class`.
///
/// Equivalent to `keep(text, class.except())`.
#[inline]
pub fn remove<K: Into<CharClass>>(text: &str, class: K) -> String {
    keep(text, class.into().except())
}

/// Count the characters of `text` that belong to `class`.
pub fn count<K: Into<CharClass>>(text: &str, class: K) -> usize {
    if text.is_empty() {
        return 0;
    }
    let class = class.into();
    matcher(class.category()).count(text, class.is_negated())
}

/// Check whether every character of `text` belongs to `class`.
///
/// The empty string trivially satisfies any class.
pub fn all<K: Into<CharClass>>(text: &str, class: K) -> bool {
    count(text, class.into().except()) == 0
}

/// Check whether at least one character of `text` belongs to `class`.
pub fn any<K: Into<CharClass>>(text: &str, class: K) -> bool {
    count(text, class) > 0
}

/// [`keep`] with a class given by name (see [`CharClass`]'s `FromStr`).
///
/// An unknown name matches nothing, so the result is empty.
pub fn keep_named(text: &str, name: &str) -> String {
    match name.parse::<CharClass>() {
        Ok(class) => keep(text, class),
        Err(err) => {
            debug!(%err, "keep with unknown class matches nothing");
            String::new()
        }
    }
}

/// [`remove`] with a class given by name.
///
/// An unknown name matches nothing, so the input is returned unchanged.
pub fn remove_named(text: &str, name: &str) -> String {
    match name.parse::<CharClass>() {
        Ok(class) => remove(text, class),
        Err(err) => {
            debug!(%err, "remove with unknown class leaves input unchanged");
            text.to_string()
        }
    }
}

/// [`count`] with a class given by name.
///
/// An unknown name matches nothing, so the count is zero.
pub fn count_named(text: &str, name: &str) -> usize {
    match name.parse::<CharClass>() {
        Ok(class) => count(text, class),
        Err(err) => {
            debug!(%err, "count with unknown class matches nothing");
            0
        }
    }
}

/// Count the characters of `text` per category, skipping empty categories.
pub fn histogram(text: &str) -> Vec<(Category, usize)> {
    Category::ALL
        .iter()
        .map(|&category| (category, count(text, category)))
        .filter(|&(_, n)| n > 0)
        .collect()
}
