//! Diacritic stripping.
//!
//! Text is brought to Unicode canonical decomposition (NFD) and every
//! combining mark is dropped afterwards, so `"crème brûlée"` becomes
//! `"creme brulee"`. Characters without a canonical decomposition (`ł`, `ø`,
//! `ß`, ...) are kept as they are, and decompositions without any
//! combining mark, such as Hangul syllables into jamo, are recomposed.

use unicode_normalization::char::{decompose_canonical, is_combining_mark};
use unicode_normalization::UnicodeNormalization;

/// Remove every diacritic from `text`.
///
/// # Example
///
/// ```rust
/// use libtextkit::normalize::strip_diacritics;
///
/// assert_eq!(strip_diacritics("Ångström"), "Angstrom");
/// assert_eq!(strip_diacritics("plain"), "plain");
/// ```
pub fn strip_diacritics(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).nfc().collect()
}

/// Return the base character of `c` with its diacritics removed.
///
/// Only a decomposition containing at least one combining mark counts:
/// otherwise, or if the decomposition consists of combining marks only, `c`
/// itself is returned.
#[inline]
pub fn base_char(c: char) -> char {
    let mut base = None;
    let mut marked = false;
    decompose_canonical(c, |d| {
        if is_combining_mark(d) {
            marked = true;
        } else if base.is_none() {
            base = Some(d);
        }
    });
    match base {
        Some(base) if marked => base,
        _ => c,
    }
}

/// Check whether `c` carries at least one diacritic.
#[inline]
pub fn has_diacritic(c: char) -> bool {
    base_char(c) != c
}
