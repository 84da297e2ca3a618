//! Phonetic joining of word fragments.
//!
//! [`weld`] concatenates two fragments and elides a boundary letter when the
//! seam would otherwise double a sound:
//!
//! | last of `a` / first of `b` | result |
//! |---|---|
//! | the same character | `a` without its last character, then `b` |
//! | either one is not a letter | `a + b` |
//! | two vowels | `a`, then `b` without its first character |
//! | two consonants | `a` without its last character, then `b` |
//! | a vowel and a consonant | `a + b` |
//!
//! Vowels and consonants are recognised after stripping diacritics, see
//! [`crate::classify::letters`].

use crate::classify::letters::{is_consonant, is_letter, is_vowel};

/// Join `a` and `b`, eliding one boundary letter where the sounds meet.
///
/// If either fragment is empty the result is empty, even when the other one
/// is not.
///
/// ```rust
/// use libtextkit::weld::weld;
///
/// assert_eq!(weld("go", "owl"), "gowl");
/// assert_eq!(weld("red", "blue"), "reblue");
/// assert_eq!(weld("blue", "red"), "bluered");
/// assert_eq!(weld("", "red"), "");
/// ```
pub fn weld(a: &str, b: &str) -> String {
    let (Some((last_idx, last)), Some(first)) = (a.char_indices().next_back(), b.chars().next())
    else {
        return String::new();
    };

    let head = &a[..last_idx];
    let tail = &b[first.len_utf8()..];

    if last == first {
        return join(head, b);
    }
    if !is_letter(last) || !is_letter(first) {
        return join(a, b);
    }

    if is_vowel(last) && is_vowel(first) {
        join(a, tail)
    } else if is_consonant(last) && is_consonant(first) {
        join(head, b)
    } else {
        join(a, b)
    }
}

#[inline]
fn join(a: &str, b: &str) -> String {
    let mut out = String::with_capacity(a.len() + b.len());
    out.push_str(a);
    out.push_str(b);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_boundary() {
        assert_eq!(weld("go", "owl"), "gowl");
        assert_eq!(weld("book", "keeper"), "bookeeper");
        assert_eq!(weld("3", "3d"), "3d");
    }

    #[test]
    fn test_equal_boundary_is_case_sensitive() {
        // 'o' and 'O' are two vowels, so the first of `b` goes
        assert_eq!(weld("go", "Owl"), "gowl");
    }

    #[test]
    fn test_non_letter_boundary() {
        assert_eq!(weld("route", "66"), "route66");
        assert_eq!(weld("snake", "_case"), "snake_case");
        assert_eq!(weld("a-", "b"), "a-b");
    }

    #[test]
    fn test_two_vowels() {
        assert_eq!(weld("piano", "organ"), "pianorgan");
        assert_eq!(weld("café", "au"), "caféu");
    }

    #[test]
    fn test_two_consonants() {
        assert_eq!(weld("red", "blue"), "reblue");
        assert_eq!(weld("garç", "ton"), "garton");
    }

    #[test]
    fn test_mixed_boundary() {
        assert_eq!(weld("blue", "red"), "bluered");
        assert_eq!(weld("red", "apple"), "redapple");
    }

    #[test]
    fn test_letters_outside_the_tables() {
        // Neither vowel nor consonant: plain concatenation
        assert_eq!(weld("日本", "語"), "日本語");
        assert_eq!(weld("αβ", "γδ"), "αβγδ");
    }

    #[test]
    fn test_empty_operand() {
        assert_eq!(weld("", ""), "");
        assert_eq!(weld("abc", ""), "");
        assert_eq!(weld("", "abc"), "");
    }

    #[test]
    fn test_single_characters() {
        assert_eq!(weld("a", "a"), "a");
        assert_eq!(weld("b", "c"), "c");
        assert_eq!(weld("a", "e"), "a");
    }
}
