//! Letter-level predicates: vowels, consonants and diacritics.
//!
//! The vowel and consonant tables cover the Latin alphabet, both cases, plus
//! a handful of consonant letters that have no canonical decomposition
//! (`ß`, `ð`, `þ`, `ł`, `đ`, `ħ`, `ŋ`). Accented forms are recognised by
//! stripping their diacritics first, so `é` is a vowel and `ç` a consonant.
//! Letters outside these tables (Greek, Cyrillic, CJK, ...) are neither
//! vowels nor consonants.

use crate::normalize::{base_char, has_diacritic};

/// Consonants without a canonical decomposition, besides ASCII.
const EXTRA_CONSONANTS: &[char] = &[
    'ß', 'ð', 'Ð', 'þ', 'Þ', 'ł', 'Ł', 'đ', 'Đ', 'ħ', 'Ħ', 'ŋ', 'Ŋ',
];

/// Consonants that never take part in a consonant cluster.
const NON_CLUSTER_CONSONANTS: &[char] = &[
    'h', 'j', 'q', 'v', 'w', 'x', 'H', 'J', 'Q', 'V', 'W', 'X',
];

/// Zero-width code points: ZWSP, ZWNJ, ZWJ, word joiner and BOM.
const ZERO_WIDTH: &[char] = &['\u{200B}', '\u{200C}', '\u{200D}', '\u{2060}', '\u{FEFF}'];

#[inline]
fn is_plain_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'A' | 'E' | 'I' | 'O' | 'U')
}

#[inline]
fn is_plain_consonant(c: char) -> bool {
    (c.is_ascii_alphabetic() && !is_plain_vowel(c)) || EXTRA_CONSONANTS.contains(&c)
}

/// Check if `c` is a letter (Unicode `Alphabetic`).
#[inline]
pub fn is_letter(c: char) -> bool {
    c.is_alphabetic()
}

/// Check if `c` is a vowel once its diacritics are removed.
///
/// ```rust
/// use libtextkit::classify::letters::is_vowel;
///
/// assert!(is_vowel('a'));
/// assert!(is_vowel('Ü'));
/// assert!(!is_vowel('y'));
/// ```
#[inline]
pub fn is_vowel(c: char) -> bool {
    is_plain_vowel(base_char(c))
}

/// Check if `c` is a consonant once its diacritics are removed.
#[inline]
pub fn is_consonant(c: char) -> bool {
    is_plain_consonant(base_char(c))
}

/// Check if `c` carries a diacritic, i.e. its canonical decomposition holds
/// a combining mark.
#[inline]
pub fn is_accented(c: char) -> bool {
    has_diacritic(c)
}

/// Check if `c` is a vowel carrying a diacritic (`á`, `Ö`).
#[inline]
pub fn is_accented_vowel(c: char) -> bool {
    let base = base_char(c);
    base != c && is_plain_vowel(base)
}

/// Check if `c` is a consonant carrying a diacritic (`ç`, `Ž`).
#[inline]
pub fn is_accented_consonant(c: char) -> bool {
    let base = base_char(c);
    base != c && is_plain_consonant(base)
}

/// Check if `c` is a letter carrying a diacritic, whatever its script.
#[inline]
pub fn is_diacritical_letter(c: char) -> bool {
    is_letter(c) && is_accented(c)
}

/// Check if `c` is one of `h, j, q, v, w, x` (either case).
#[inline]
pub fn is_non_cluster_consonant(c: char) -> bool {
    NON_CLUSTER_CONSONANTS.contains(&c)
}

/// Check if `c` is a zero-width character.
#[inline]
pub fn is_zero_width(c: char) -> bool {
    ZERO_WIDTH.contains(&c)
}

/// Check if `c` separates words: whitespace, `-`, `_`, `~` and, more
/// generally, anything that is not alphanumeric.
#[inline]
pub fn is_delimiter(c: char) -> bool {
    !c.is_alphanumeric()
}

/// Check if `c` is 7-bit ASCII.
#[inline]
pub fn is_ascii(c: char) -> bool {
    c.is_ascii()
}
