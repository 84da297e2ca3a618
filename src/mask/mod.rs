//! Positional masking of sensitive text.
//!
//! Every masking operation replaces characters with a replacement character
//! (`*` unless configured otherwise) and preserves the length of the input,
//! measured in characters.
//!
//! | operation | masked region |
//! |---|---|
//! | [`Masker::full`] | every non-whitespace character |
//! | [`Masker::range`] | an inclusive index range |
//! | [`Masker::start`] | all but the last 4 characters (non-whitespace only) |
//! | [`Masker::end`] | all but the first 4 characters (non-whitespace only) |
//! | [`Masker::start_count`] | all but the last `n` characters |
//! | [`Masker::end_count`] | all but the first `n` characters |
//! | [`Masker::middle`] | all but a length-dependent border |
//! | [`Masker::middle_count`] | a centered window of `n` characters |
//!
//! # Example
//!
//! ```rust
//! use libtextkit::mask::{mask_middle, Masker, MaskRegion};
//!
//! assert_eq!(mask_middle("1234567890"), "12******90");
//!
//! let masker = Masker::builder().replacement('#').build();
//! assert_eq!(masker.apply("4111111111111111", MaskRegion::Start), "############1111");
//! ```

use smallvec::SmallVec;
use tracing::debug;

use crate::error::{MaskError, Result};

/// Replacement used when none is configured.
pub const DEFAULT_REPLACEMENT: char = '*';

/// Number of characters left visible by [`Masker::start`] and
/// [`Masker::end`].
const VISIBLE_EDGE: usize = 4;

type Chars = SmallVec<[char; 64]>;

/// Region of the input to mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum MaskRegion {
    /// Every non-whitespace character.
    Full,
    /// Inclusive character range.
    Range {
        /// First masked position.
        start: isize,
        /// Last masked position.
        end: isize,
    },
    /// Everything but the trailing 4 characters.
    Start,
    /// Everything but the leading 4 characters.
    End,
    /// Everything but the given number of trailing characters.
    StartCount(isize),
    /// Everything but the given number of leading characters.
    EndCount(isize),
    /// Everything but a border whose width depends on the input length.
    Middle,
    /// A centered window of the given number of characters.
    MiddleCount(isize),
}

/// Masking configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Masker {
    replacement: char,
}

impl Default for Masker {
    fn default() -> Self {
        Masker {
            replacement: DEFAULT_REPLACEMENT,
        }
    }
}

/// Builder for [`Masker`].
#[derive(Debug, Clone, Default)]
pub struct MaskerBuilder {
    replacement: Option<char>,
}

impl MaskerBuilder {
    /// Create a builder with the default replacement.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the replacement character.
    pub fn replacement(mut self, replacement: char) -> Self {
        self.replacement = Some(replacement);
        self
    }

    /// Build the [`Masker`].
    pub fn build(self) -> Masker {
        Masker::new(self.replacement)
    }
}

impl Masker {
    /// Create a masker; `None` selects [`DEFAULT_REPLACEMENT`].
    pub fn new(replacement: Option<char>) -> Self {
        Masker {
            replacement: replacement.unwrap_or(DEFAULT_REPLACEMENT),
        }
    }

    /// Start building a masker.
    pub fn builder() -> MaskerBuilder {
        MaskerBuilder::new()
    }

    /// The replacement character.
    pub fn replacement(&self) -> char {
        self.replacement
    }

    /// Mask `region` of `text`.
    pub fn apply(&self, text: &str, region: MaskRegion) -> String {
        match region {
            MaskRegion::Full => self.full(text),
            MaskRegion::Range { start, end } => self.range(text, start, end),
            MaskRegion::Start => self.start(text),
            MaskRegion::End => self.end(text),
            MaskRegion::StartCount(n) => self.start_count(text, n),
            MaskRegion::EndCount(n) => self.end_count(text, n),
            MaskRegion::Middle => self.middle(text),
            MaskRegion::MiddleCount(n) => self.middle_count(text, n),
        }
    }

    /// Replace every non-whitespace character; whitespace passes through.
    pub fn full(&self, text: &str) -> String {
        text.chars()
            .map(|c| if c.is_whitespace() { c } else { self.replacement })
            .collect()
    }

    /// Replace the characters at positions `start..=end`.
    ///
    /// # Errors
    ///
    /// Returns [`MaskError::InvalidRange`] unless `0 <= start <= end < len`.
    pub fn try_range(&self, text: &str, start: isize, end: isize) -> Result<String> {
        let chars: Chars = text.chars().collect();
        let len = chars.len();
        if start < 0 || start > end || end as usize >= len {
            return Err(MaskError::InvalidRange { start, end, len });
        }
        let (start, end) = (start as usize, end as usize);

        Ok(chars
            .iter()
            .enumerate()
            .map(|(i, &c)| if (start..=end).contains(&i) { self.replacement } else { c })
            .collect())
    }

    /// Replace the characters at positions `start..=end`, or return `text`
    /// unchanged if the range is invalid.
    pub fn range(&self, text: &str, start: isize, end: isize) -> String {
        self.try_range(text, start, end).unwrap_or_else(|err| {
            debug!(%err, "mask range rejected");
            text.to_string()
        })
    }

    /// Mask all but the last 4 characters, leaving whitespace visible.
    ///
    /// Inputs of 4 characters or fewer are masked entirely, whitespace
    /// included, like the count-based variants.
    pub fn start(&self, text: &str) -> String {
        let len = text.chars().count();
        if len <= VISIBLE_EDGE {
            return self.whole(len);
        }
        let hidden = len - VISIBLE_EDGE;
        text.chars()
            .enumerate()
            .map(|(i, c)| self.hide_visible(c, i < hidden))
            .collect()
    }

    /// Mask all but the first 4 characters, leaving whitespace visible.
    ///
    /// Inputs of 4 characters or fewer are masked entirely, whitespace
    /// included, like the count-based variants.
    pub fn end(&self, text: &str) -> String {
        let len = text.chars().count();
        if len <= VISIBLE_EDGE {
            return self.whole(len);
        }
        text.chars()
            .enumerate()
            .map(|(i, c)| self.hide_visible(c, i >= VISIBLE_EDGE))
            .collect()
    }

    /// Mask all but the last `unmasked` characters.
    ///
    /// `unmasked <= 0` returns `text` unchanged; an input no longer than
    /// `unmasked` is masked entirely.
    pub fn start_count(&self, text: &str, unmasked: isize) -> String {
        if unmasked <= 0 {
            debug!(unmasked, "non-positive unmasked count, input left unchanged");
            return text.to_string();
        }
        let len = text.chars().count();
        let unmasked = unmasked as usize;
        if len <= unmasked {
            return self.whole(len);
        }
        let hidden = len - unmasked;
        self.hide_where(text, |i| i < hidden)
    }

    /// Mask all but the first `unmasked` characters.
    ///
    /// `unmasked <= 0` returns `text` unchanged; an input no longer than
    /// `unmasked` is masked entirely.
    pub fn end_count(&self, text: &str, unmasked: isize) -> String {
        if unmasked <= 0 {
            debug!(unmasked, "non-positive unmasked count, input left unchanged");
            return text.to_string();
        }
        let len = text.chars().count();
        let unmasked = unmasked as usize;
        if len <= unmasked {
            return self.whole(len);
        }
        self.hide_where(text, |i| i >= unmasked)
    }

    /// Mask everything between two visible borders.
    ///
    /// The border width depends on the length of the input:
    ///
    /// | length | visible on each side |
    /// |---|---|
    /// | 0–4 | none, fully masked |
    /// | 5–8 | 1 |
    /// | 9–12 | 2 |
    /// | 13+ | 3 |
    pub fn middle(&self, text: &str) -> String {
        let len = text.chars().count();
        let edge = match len {
            0..=4 => return self.whole(len),
            5..=8 => 1,
            9..=12 => 2,
            _ => 3,
        };
        self.hide_where(text, |i| i >= edge && i < len - edge)
    }

    /// Mask a centered window of exactly `masked` characters, starting at
    /// `(len - masked) / 2`.
    ///
    /// `masked <= 0` returns `text` unchanged; an input no longer than
    /// `masked` is masked entirely.
    pub fn middle_count(&self, text: &str, masked: isize) -> String {
        if masked <= 0 {
            debug!(masked, "non-positive masked count, input left unchanged");
            return text.to_string();
        }
        let len = text.chars().count();
        let masked = masked as usize;
        if len <= masked {
            return self.whole(len);
        }
        let from = (len - masked) / 2;
        let to = from + masked;
        self.hide_where(text, |i| i >= from && i < to)
    }

    #[inline]
    fn hide_visible(&self, c: char, hide: bool) -> char {
        if hide && !c.is_whitespace() {
            self.replacement
        } else {
            c
        }
    }

    fn hide_where<F: Fn(usize) -> bool>(&self, text: &str, hide: F) -> String {
        text.chars()
            .enumerate()
            .map(|(i, c)| if hide(i) { self.replacement } else { c })
            .collect()
    }

    fn whole(&self, len: usize) -> String {
        std::iter::repeat(self.replacement).take(len).collect()
    }
}

/// [`Masker::full`] with the default replacement.
pub fn mask(text: &str) -> String {
    Masker::default().full(text)
}

/// [`Masker::range`] with the default replacement.
pub fn mask_range(text: &str, start: isize, end: isize) -> String {
    Masker::default().range(text, start, end)
}

/// [`Masker::start`] with the default replacement.
pub fn mask_start(text: &str) -> String {
    Masker::default().start(text)
}

/// [`Masker::end`] with the default replacement.
pub fn mask_end(text: &str) -> String {
    Masker::default().end(text)
}

/// [`Masker::start_count`] with the default replacement.
pub fn mask_start_count(text: &str, unmasked: isize) -> String {
    Masker::default().start_count(text, unmasked)
}

/// [`Masker::end_count`] with the default replacement.
pub fn mask_end_count(text: &str, unmasked: isize) -> String {
    Masker::default().end_count(text, unmasked)
}

/// [`Masker::middle`] with the default replacement.
pub fn mask_middle(text: &str) -> String {
    Masker::default().middle(text)
}

/// [`Masker::middle_count`] with the default replacement.
pub fn mask_middle_count(text: &str, masked: isize) -> String {
    Masker::default().middle_count(text, masked)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replacement_configuration() {
        assert_eq!(Masker::default().replacement(), '*');
        assert_eq!(Masker::new(None).replacement(), '*');
        assert_eq!(Masker::new(Some('x')).replacement(), 'x');
        assert_eq!(Masker::builder().build().replacement(), '*');
        assert_eq!(Masker::builder().replacement('•').build().replacement(), '•');
    }

    #[test]
    fn test_full() {
        assert_eq!(mask("secret"), "******");
        assert_eq!(mask("top secret"), "*** ******");
        assert_eq!(mask(""), "");
    }

    #[test]
    fn test_range() {
        assert_eq!(mask_range("password", 2, 5), "pa****rd");
        assert_eq!(mask_range("password", 0, 0), "*assword");
        assert_eq!(mask_range("password", 7, 7), "passwor*");
        assert_eq!(mask_range("password", 0, 7), "********");
    }

    #[test]
    fn test_invalid_range_returns_input() {
        assert_eq!(mask_range("password", 5, 2), "password");
        assert_eq!(mask_range("password", -1, 2), "password");
        assert_eq!(mask_range("password", 2, 8), "password");
        assert_eq!(mask_range("", 0, 0), "");
    }

    #[test]
    fn test_try_range_error() {
        let masker = Masker::default();
        assert_eq!(
            masker.try_range("abc", 1, 3),
            Err(MaskError::InvalidRange { start: 1, end: 3, len: 3 })
        );
        assert_eq!(masker.try_range("abc", 1, 2), Ok("a**".to_string()));
    }

    #[test]
    fn test_start_and_end() {
        assert_eq!(mask_start("4111111111111111"), "************1111");
        assert_eq!(mask_end("4111111111111111"), "4111************");
        assert_eq!(mask_start("abcd"), "****");
        assert_eq!(mask_end("ab"), "**");
        assert_eq!(mask_start("12 34 5678"), "** ** 5678");
        assert_eq!(mask_end("1234 56 78"), "1234 ** **");
    }

    #[test]
    fn test_short_start_and_end_mask_every_character() {
        assert_eq!(mask_start("a b"), "***");
        assert_eq!(mask_end("a b"), "***");
        assert_eq!(mask_start(" x  "), "****");
        // Same rule as the count-based variants
        assert_eq!(mask_start("a b"), mask_start_count("a b", 4));
        assert_eq!(mask_end("a b"), mask_end_count("a b", 4));
    }

    #[test]
    fn test_start_and_end_count() {
        assert_eq!(mask_start_count("abcdefgh", 3), "*****fgh");
        assert_eq!(mask_end_count("abcdefgh", 3), "abc*****");
        assert_eq!(mask_start_count("abc", 3), "***");
        assert_eq!(mask_end_count("ab c", 10), "****");
        assert_eq!(mask_start_count("abc", 0), "abc");
        assert_eq!(mask_end_count("abc", -2), "abc");
    }

    #[test]
    fn test_middle_tiers() {
        assert_eq!(mask_middle("abcd"), "****");
        assert_eq!(mask_middle("abcde"), "a***e");
        assert_eq!(mask_middle("abcdefgh"), "a******h");
        assert_eq!(mask_middle("abcdefghi"), "ab*****hi");
        assert_eq!(mask_middle("1234567890"), "12******90");
        assert_eq!(mask_middle("abcdefghijkl"), "ab********kl");
        assert_eq!(mask_middle("abcdefghijklm"), "abc*******klm");
        assert_eq!(mask_middle(""), "");
    }

    #[test]
    fn test_middle_count() {
        assert_eq!(mask_middle_count("abcdefgh", 2), "abc**fgh");
        assert_eq!(mask_middle_count("abcdefgh", 3), "ab***fgh");
        assert_eq!(mask_middle_count("abc", 5), "***");
        assert_eq!(mask_middle_count("abc", 0), "abc");
    }

    #[test]
    fn test_apply_dispatch() {
        let masker = Masker::builder().replacement('#').build();
        let text = "0123456789";
        assert_eq!(masker.apply(text, MaskRegion::Full), "##########");
        assert_eq!(masker.apply(text, MaskRegion::Range { start: 1, end: 2 }), "0##3456789");
        assert_eq!(masker.apply(text, MaskRegion::Start), "######6789");
        assert_eq!(masker.apply(text, MaskRegion::End), "0123######");
        assert_eq!(masker.apply(text, MaskRegion::StartCount(2)), "########89");
        assert_eq!(masker.apply(text, MaskRegion::EndCount(2)), "01########");
        assert_eq!(masker.apply(text, MaskRegion::Middle), "01######89");
        assert_eq!(masker.apply(text, MaskRegion::MiddleCount(4)), "012####789");
    }

    #[test]
    fn test_multibyte_characters() {
        assert_eq!(mask_middle("żółtość"), "ż*****ć");
        assert_eq!(mask_range("日本語テキスト", 1, 2), "日**テキスト");
        assert_eq!(Masker::new(Some('█')).start("дата рождения"), "████ ████ения");
    }
}
