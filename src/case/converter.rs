//! Streaming case-style transducer.
//!
//! The converter reads one character at a time. Any non-alphanumeric
//! character is a delimiter. Two flags carry the context between characters:
//! whether the previous character was a delimiter (initially true), and
//! whether a delimiter that directly followed an alphanumeric character is
//! still waiting for its successor.
//!
//! For each alphanumeric character:
//!
//! 1. if a lone delimiter is waiting, the style's separator (if any) is
//!    emitted first;
//! 2. the character itself is emitted, cased according to the style and to
//!    whether the previous character was a delimiter.
//!
//! A separator therefore appears only for a single delimiter placed between
//! two alphanumeric characters. Runs of two or more delimiters, and leading
//! or trailing delimiters, separate nothing, although the next word head is
//! still cased as one. Delimiters are never copied.

use crate::case::style::{CaseStyle, Casing};
use crate::classify::letters::is_delimiter;

/// Incremental converter from free text to one [`CaseStyle`].
///
/// # Example
///
/// ```rust
/// use libtextkit::case::{CaseConverter, CaseStyle};
///
/// let mut converter = CaseConverter::new(CaseStyle::Kebab);
/// converter.push_str("Hello ");
/// converter.push_str("World");
/// assert_eq!(converter.finish(), "hello-world");
/// ```
#[derive(Debug, Clone)]
pub struct CaseConverter {
    style: CaseStyle,
    casing: Casing,
    separator: Option<char>,
    after_delimiter: bool,
    separator_pending: bool,
    output: String,
}

impl CaseConverter {
    /// Create a converter for `style` with an empty output.
    pub fn new(style: CaseStyle) -> Self {
        Self::with_capacity(style, 0)
    }

    /// Create a converter whose output buffer can hold `capacity` bytes.
    pub fn with_capacity(style: CaseStyle, capacity: usize) -> Self {
        CaseConverter {
            style,
            casing: style.casing(),
            separator: style.separator().map(|s| s.as_char()),
            after_delimiter: true,
            separator_pending: false,
            output: String::with_capacity(capacity),
        }
    }

    /// The target style.
    pub fn style(&self) -> CaseStyle {
        self.style
    }

    /// Feed one character.
    pub fn push(&mut self, c: char) {
        if is_delimiter(c) {
            // Only a delimiter right after a word may become a separator
            self.separator_pending = !self.after_delimiter;
            self.after_delimiter = true;
            return;
        }

        if self.separator_pending {
            if let Some(sep) = self.separator {
                self.output.push(sep);
            }
            self.separator_pending = false;
        }

        let at_start = self.output.is_empty();
        let word_head = self.after_delimiter;
        let upper = match self.casing {
            Casing::Pascal => at_start || word_head,
            Casing::Camel => !at_start && word_head,
            Casing::Lower => false,
            Casing::Upper => true,
        };
        if upper {
            self.output.extend(c.to_uppercase());
        } else {
            self.output.extend(c.to_lowercase());
        }

        self.after_delimiter = false;
    }

    /// Feed every character of `text`.
    pub fn push_str(&mut self, text: &str) {
        for c in text.chars() {
            self.push(c);
        }
    }

    /// Output produced so far.
    pub fn as_str(&self) -> &str {
        &self.output
    }

    /// Consume the converter and return its output.
    pub fn finish(self) -> String {
        self.output
    }
}
