//! Word-joining separator characters.

use std::fmt;

use crate::error::ParseError;

/// Character used to join words, or to prefix and suffix them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Separator {
    /// `-`
    Hyphen,
    /// `~`
    Tilde,
    /// `_`
    Underscore,
    /// `.`
    Dot,
    /// `,`
    Comma,
    /// ` `
    Space,
}

impl Separator {
    /// Every separator.
    pub const ALL: [Separator; 6] = [
        Separator::Hyphen,
        Separator::Tilde,
        Separator::Underscore,
        Separator::Dot,
        Separator::Comma,
        Separator::Space,
    ];

    /// The separator character.
    pub const fn as_char(&self) -> char {
        match self {
            Separator::Hyphen => '-',
            Separator::Tilde => '~',
            Separator::Underscore => '_',
            Separator::Dot => '.',
            Separator::Comma => ',',
            Separator::Space => ' ',
        }
    }

    /// The separator as a one-character string.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Separator::Hyphen => "-",
            Separator::Tilde => "~",
            Separator::Underscore => "_",
            Separator::Dot => ".",
            Separator::Comma => ",",
            Separator::Space => " ",
        }
    }

    /// Join `words` with this separator.
    pub fn join<S: AsRef<str>>(&self, words: &[S]) -> String {
        let mut out = String::new();
        for (i, word) in words.iter().enumerate() {
            if i > 0 {
                out.push(self.as_char());
            }
            out.push_str(word.as_ref());
        }
        out
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<char> for Separator {
    type Error = ParseError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Separator::ALL
            .iter()
            .copied()
            .find(|s| s.as_char() == c)
            .ok_or(ParseError::UnknownSeparator(c))
    }
}

impl From<Separator> for char {
    fn from(separator: Separator) -> Self {
        separator.as_char()
    }
}
