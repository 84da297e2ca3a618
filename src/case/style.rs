//! Identifier case styles.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::separator::Separator;

/// Target identifier naming convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum CaseStyle {
    /// `HelloWorld`
    Pascal,
    /// `helloWorld`
    Camel,
    /// `hello_world`
    Snake,
    /// `hello-world`
    Kebab,
    /// `helloworld`
    Flat,
    /// `HELLOWORLD`
    UpperFlat,
    /// `Hello_World`
    PascalSnake,
    /// `hello_World`
    CamelSnake,
    /// `HELLO_WORLD`
    ScreamingSnake,
    /// `Hello-World`
    Train,
    /// `HELLO-WORLD`
    Cobol,
}

/// How the letters of a word are cased.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Casing {
    /// Word heads upper, everything else lower; the first word too.
    Pascal,
    /// Word heads upper except the first word, everything else lower.
    Camel,
    Lower,
    Upper,
}

impl CaseStyle {
    /// Every case style.
    pub const ALL: [CaseStyle; 11] = [
        CaseStyle::Pascal,
        CaseStyle::Camel,
        CaseStyle::Snake,
        CaseStyle::Kebab,
        CaseStyle::Flat,
        CaseStyle::UpperFlat,
        CaseStyle::PascalSnake,
        CaseStyle::CamelSnake,
        CaseStyle::ScreamingSnake,
        CaseStyle::Train,
        CaseStyle::Cobol,
    ];

    /// The conventional spelling of the style, written in the style itself.
    pub fn name(&self) -> &'static str {
        match self {
            CaseStyle::Pascal => "PascalCase",
            CaseStyle::Camel => "camelCase",
            CaseStyle::Snake => "snake_case",
            CaseStyle::Kebab => "kebab-case",
            CaseStyle::Flat => "flatcase",
            CaseStyle::UpperFlat => "UPPERFLATCASE",
            CaseStyle::PascalSnake => "Pascal_Snake_Case",
            CaseStyle::CamelSnake => "camel_Snake_Case",
            CaseStyle::ScreamingSnake => "SCREAMING_SNAKE_CASE",
            CaseStyle::Train => "Train-Case",
            CaseStyle::Cobol => "COBOL-CASE",
        }
    }

    /// Separator emitted at word boundaries, if the style has one.
    ///
    /// The snake family joins words with [`Separator::Underscore`], the dash
    /// family with [`Separator::Hyphen`]; flat, camel and Pascal styles
    /// concatenate.
    pub fn separator(&self) -> Option<Separator> {
        match self {
            CaseStyle::Snake
            | CaseStyle::PascalSnake
            | CaseStyle::CamelSnake
            | CaseStyle::ScreamingSnake => Some(Separator::Underscore),
            CaseStyle::Kebab | CaseStyle::Train | CaseStyle::Cobol => Some(Separator::Hyphen),
            CaseStyle::Pascal | CaseStyle::Camel | CaseStyle::Flat | CaseStyle::UpperFlat => None,
        }
    }

    pub(crate) fn casing(&self) -> Casing {
        match self {
            CaseStyle::Pascal | CaseStyle::PascalSnake | CaseStyle::Train => Casing::Pascal,
            CaseStyle::Camel | CaseStyle::CamelSnake => Casing::Camel,
            CaseStyle::Snake | CaseStyle::Kebab | CaseStyle::Flat => Casing::Lower,
            CaseStyle::UpperFlat | CaseStyle::ScreamingSnake | CaseStyle::Cobol => Casing::Upper,
        }
    }

    /// Normalized lookup key: lowercase, without `_`, `-` and spaces, and
    /// without a trailing `case`.
    fn key(s: &str) -> String {
        let squashed: String = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        match squashed.strip_suffix("case") {
            Some(stem) if !stem.is_empty() => stem.to_string(),
            _ => squashed,
        }
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CaseStyle {
    type Err = ParseError;

    /// Parse a style from its conventional spelling or any variant of it
    /// differing in case and separators (`"camelCase"`, `"camel-case"`,
    /// `"CAMEL_CASE"`, `"camel"` all give [`CaseStyle::Camel`]).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = CaseStyle::key(s);
        match key.as_str() {
            "pascal" | "uppercamel" => Ok(CaseStyle::Pascal),
            "camel" | "lowercamel" => Ok(CaseStyle::Camel),
            "snake" => Ok(CaseStyle::Snake),
            "kebab" | "dash" => Ok(CaseStyle::Kebab),
            "flat" => Ok(CaseStyle::Flat),
            "upperflat" => Ok(CaseStyle::UpperFlat),
            "pascalsnake" => Ok(CaseStyle::PascalSnake),
            "camelsnake" => Ok(CaseStyle::CamelSnake),
            "screamingsnake" | "constant" => Ok(CaseStyle::ScreamingSnake),
            "train" => Ok(CaseStyle::Train),
            "cobol" => Ok(CaseStyle::Cobol),
            _ => Err(ParseError::UnknownCaseStyle(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for style in CaseStyle::ALL {
            assert_eq!(style.name().parse::<CaseStyle>(), Ok(style));
        }
    }

    #[test]
    fn test_parse_variants() {
        assert_eq!("camel-case".parse(), Ok(CaseStyle::Camel));
        assert_eq!("CAMEL_CASE".parse(), Ok(CaseStyle::Camel));
        assert_eq!("camel".parse(), Ok(CaseStyle::Camel));
        assert_eq!("SCREAMING-SNAKE".parse(), Ok(CaseStyle::ScreamingSnake));
        assert_eq!("upper flat case".parse(), Ok(CaseStyle::UpperFlat));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "sponge-case".parse::<CaseStyle>(),
            Err(ParseError::UnknownCaseStyle("sponge-case".to_string()))
        );
        assert!("case".parse::<CaseStyle>().is_err());
    }

    #[test]
    fn test_separators() {
        assert_eq!(CaseStyle::Snake.separator(), Some(Separator::Underscore));
        assert_eq!(CaseStyle::CamelSnake.separator(), Some(Separator::Underscore));
        assert_eq!(CaseStyle::Cobol.separator(), Some(Separator::Hyphen));
        assert_eq!(CaseStyle::Train.separator(), Some(Separator::Hyphen));
        assert_eq!(CaseStyle::Camel.separator(), None);
        assert_eq!(CaseStyle::UpperFlat.separator(), None);
    }
}
