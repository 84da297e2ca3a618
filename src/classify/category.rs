//! The closed set of character categories.
//!
//! A [`Category`] names a total predicate over `char`. Categories come in three
//! groups:
//!
//! - **Unicode general categories** (`L`, `Lu`, `Mn`, `Pd`, `Zs`, `Cc`, ...),
//!   matched by the Unicode tables of the `regex` crate
//! - **POSIX-like composites** (`alnum`, `blank`, `cntrl`, `digit`, `graph`,
//!   `print`, `space`, `xdigit`)
//! - **Custom composites** (`alnum-space`, `diacritical-letter`, `zero-width`,
//!   `vowel`, `consonant`, `ascii`, `delimiter`)
//!
//! Every category has exactly one complement, obtained with
//! [`Category::except`]. Memberships may overlap between categories (a `'a'`
//! is a `Letter`, a `LowercaseLetter` and a `Vowel`), but a category and its
//! complement always partition the set of characters.
//!
//! Surrogate code points cannot be represented by a Rust `char`, so the
//! `Cs` general category has no counterpart here.

use std::fmt;
use std::str::FromStr;

use crate::classify::letters;
use crate::error::ParseError;

/// How membership in a category is decided.
#[derive(Clone, Copy)]
pub(crate) enum Definition {
    /// A bracketed regular-expression character class, e.g. `[\p{Lu}]`.
    Pattern(&'static str),
    /// A hand-written predicate, for rules a character class cannot express.
    Predicate(fn(char) -> bool),
}

macro_rules! categories {
    ($($(#[$doc:meta])* $variant:ident => $name:literal, $abbr:expr, $def:expr;)*) => {
        /// Character category.
        ///
        /// See the [module documentation](self) for the grouping.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(
            feature = "serialization",
            derive(serde::Serialize, serde::Deserialize)
        )]
        pub enum Category {
            $($(#[$doc])* $variant,)*
        }

        impl Category {
            /// Every category, in declaration order.
            pub const ALL: &'static [Category] = &[$(Category::$variant,)*];

            /// Canonical kebab-case name, e.g. `"uppercase-letter"`.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Category::$variant => $name,)*
                }
            }

            /// Unicode general-category abbreviation (`"Lu"`, `"Pd"`, ...),
            /// if this category is one.
            pub fn abbreviation(&self) -> Option<&'static str> {
                match self {
                    $(Category::$variant => $abbr,)*
                }
            }

            pub(crate) fn definition(&self) -> Definition {
                match self {
                    $(Category::$variant => $def,)*
                }
            }
        }
    };
}

use Definition::{Pattern, Predicate};

categories! {
    /// `L`: any letter.
    Letter => "letter", Some("L"), Pattern(r"[\p{L}]");
    /// `Ll`: lowercase letter.
    LowercaseLetter => "lowercase-letter", Some("Ll"), Pattern(r"[\p{Ll}]");
    /// `Lu`: uppercase letter.
    UppercaseLetter => "uppercase-letter", Some("Lu"), Pattern(r"[\p{Lu}]");
    /// `Lt`: titlecase letter (`ǅ`).
    TitlecaseLetter => "titlecase-letter", Some("Lt"), Pattern(r"[\p{Lt}]");
    /// `LC`: letter with case (`Lu | Ll | Lt`).
    CasedLetter => "cased-letter", Some("LC"), Pattern(r"[\p{Lu}\p{Ll}\p{Lt}]");
    /// `Lm`: modifier letter.
    ModifierLetter => "modifier-letter", Some("Lm"), Pattern(r"[\p{Lm}]");
    /// `Lo`: letter without case (CJK, Hebrew, ...).
    OtherLetter => "other-letter", Some("Lo"), Pattern(r"[\p{Lo}]");

    /// `M`: any combining mark.
    Mark => "mark", Some("M"), Pattern(r"[\p{M}]");
    /// `Mn`: non-spacing mark.
    NonSpacingMark => "non-spacing-mark", Some("Mn"), Pattern(r"[\p{Mn}]");
    /// `Mc`: spacing combining mark.
    SpacingCombiningMark => "spacing-combining-mark", Some("Mc"), Pattern(r"[\p{Mc}]");
    /// `Me`: enclosing mark.
    EnclosingMark => "enclosing-mark", Some("Me"), Pattern(r"[\p{Me}]");

    /// `N`: any numeric character.
    Number => "number", Some("N"), Pattern(r"[\p{N}]");
    /// `Nd`: decimal digit in any script.
    DecimalDigitNumber => "decimal-digit-number", Some("Nd"), Pattern(r"[\p{Nd}]");
    /// `Nl`: letterlike number (`Ⅻ`).
    LetterNumber => "letter-number", Some("Nl"), Pattern(r"[\p{Nl}]");
    /// `No`: other number (`½`, `²`).
    OtherNumber => "other-number", Some("No"), Pattern(r"[\p{No}]");

    /// `P`: any punctuation.
    Punctuation => "punctuation", Some("P"), Pattern(r"[\p{P}]");
    /// `Pd`: dash.
    DashPunctuation => "dash-punctuation", Some("Pd"), Pattern(r"[\p{Pd}]");
    /// `Ps`: opening bracket.
    OpenPunctuation => "open-punctuation", Some("Ps"), Pattern(r"[\p{Ps}]");
    /// `Pe`: closing bracket.
    ClosePunctuation => "close-punctuation", Some("Pe"), Pattern(r"[\p{Pe}]");
    /// `Pi`: initial quote.
    InitialPunctuation => "initial-punctuation", Some("Pi"), Pattern(r"[\p{Pi}]");
    /// `Pf`: final quote.
    FinalPunctuation => "final-punctuation", Some("Pf"), Pattern(r"[\p{Pf}]");
    /// `Pc`: connector (`_`, `‿`).
    ConnectorPunctuation => "connector-punctuation", Some("Pc"), Pattern(r"[\p{Pc}]");
    /// `Po`: other punctuation.
    OtherPunctuation => "other-punctuation", Some("Po"), Pattern(r"[\p{Po}]");

    /// `S`: any symbol.
    Symbol => "symbol", Some("S"), Pattern(r"[\p{S}]");
    /// `Sm`: mathematical symbol.
    MathSymbol => "math-symbol", Some("Sm"), Pattern(r"[\p{Sm}]");
    /// `Sc`: currency sign.
    CurrencySymbol => "currency-symbol", Some("Sc"), Pattern(r"[\p{Sc}]");
    /// `Sk`: modifier symbol (`^`, `` ` ``).
    ModifierSymbol => "modifier-symbol", Some("Sk"), Pattern(r"[\p{Sk}]");
    /// `So`: other symbol.
    OtherSymbol => "other-symbol", Some("So"), Pattern(r"[\p{So}]");

    /// `Z`: any separator.
    Separator => "separator", Some("Z"), Pattern(r"[\p{Z}]");
    /// `Zs`: space separator.
    SpaceSeparator => "space-separator", Some("Zs"), Pattern(r"[\p{Zs}]");
    /// `Zl`: line separator (U+2028).
    LineSeparator => "line-separator", Some("Zl"), Pattern(r"[\p{Zl}]");
    /// `Zp`: paragraph separator (U+2029).
    ParagraphSeparator => "paragraph-separator", Some("Zp"), Pattern(r"[\p{Zp}]");

    /// `C`: control, format, private use and unassigned code points.
    Other => "other", Some("C"), Pattern(r"[\p{C}]");
    /// `Cc`: control character.
    Control => "control", Some("Cc"), Pattern(r"[\p{Cc}]");
    /// `Cf`: format character.
    Format => "format", Some("Cf"), Pattern(r"[\p{Cf}]");
    /// `Co`: private use.
    PrivateUse => "private-use", Some("Co"), Pattern(r"[\p{Co}]");

    /// Letters and numbers.
    Alnum => "alnum", None, Pattern(r"[\p{Alphabetic}\p{N}]");
    /// Horizontal whitespace: space separators and tab.
    Blank => "blank", None, Pattern(r"[\p{Zs}\t]");
    /// Control characters.
    Cntrl => "cntrl", None, Pattern(r"[\p{Cc}]");
    /// Decimal digits.
    Digit => "digit", None, Pattern(r"[\p{Nd}]");
    /// Visible characters: neither separator nor other.
    Graph => "graph", None, Pattern(r"[^\p{Z}\p{C}]");
    /// Visible characters and space separators.
    Print => "print", None, Pattern(r"[^\p{Zl}\p{Zp}\p{C}]");
    /// Unicode whitespace.
    Space => "space", None, Pattern(r"[\s]");
    /// Hexadecimal digits.
    Xdigit => "xdigit", None, Pattern(r"[0-9A-Fa-f]");

    /// Letters, numbers and whitespace.
    AlnumSpace => "alnum-space", None, Pattern(r"[\p{Alphabetic}\p{N}\s]");
    /// Letters carrying at least one diacritic (`é`, `Ş`).
    DiacriticalLetter => "diacritical-letter", None, Predicate(letters::is_diacritical_letter);
    /// Zero-width characters (ZWSP, ZWNJ, ZWJ, WJ, BOM).
    ZeroWidth => "zero-width", None, Pattern(r"[\x{200B}\x{200C}\x{200D}\x{2060}\x{FEFF}]");
    /// Vowels, accented or not.
    Vowel => "vowel", None, Predicate(letters::is_vowel);
    /// Consonants, accented or not.
    Consonant => "consonant", None, Predicate(letters::is_consonant);
    /// 7-bit ASCII.
    Ascii => "ascii", None, Pattern(r"[\x00-\x7F]");
    /// Word delimiters: every character that is not alphanumeric.
    Delimiter => "delimiter", None, Predicate(letters::is_delimiter);
}

impl Category {
    /// The complementary class: every character *not* in this category.
    ///
    /// ```rust
    /// use libtextkit::classify::{classify, Category};
    ///
    /// assert!(classify('7', Category::Letter.except()));
    /// assert!(!classify('x', Category::Letter.except()));
    /// ```
    #[inline]
    pub fn except(self) -> CharClass {
        CharClass {
            category: self,
            negated: true,
        }
    }

    /// Check whether this category is one of the Unicode general categories.
    pub fn is_general(&self) -> bool {
        self.abbreviation().is_some()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = ParseError;

    /// Parse a category from its name (case-insensitive, `_` and `-`
    /// interchangeable) or its exact general-category abbreviation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(category) = Category::ALL
            .iter()
            .find(|c| c.abbreviation() == Some(s))
        {
            return Ok(*category);
        }

        let normalized = s.trim().to_lowercase().replace('_', "-");
        Category::ALL
            .iter()
            .find(|c| c.name() == normalized)
            .copied()
            .ok_or_else(|| ParseError::UnknownCategory(s.to_string()))
    }
}

/// A category or its complement.
///
/// Every filter operation accepts `impl Into<CharClass>`, so plain
/// [`Category`] values can be passed directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct CharClass {
    category: Category,
    negated: bool,
}

impl CharClass {
    /// The class of characters belonging to `category`.
    #[inline]
    pub const fn of(category: Category) -> Self {
        CharClass {
            category,
            negated: false,
        }
    }

    /// The underlying category.
    #[inline]
    pub fn category(&self) -> Category {
        self.category
    }

    /// Check whether this is the complement of [`category`](Self::category).
    #[inline]
    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// The complementary class. `c.except().except() == c`.
    #[inline]
    pub fn except(self) -> CharClass {
        CharClass {
            category: self.category,
            negated: !self.negated,
        }
    }
}

impl From<Category> for CharClass {
    fn from(category: Category) -> Self {
        CharClass::of(category)
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            write!(f, "except-{}", self.category.name())
        } else {
            f.write_str(self.category.name())
        }
    }
}

impl FromStr for CharClass {
    type Err = ParseError;

    /// Parse a class; an `except-` (or `except_`) prefix selects the
    /// complement.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let lowered = trimmed.to_lowercase();
        let rest = lowered
            .strip_prefix("except-")
            .or_else(|| lowered.strip_prefix("except_"));

        match rest {
            Some(_) => {
                let name = trimmed.get("except-".len()..).unwrap_or_default();
                name.parse::<Category>()
                    .map(Category::except)
                    .map_err(|_| ParseError::UnknownCategory(s.to_string()))
            }
            None => trimmed.parse::<Category>().map(CharClass::of),
        }
    }
}
