//! Named keep/remove/count wrappers, one triple per [`Category`].
//!
//! `keep_digit(s)` is shorthand for `keep(s, Category::Digit)`, and so on for
//! every category.

use crate::classify::Category;
use crate::filter::{count, keep, remove};

macro_rules! named_filters {
    ($($variant:ident => $keep:ident, $remove:ident, $count:ident;)*) => {
        $(
            #[doc = concat!("Keep only the `", stringify!($variant), "` characters of `text`.")]
            #[inline]
            pub fn $keep(text: &str) -> String {
                keep(text, Category::$variant)
            }

            #[doc = concat!("Remove every `", stringify!($variant), "` character from `text`.")]
            #[inline]
            pub fn $remove(text: &str) -> String {
                remove(text, Category::$variant)
            }

            #[doc = concat!("Count the `", stringify!($variant), "` characters of `text`.")]
            #[inline]
            pub fn $count(text: &str) -> usize {
                count(text, Category::$variant)
            }
        )*
    };
}

named_filters! {
    Letter => keep_letter, remove_letter, count_letter;
    LowercaseLetter => keep_lowercase_letter, remove_lowercase_letter, count_lowercase_letter;
    UppercaseLetter => keep_uppercase_letter, remove_uppercase_letter, count_uppercase_letter;
    TitlecaseLetter => keep_titlecase_letter, remove_titlecase_letter, count_titlecase_letter;
    CasedLetter => keep_cased_letter, remove_cased_letter, count_cased_letter;
    ModifierLetter => keep_modifier_letter, remove_modifier_letter, count_modifier_letter;
    OtherLetter => keep_other_letter, remove_other_letter, count_other_letter;
    Mark => keep_mark, remove_mark, count_mark;
    NonSpacingMark => keep_non_spacing_mark, remove_non_spacing_mark, count_non_spacing_mark;
    SpacingCombiningMark => keep_spacing_combining_mark, remove_spacing_combining_mark, count_spacing_combining_mark;
    EnclosingMark => keep_enclosing_mark, remove_enclosing_mark, count_enclosing_mark;
    Number => keep_number, remove_number, count_number;
    DecimalDigitNumber => keep_decimal_digit_number, remove_decimal_digit_number, count_decimal_digit_number;
    LetterNumber => keep_letter_number, remove_letter_number, count_letter_number;
    OtherNumber => keep_other_number, remove_other_number, count_other_number;
    Punctuation => keep_punctuation, remove_punctuation, count_punctuation;
    DashPunctuation => keep_dash_punctuation, remove_dash_punctuation, count_dash_punctuation;
    OpenPunctuation => keep_open_punctuation, remove_open_punctuation, count_open_punctuation;
    ClosePunctuation => keep_close_punctuation, remove_close_punctuation, count_close_punctuation;
    InitialPunctuation => keep_initial_punctuation, remove_initial_punctuation, count_initial_punctuation;
    FinalPunctuation => keep_final_punctuation, remove_final_punctuation, count_final_punctuation;
    ConnectorPunctuation => keep_connector_punctuation, remove_connector_punctuation, count_connector_punctuation;
    OtherPunctuation => keep_other_punctuation, remove_other_punctuation, count_other_punctuation;
    Symbol => keep_symbol, remove_symbol, count_symbol;
    MathSymbol => keep_math_symbol, remove_math_symbol, count_math_symbol;
    CurrencySymbol => keep_currency_symbol, remove_currency_symbol, count_currency_symbol;
    ModifierSymbol => keep_modifier_symbol, remove_modifier_symbol, count_modifier_symbol;
    OtherSymbol => keep_other_symbol, remove_other_symbol, count_other_symbol;
    Separator => keep_separator, remove_separator, count_separator;
    SpaceSeparator => keep_space_separator, remove_space_separator, count_space_separator;
    LineSeparator => keep_line_separator, remove_line_separator, count_line_separator;
    ParagraphSeparator => keep_paragraph_separator, remove_paragraph_separator, count_paragraph_separator;
    Other => keep_other, remove_other, count_other;
    Control => keep_control, remove_control, count_control;
    Format => keep_format, remove_format, count_format;
    PrivateUse => keep_private_use, remove_private_use, count_private_use;
    Alnum => keep_alnum, remove_alnum, count_alnum;
    Blank => keep_blank, remove_blank, count_blank;
    Cntrl => keep_cntrl, remove_cntrl, count_cntrl;
    Digit => keep_digit, remove_digit, count_digit;
    Graph => keep_graph, remove_graph, count_graph;
    Print => keep_print, remove_print, count_print;
    Space => keep_space, remove_space, count_space;
    Xdigit => keep_xdigit, remove_xdigit, count_xdigit;
    AlnumSpace => keep_alnum_space, remove_alnum_space, count_alnum_space;
    DiacriticalLetter => keep_diacritical_letter, remove_diacritical_letter, count_diacritical_letter;
    ZeroWidth => keep_zero_width, remove_zero_width, count_zero_width;
    Vowel => keep_vowel, remove_vowel, count_vowel;
    Consonant => keep_consonant, remove_consonant, count_consonant;
    Ascii => keep_ascii, remove_ascii, count_ascii;
    Delimiter => keep_delimiter, remove_delimiter, count_delimiter;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alnum_wrappers() {
        assert_eq!(keep_alnum("user_42@example.com"), "user42examplecom");
        assert_eq!(remove_alnum("user_42@example.com"), "_@.");
        assert_eq!(count_alnum("user_42@example.com"), 16);
    }

    #[test]
    fn test_punctuation_wrappers() {
        assert_eq!(keep_dash_punctuation("a-b–c—d"), "-–—");
        assert_eq!(remove_open_punctuation("f(x) = [y]"), "fx) = y]");
        assert_eq!(count_currency_symbol("$5 + €3 + ¥2"), 3);
    }

    #[test]
    fn test_whitespace_wrappers() {
        assert_eq!(remove_space(" a\tb\nc "), "abc");
        assert_eq!(keep_blank("a\tb c\n"), "\t ");
        assert_eq!(keep_alnum_space("Hi, you!"), "Hi you");
    }

    #[test]
    fn test_letter_wrappers() {
        assert_eq!(keep_uppercase_letter("McDonald"), "MD");
        assert_eq!(keep_diacritical_letter("São Paulo, Zürich"), "ãü");
        assert_eq!(count_vowel("Queueing"), 5);
        assert_eq!(count_consonant("Queueing"), 3);
    }

    #[test]
    fn test_misc_wrappers() {
        assert_eq!(keep_xdigit("0xDEADbeefZ"), "0DEADbeef");
        assert_eq!(remove_ascii("naïve café"), "ïé");
        assert_eq!(remove_cntrl("a\u{0007}b"), "ab");
        assert_eq!(keep_delimiter("snake_case-name"), "_-");
    }
}
