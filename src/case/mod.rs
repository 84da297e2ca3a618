//! Case-style conversion and word-head casing.
//!
//! [`convert_case`] turns arbitrary text into an identifier in one of the
//! eleven [`CaseStyle`]s. The conversion is lossy: every non-alphanumeric
//! character is a delimiter, and delimiters only survive as the style's
//! separator between words.
//!
//! # Example
//!
//! ```rust
//! use libtextkit::case::{convert_case, CaseStyle};
//!
//! assert_eq!(convert_case("hello world", CaseStyle::Camel), "helloWorld");
//! assert_eq!(convert_case("hello world", CaseStyle::Snake), "hello_world");
//! assert_eq!(convert_case("hello-world foo", CaseStyle::Pascal), "HelloWorldFoo");
//! assert_eq!(convert_case("user id #2", CaseStyle::Cobol), "USER-ID2");
//! ```
//!
//! The [`bounded`] operations work on whitespace-separated word heads and
//! keep every other character of the input.

pub mod bounded;
mod converter;
mod style;

pub use bounded::{
    capitalize, capitalize_first, capitalize_start, capitalize_starts, to_uppercase_except_start,
    to_uppercase_except_starts, uncapitalize_start, uncapitalize_starts,
};
pub use converter::CaseConverter;
pub use style::CaseStyle;

use tracing::debug;

/// Convert `text` to `style`.
pub fn convert_case(text: &str, style: CaseStyle) -> String {
    let mut converter = CaseConverter::with_capacity(style, text.len());
    converter.push_str(text);
    converter.finish()
}

/// Convert `text` to the style called `name` (see [`CaseStyle`]'s
/// `FromStr`).
///
/// An unknown style name leaves the input unchanged.
pub fn convert_case_named(text: &str, name: &str) -> String {
    match name.parse::<CaseStyle>() {
        Ok(style) => convert_case(text, style),
        Err(err) => {
            debug!(%err, "unknown case style, input left unchanged");
            text.to_string()
        }
    }
}

/// `HelloWorld`
pub fn to_pascal_case(text: &str) -> String {
    convert_case(text, CaseStyle::Pascal)
}

/// `helloWorld`
pub fn to_camel_case(text: &str) -> String {
    convert_case(text, CaseStyle::Camel)
}

/// `hello_world`
pub fn to_snake_case(text: &str) -> String {
    convert_case(text, CaseStyle::Snake)
}

/// `hello-world`
pub fn to_kebab_case(text: &str) -> String {
    convert_case(text, CaseStyle::Kebab)
}

/// `helloworld`
pub fn to_flat_case(text: &str) -> String {
    convert_case(text, CaseStyle::Flat)
}

/// `HELLOWORLD`
pub fn to_upper_flat_case(text: &str) -> String {
    convert_case(text, CaseStyle::UpperFlat)
}

/// `Hello_World`
pub fn to_pascal_snake_case(text: &str) -> String {
    convert_case(text, CaseStyle::PascalSnake)
}

/// `hello_World`
pub fn to_camel_snake_case(text: &str) -> String {
    convert_case(text, CaseStyle::CamelSnake)
}

/// `HELLO_WORLD`
pub fn to_screaming_snake_case(text: &str) -> String {
    convert_case(text, CaseStyle::ScreamingSnake)
}

/// `Hello-World`
pub fn to_train_case(text: &str) -> String {
    convert_case(text, CaseStyle::Train)
}

/// `HELLO-WORLD`
pub fn to_cobol_case(text: &str) -> String {
    convert_case(text, CaseStyle::Cobol)
}
