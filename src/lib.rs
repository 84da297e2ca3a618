//! # libtextkit
//!
//! Unicode-aware text classification and transformation.
//!
//! The crate is organised leaves first:
//!
//! - [`classify`]: total predicates mapping a character to categories
//!   (Unicode general categories, POSIX-like composites, vowels, consonants,
//!   diacritical letters, zero-width characters, ...)
//! - [`filter`]: keep/remove/count over strings, parameterized by category
//! - [`case`]: conversion of free text to identifier case styles, and
//!   word-head capitalization with a bound on the words touched
//! - [`mask`]: positional masking of sensitive substrings
//! - [`weld`]: joining of word fragments with phonetic elision
//! - [`transform`]: seeded shuffle, random case and reversal
//!
//! Every operation is a pure function of its input. The only shared state is
//! the registry of compiled category matchers, built on first use and
//! read-only afterwards.
//!
//! ## Example
//!
//! ```rust
//! use libtextkit::prelude::*;
//!
//! assert_eq!(keep("Ph0ne: +1 (555) 010-9999", Category::Digit), "015550109999");
//! assert_eq!(convert_case("hello world", CaseStyle::Camel), "helloWorld");
//! assert_eq!(mask_middle("1234567890"), "12******90");
//! assert_eq!(weld("go", "owl"), "gowl");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod case;
pub mod classify;
pub mod error;
pub mod filter;
pub mod mask;
pub mod normalize;
pub mod separator;
pub mod transform;
pub mod weld;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::case::{
        capitalize, capitalize_first, capitalize_start, capitalize_starts, convert_case,
        convert_case_named, to_uppercase_except_start, to_uppercase_except_starts,
        uncapitalize_start, uncapitalize_starts, CaseConverter, CaseStyle,
    };
    pub use crate::classify::{classify, Category, CharClass};
    pub use crate::error::{MaskError, ParseError};
    pub use crate::filter::{count, keep, remove};
    pub use crate::mask::{
        mask, mask_end, mask_end_count, mask_middle, mask_middle_count, mask_range, mask_start,
        mask_start_count, MaskRegion, Masker,
    };
    pub use crate::normalize::strip_diacritics;
    pub use crate::separator::Separator;
    pub use crate::transform::{random_case, reverse, shuffle};
    pub use crate::weld::weld;
}
