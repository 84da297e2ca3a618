//! Character classification.
//!
//! [`classify`] is the single entry point deciding whether a character
//! belongs to a [`CharClass`]. It is total: every `char` is either in a class
//! or in its complement, and the absent character (`None`) belongs to no
//! class at all.
//!
//! # Example
//!
//! ```rust
//! use libtextkit::classify::{classify, Category};
//!
//! assert!(classify('é', Category::Vowel));
//! assert!(classify('é', Category::DiacriticalLetter));
//! assert!(classify('-', Category::DashPunctuation));
//! assert!(!classify(None::<char>, Category::Letter));
//! assert!(!classify(None::<char>, Category::Letter.except()));
//! ```

pub mod category;
pub mod letters;
pub(crate) mod matcher;

pub use category::{Category, CharClass};
pub use letters::{
    is_accented, is_accented_consonant, is_accented_vowel, is_ascii, is_consonant, is_delimiter,
    is_diacritical_letter, is_letter, is_non_cluster_consonant, is_vowel, is_zero_width,
};

/// Check whether `c` belongs to `class`.
///
/// `c` may be a `char` or an `Option<char>`; `None` classifies as `false` for
/// every class, complements included.
#[inline]
pub fn classify<C, K>(c: C, class: K) -> bool
where
    C: Into<Option<char>>,
    K: Into<CharClass>,
{
    let Some(c) = c.into() else {
        return false;
    };
    let class = class.into();
    matcher::matcher(class.category()).matches(c) != class.is_negated()
}

/// List every category `c` belongs to, in [`Category::ALL`] order.
pub fn categories_of(c: char) -> Vec<Category> {
    Category::ALL
        .iter()
        .copied()
        .filter(|&category| classify(c, category))
        .collect()
}
