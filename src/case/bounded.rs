//! Word-head casing with a bound on the number of words touched.
//!
//! A *word head* is a non-whitespace character at the start of the text or
//! right after whitespace. Only whitespace starts a word here: `"jean-luc"`
//! is a single word.
//!
//! Every operation takes a `limit`: the first `limit` word heads (all of them
//! for `None`) receive the head transformation, and everything else receives
//! the remainder transformation.
//!
//! | operation | first heads | everything else |
//! |---|---|---|
//! | [`capitalize`] | upper | lower |
//! | [`capitalize_starts`] | upper | untouched |
//! | [`uncapitalize_starts`] | lower | untouched |
//! | [`to_uppercase_except_starts`] | lower | upper |

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transform {
    Upper,
    Lower,
    Keep,
}

impl Transform {
    #[inline]
    fn apply(self, c: char, out: &mut String) {
        match self {
            Transform::Upper => out.extend(c.to_uppercase()),
            Transform::Lower => out.extend(c.to_lowercase()),
            Transform::Keep => out.push(c),
        }
    }
}

fn rewrite(text: &str, limit: Option<usize>, head: Transform, rest: Transform) -> String {
    let mut out = String::with_capacity(text.len());
    let mut remaining = limit.unwrap_or(usize::MAX);
    let mut after_space = true;

    for c in text.chars() {
        let is_space = c.is_whitespace();
        if !is_space && after_space && remaining > 0 {
            remaining -= 1;
            head.apply(c, &mut out);
        } else {
            rest.apply(c, &mut out);
        }
        after_space = is_space;
    }

    out
}

/// Uppercase the first `limit` word heads and lowercase everything else.
///
/// ```rust
/// use libtextkit::case::capitalize;
///
/// assert_eq!(capitalize("hELLO wORLD", None), "Hello World");
/// assert_eq!(capitalize("hELLO wORLD", Some(1)), "Hello world");
/// ```
pub fn capitalize(text: &str, limit: Option<usize>) -> String {
    rewrite(text, limit, Transform::Upper, Transform::Lower)
}

/// Uppercase the first word head and lowercase everything else.
pub fn capitalize_first(text: &str) -> String {
    capitalize(text, Some(1))
}

/// Uppercase the first `limit` word heads, leaving every other character as
/// it is.
pub fn capitalize_starts(text: &str, limit: Option<usize>) -> String {
    rewrite(text, limit, Transform::Upper, Transform::Keep)
}

/// Uppercase the first word head only.
pub fn capitalize_start(text: &str) -> String {
    capitalize_starts(text, Some(1))
}

/// Lowercase the first `limit` word heads, leaving every other character as
/// it is.
pub fn uncapitalize_starts(text: &str, limit: Option<usize>) -> String {
    rewrite(text, limit, Transform::Lower, Transform::Keep)
}

/// Lowercase the first word head only.
pub fn uncapitalize_start(text: &str) -> String {
    uncapitalize_starts(text, Some(1))
}

/// Lowercase the first `limit` word heads and uppercase everything else.
pub fn to_uppercase_except_starts(text: &str, limit: Option<usize>) -> String {
    rewrite(text, limit, Transform::Lower, Transform::Upper)
}

/// Lowercase the first word head and uppercase everything else.
pub fn to_uppercase_except_start(text: &str) -> String {
    to_uppercase_except_starts(text, Some(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_forces_remainder_lower() {
        assert_eq!(capitalize("the QUICK brown", Some(2)), "The Quick brown");
        assert_eq!(capitalize("the QUICK brown", None), "The Quick Brown");
        assert_eq!(capitalize("the QUICK brown", Some(0)), "the quick brown");
        assert_eq!(capitalize_first("mIXED cASE"), "Mixed case");
    }

    #[test]
    fn test_capitalize_starts_leaves_remainder() {
        assert_eq!(capitalize_starts("the qUICK brown", Some(2)), "The QUICK brown");
        assert_eq!(capitalize_starts("the qUICK brown", None), "The QUICK Brown");
        assert_eq!(capitalize_start("iPhone sales"), "IPhone sales");
    }

    #[test]
    fn test_uncapitalize_starts() {
        assert_eq!(uncapitalize_starts("Hello Big World", Some(2)), "hello big World");
        assert_eq!(uncapitalize_start("HELLO World"), "hELLO World");
    }

    #[test]
    fn test_to_uppercase_except_starts() {
        assert_eq!(to_uppercase_except_starts("hello big world", Some(2)), "hELLO bIG WORLD");
        assert_eq!(to_uppercase_except_start("Hello world"), "hELLO WORLD");
    }

    #[test]
    fn test_only_whitespace_starts_words() {
        assert_eq!(capitalize("jean-luc picard", None), "Jean-luc Picard");
        assert_eq!(capitalize_starts("a\tb\nc", None), "A\tB\nC");
    }

    #[test]
    fn test_leading_whitespace_and_runs() {
        assert_eq!(capitalize_starts("  two   spaces", None), "  Two   Spaces");
    }

    #[test]
    fn test_empty_and_blank() {
        assert_eq!(capitalize("", None), "");
        assert_eq!(capitalize_starts("   ", Some(3)), "   ");
    }

    #[test]
    fn test_non_letter_heads_count_toward_limit() {
        assert_eq!(capitalize_starts("1st place", Some(1)), "1st place");
        assert_eq!(capitalize_starts("1st place", Some(2)), "1st Place");
    }
}
