//! Character-order and random-case transformations.
//!
//! Randomized operations take an optional seed. With a seed the output is
//! fully deterministic; without one a fresh thread-local generator is used.
//! The `*_with` variants accept any [`Rng`].

use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};
use smallvec::SmallVec;

/// Shuffle the characters of `text`.
///
/// ```rust
/// use libtextkit::transform::shuffle;
///
/// let once = shuffle("abcde", Some(42));
/// assert_eq!(once, shuffle("abcde", Some(42)));
/// assert_eq!(once.len(), 5);
/// ```
pub fn shuffle(text: &str, seed: Option<u64>) -> String {
    match seed {
        Some(seed) => shuffle_with(text, &mut StdRng::seed_from_u64(seed)),
        None => shuffle_with(text, &mut thread_rng()),
    }
}

/// Shuffle the characters of `text` with Fisher-Yates, drawing from `rng`.
///
/// Walks from the last index down to 1 and swaps each position with a
/// uniformly chosen index in `0..=i`.
pub fn shuffle_with<R: Rng + ?Sized>(text: &str, rng: &mut R) -> String {
    let mut chars: SmallVec<[char; 64]> = text.chars().collect();
    for i in (1..chars.len()).rev() {
        let j = rng.gen_range(0..=i);
        chars.swap(i, j);
    }
    chars.into_iter().collect()
}

/// Flip a fair coin for every letter of `text` to pick its case.
///
/// Non-letters are left untouched.
pub fn random_case(text: &str, seed: Option<u64>) -> String {
    match seed {
        Some(seed) => random_case_with(text, &mut StdRng::seed_from_u64(seed)),
        None => random_case_with(text, &mut thread_rng()),
    }
}

/// [`random_case`] drawing from `rng`.
pub fn random_case_with<R: Rng + ?Sized>(text: &str, rng: &mut R) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if !c.is_alphabetic() {
            out.push(c);
        } else if rng.gen_bool(0.5) {
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

/// Reverse the order of the characters of `text`.
pub fn reverse(text: &str) -> String {
    text.chars().rev().collect()
}
