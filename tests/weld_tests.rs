//! TextWelder behaviour at the fragment boundary.

use libtextkit::weld::weld;

#[test]
fn test_reference_cases() {
    assert_eq!(weld("go", "owl"), "gowl");
    assert_eq!(weld("red", "blue"), "reblue");
    assert_eq!(weld("blue", "red"), "bluered");
}

#[test]
fn test_empty_operand_yields_empty() {
    // Not the non-empty operand
    assert_eq!(weld("prefix", ""), "");
    assert_eq!(weld("", "suffix"), "");
}

#[test]
fn test_accented_boundaries() {
    // é and a are both vowels once stripped
    assert_eq!(weld("soirée", "après"), "soiréeprès");
    // ñ and d are both consonants
    assert_eq!(weld("piñ", "data"), "pidata");
    // é vs ç: vowel against consonant
    assert_eq!(weld("né", "ça"), "néça");
}

#[test]
fn test_chaining() {
    let word = weld(&weld("sun", "nflower"), "rs");
    assert_eq!(word, "sunflowers");
}
