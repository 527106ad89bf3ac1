// File:    alphabet.rs
//
// Description: Normalization over the 25-letter Playfair alphabet (A-Z with J folded into I).
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! The effective Playfair alphabet.
//!
//! Playfair works over 25 letters: A-Z with I and J collapsed into a single
//! class represented by `I`. `J` never appears in a matrix, in prepared
//! text, or in cipher output.

/// Folds `J` into `I`; every other character is returned unchanged.
#[must_use]
pub const fn fold(letter: char) -> char {
    if letter == 'J' { 'I' } else { letter }
}

/// Normalizes raw input into the effective alphabet.
///
/// Uppercases the input, discards every character outside A-Z, and folds
/// `J` into `I`. Total over all strings; an input with no usable letters
/// normalizes to the empty string.
#[must_use]
pub fn normalize(input: &str) -> String {
    input
        .chars()
        .flat_map(char::to_uppercase)
        .filter(char::is_ascii_uppercase)
        .map(fold)
        .collect()
}
