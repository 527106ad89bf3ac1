// File:    cipher.rs
//
// Description: Digraph preparation and the Playfair substitution rules for encryption and decryption.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Digraph substitution over a key matrix.
//!
//! Encryption prepares the plaintext into digraphs and shifts each pair
//! right/down/rectangle-wise through the matrix; decryption applies the
//! inverse shifts. Filler letters inserted by preparation are not removed
//! on decryption; the classical algorithm is lossy in that respect.

use log::debug;

use crate::alphabet;
use crate::error::LookupError;
use crate::matrix::{KeyMatrix, MATRIX_SIZE, Position};

/// Filler inserted between the two letters of a repeated pair.
pub const BREAK_FILLER: char = 'X';
/// Filler appended when the prepared text would otherwise end in a lone letter.
pub const PAD_FILLER: char = 'Z';

/// Separator placed between consecutive ciphertext pairs by [`encrypt`].
const PAIR_SEPARATOR: char = ' ';

/// The direction a digraph is shifted through the matrix.
#[derive(Debug, Clone, Copy)]
enum Shift {
    /// Right / down: encryption.
    Forward,
    /// Left / up: decryption.
    Backward,
}

impl Shift {
    /// The offset added to a row or column index before wrapping modulo 5.
    const fn offset(self) -> usize {
        match self {
            Self::Forward => 1,
            Self::Backward => MATRIX_SIZE - 1,
        }
    }
}

/// Splits plaintext into valid Playfair digraphs.
///
/// The input is normalized (uppercased, stripped of non-letters, J folded
/// into I), then scanned left to right: when the next letter repeats the
/// current one, the pair is broken with [`BREAK_FILLER`] and the repeated
/// letter starts the following pair. A lone final letter is completed with
/// a trailing [`PAD_FILLER`]. The result always has even length and no
/// pair holds two identical letters.
#[must_use]
pub fn prepare(plaintext: &str) -> String {
    let letters: Vec<char> = alphabet::normalize(plaintext).chars().collect();
    let mut prepared = String::with_capacity(letters.len() + letters.len() / 2 + 1);

    let mut cursor = 0;
    while cursor < letters.len() {
        let current = letters[cursor];
        prepared.push(current);
        match letters.get(cursor + 1) {
            // Repeated letter: break the pair and revisit the repeat.
            Some(&next) if next == current => {
                prepared.push(BREAK_FILLER);
                cursor += 1;
            }
            Some(&next) => {
                prepared.push(next);
                cursor += 2;
            }
            None => {
                cursor += 1;
            }
        }
    }
    if prepared.len() % 2 != 0 {
        prepared.push(PAD_FILLER);
    }

    debug!(
        "prepared {} input letters into {} digraph letters",
        letters.len(),
        prepared.len()
    );
    prepared
}

/// Encrypts plaintext against a key matrix.
///
/// The plaintext is run through [`prepare`], each digraph is substituted
/// (same row: one column right with wrap; same column: one row down with
/// wrap; otherwise the rectangle rule), and the resulting pairs are joined
/// with a single space, with no trailing separator.
///
/// # Errors
///
/// Returns a [`LookupError`] if a letter cannot be located in the matrix,
/// which only happens with a matrix that is not a full permutation of the
/// effective alphabet.
pub fn encrypt(plaintext: &str, matrix: &KeyMatrix) -> Result<String, LookupError> {
    let prepared: Vec<char> = prepare(plaintext).chars().collect();
    let mut ciphertext = String::with_capacity(prepared.len() + prepared.len() / 2);

    for (index, pair) in prepared.chunks_exact(2).enumerate() {
        let (first, second) = substitute(matrix, pair[0], pair[1], Shift::Forward)?;
        if index > 0 {
            ciphertext.push(PAIR_SEPARATOR);
        }
        ciphertext.push(first);
        ciphertext.push(second);
    }
    Ok(ciphertext)
}

/// Decrypts ciphertext against a key matrix.
///
/// The ciphertext is normalized first, which drops the pair separators
/// [`encrypt`] inserts. The input must already be digraph-aligned: this
/// function never inserts fillers, and fillers present from the original
/// encryption are left in the output. Pairs are concatenated directly with
/// no separators.
///
/// # Errors
///
/// Returns a [`LookupError`] if a letter cannot be located in the matrix;
/// unreachable for a matrix built from a key.
///
/// # Panics
///
/// Panics if the normalized ciphertext contains an odd number of letters.
/// Passing digraph-aligned ciphertext is the caller's responsibility.
pub fn decrypt(ciphertext: &str, matrix: &KeyMatrix) -> Result<String, LookupError> {
    let letters: Vec<char> = alphabet::normalize(ciphertext).chars().collect();
    assert!(
        letters.len() % 2 == 0,
        "Ciphertext must contain an even number of letters."
    );

    let mut plaintext = String::with_capacity(letters.len());
    for pair in letters.chunks_exact(2) {
        let (first, second) = substitute(matrix, pair[0], pair[1], Shift::Backward)?;
        plaintext.push(first);
        plaintext.push(second);
    }
    Ok(plaintext)
}

/// Applies the Playfair rules to one digraph in the given direction.
fn substitute(
    matrix: &KeyMatrix,
    first: char,
    second: char,
    shift: Shift,
) -> Result<(char, char), LookupError> {
    let a = matrix.position_of(first)?;
    let b = matrix.position_of(second)?;
    let offset = shift.offset();

    let (a, b) = if a.row == b.row {
        (
            Position {
                row: a.row,
                col: (a.col + offset) % MATRIX_SIZE,
            },
            Position {
                row: b.row,
                col: (b.col + offset) % MATRIX_SIZE,
            },
        )
    } else if a.col == b.col {
        (
            Position {
                row: (a.row + offset) % MATRIX_SIZE,
                col: a.col,
            },
            Position {
                row: (b.row + offset) % MATRIX_SIZE,
                col: b.col,
            },
        )
    } else {
        // Rectangle rule: keep each letter's row, take the other's column.
        // Self-inverse, so encryption and decryption share it.
        (
            Position {
                row: a.row,
                col: b.col,
            },
            Position {
                row: b.row,
                col: a.col,
            },
        )
    };
    Ok((matrix.letter_at(a), matrix.letter_at(b)))
}
