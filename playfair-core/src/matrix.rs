// File:    matrix.rs
//
// Description: Construction of the 5x5 Playfair key matrix and position lookups within it.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::alphabet;
use crate::error::LookupError;

/// The side length of the key matrix.
pub const MATRIX_SIZE: usize = 5;

/// A (row, column) coordinate into a [`KeyMatrix`], each in `[0, 5)`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// The row index.
    pub row: usize,
    /// The column index.
    pub col: usize,
}

/// A 5x5 grid holding each letter of the effective alphabet exactly once.
///
/// The matrix is a permutation of the 25 letters A-Z minus J. It is built
/// once per secret key and is immutable afterwards; cipher operations
/// borrow it read-only, so a matrix can be shared freely across calls.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct KeyMatrix {
    cells: [[char; MATRIX_SIZE]; MATRIX_SIZE],
}

impl KeyMatrix {
    /// Derives the key matrix from a secret key.
    ///
    /// The key is normalized (uppercased, stripped of non-letters, J folded
    /// into I), then its letters are placed in row-major order, first
    /// occurrence only. The remaining cells are filled with the unused
    /// letters of the alphabet in order. Every input produces a complete
    /// matrix; an empty or letter-free key yields the plain alphabet grid.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        let mut cells = [[' '; MATRIX_SIZE]; MATRIX_SIZE];
        let mut used = [false; 26];
        // J collapses into I and never gets a cell of its own.
        used[letter_index('J')] = true;

        let key = alphabet::normalize(key);
        let mut next = 0;
        for letter in key.chars().chain('A'..='Z') {
            let letter = alphabet::fold(letter);
            if !used[letter_index(letter)] {
                used[letter_index(letter)] = true;
                cells[next / MATRIX_SIZE][next % MATRIX_SIZE] = letter;
                next += 1;
                if next == MATRIX_SIZE * MATRIX_SIZE {
                    break;
                }
            }
        }

        Self { cells }
    }

    /// Looks up the position of a letter, folding J into I first.
    ///
    /// # Errors
    ///
    /// Returns a [`LookupError`] if the letter is absent from the matrix.
    /// For any matrix built by [`Self::from_key`] and any letter of the
    /// effective alphabet this cannot happen; an error here signals a
    /// corrupted matrix.
    pub fn position_of(&self, letter: char) -> Result<Position, LookupError> {
        let letter = alphabet::fold(letter);
        for (row, line) in self.cells.iter().enumerate() {
            for (col, &cell) in line.iter().enumerate() {
                if cell == letter {
                    return Ok(Position { row, col });
                }
            }
        }
        Err(LookupError { letter })
    }

    /// Returns the letter stored at a position.
    #[must_use]
    pub const fn letter_at(&self, position: Position) -> char {
        self.cells[position.row][position.col]
    }
}

impl fmt::Display for KeyMatrix {
    /// Renders the matrix as 5 lines of 5 space-separated letters.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, line) in self.cells.iter().enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for (col, cell) in line.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}

fn letter_index(letter: char) -> usize {
    (letter as u8 - b'A') as usize
}
