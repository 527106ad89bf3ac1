//! Error types for the Playfair core library.

use thiserror::Error;

/// A letter could not be located in a key matrix.
///
/// A built [`KeyMatrix`](crate::matrix::KeyMatrix) is a full permutation of
/// the 25-letter alphabet, and every letter handed to a lookup has already
/// been normalized into that alphabet, so this error is unreachable under
/// valid preconditions. Seeing it means the matrix was corrupted (for
/// example deserialized from bad data), not that the user input was wrong.
/// It is propagated to the caller rather than recovered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("letter '{letter}' not found in key matrix")]
pub struct LookupError {
    /// The letter that was searched for, after J-folding.
    pub letter: char,
}
