// File:    lib.rs
//
// Description: The main library crate for playfair-core, providing key matrix construction and digraph substitution.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! # Playfair Core Library
//!
//! This library implements the classical Playfair cipher: derivation of a
//! 5x5 key matrix from a secret key, and digraph-based encryption and
//! decryption of text against that matrix.
//!
//! The Playfair cipher is a historical, pedagogical cipher. It offers no
//! security against modern cryptanalysis and must not be used to protect
//! real data.

/// The 25-letter effective alphabet (A-Z with J folded into I).
pub mod alphabet;
/// Digraph preparation, encryption, and decryption.
pub mod cipher;
/// Error types for matrix lookups.
pub mod error;
/// The 5x5 key matrix and positions within it.
pub mod matrix;
