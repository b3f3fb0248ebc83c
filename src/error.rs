//! # Error Types
//!
//! The transposition core has exactly one hard failure: text that cannot
//! denote a pitch. Everything else ("this token is not a chord") is an
//! ordinary `Option::None` and never surfaces here.
//!
//! ## Usage
//! ```rust
//! use chordshift::{note_to_semitone, TransposeError};
//!
//! match note_to_semitone("H") {
//!     Ok(pitch) => println!("pitch class {}", pitch),
//!     Err(TransposeError::InvalidNoteName(name)) => {
//!         eprintln!("'{}' is not a note name", name);
//!     }
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransposeError {
    /// The text does not name any of the 21 accepted note spellings.
    ///
    /// Usually means a corrupted or hand-typed key field at the caller's boundary.
    ///
    /// # Example
    /// ```
    /// # use chordshift::TransposeError;
    /// let err = TransposeError::InvalidNoteName("H".to_string());
    /// assert_eq!(err.to_string(), "Invalid note name: 'H'");
    /// ```
    #[error("Invalid note name: '{0}'")]
    InvalidNoteName(String),
}
