//! # chordshift
//!
//! Chord chart transposition and capo advice for ChordPro-style song texts.
//!
//! ## Components (leaf first)
//! - [`pitch`] - semitone arithmetic and the sharp/flat spelling tables
//! - [`key`] - sharp/flat key classification and key-name normalization
//! - [`chord`] - chord symbol parsing, chord vs. free-text classification
//! - [`transpose`] - moving chords and keys by an interval
//! - [`chordpro`] - transposing whole charts line by line
//! - [`capo`] - capo position suggestions for hard guitar keys
//!
//! Every operation is a pure function over its arguments, so all of them are
//! safe to call from any thread without synchronization.
//!
//! ## Example
//! ```rust
//! use chordshift::transpose_chordpro;
//!
//! let out = transpose_chordpro("[G] [D/F#] [Em] [C]", Some("G"), "A")?;
//! assert_eq!(out, "[A] [E/G#] [F#m] [D]");
//! # Ok::<(), chordshift::TransposeError>(())
//! ```

pub mod capo;
pub mod chord;
pub mod chordpro;
pub mod error;
pub mod key;
pub mod pitch;
pub mod transpose;

pub use capo::{is_difficult_key, suggest_capo, CapoSuggestion, EASY_KEYS};
pub use chord::{is_chord, parse_chord, Chord, ChordNote};
pub use chordpro::{classify_line, extract_chords, transpose_chordpro, LineKind};
pub use error::*;
pub use key::{normalize_key, uses_sharps, Spelling, FLAT_KEYS, SHARP_KEYS};
pub use pitch::{calculate_interval, note_to_semitone, semitone_to_note, Pitch, FLAT_NAMES, SHARP_NAMES};
pub use transpose::{transpose_chord, transpose_key, transpose_parsed};
