//! # Pitch Model
//!
//! Semitone arithmetic and the two canonical note-spelling tables.
//!
//! A pitch is a semitone class in `0..12` with `0 = C`. All arithmetic wraps
//! modulo 12, so negative offsets land on the positive residue.
//!
//! ## Spellings
//! - Output always uses one of the 12 sharp names or 12 flat names below.
//! - Input additionally accepts the enharmonic outliers `B#`, `E#`, `Cb`, `Fb`
//!   and the unicode accidentals `♯`/`♭`. These are normalized to a pitch and
//!   never produced again.
//!
//! ## Example
//! ```rust
//! use chordshift::{calculate_interval, note_to_semitone, semitone_to_note};
//!
//! assert_eq!(note_to_semitone("Db")?, 1);
//! assert_eq!(semitone_to_note(-1, true), "B");
//! assert_eq!(calculate_interval("G", "C")?, 5); // up a fourth, never -7
//! # Ok::<(), chordshift::TransposeError>(())
//! ```

use std::borrow::Cow;

use crate::TransposeError;

/// Semitone class, always in `0..12` once it leaves this module.
pub type Pitch = u8;

/// Canonical sharp spellings, indexed by pitch.
pub const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Canonical flat spellings, indexed by pitch.
pub const FLAT_NAMES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Every spelling accepted on input.
const NOTE_TABLE: [(&str, Pitch); 21] = [
    // Naturals
    ("C", 0),
    ("D", 2),
    ("E", 4),
    ("F", 5),
    ("G", 7),
    ("A", 9),
    ("B", 11),
    // Sharps
    ("C#", 1),
    ("D#", 3),
    ("F#", 6),
    ("G#", 8),
    ("A#", 10),
    // Flats
    ("Db", 1),
    ("Eb", 3),
    ("Gb", 6),
    ("Ab", 8),
    ("Bb", 10),
    // Enharmonic outliers
    ("B#", 0),
    ("E#", 5),
    ("Cb", 11),
    ("Fb", 4),
];

/// Replace `♯`/`♭` with their ASCII forms, borrowing when there is nothing to do.
pub(crate) fn ascii_accidentals(text: &str) -> Cow<'_, str> {
    if text.contains(['♯', '♭']) {
        Cow::Owned(text.replace('♯', "#").replace('♭', "b"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Look up the pitch class of a note name (case-insensitive).
///
/// # Errors
/// [`TransposeError::InvalidNoteName`] for anything outside the 21 accepted
/// spellings, including the empty string.
pub fn note_to_semitone(name: &str) -> Result<Pitch, TransposeError> {
    let normalized = ascii_accidentals(name);
    NOTE_TABLE
        .iter()
        .find(|(spelling, _)| spelling.eq_ignore_ascii_case(&normalized))
        .map(|&(_, pitch)| pitch)
        .ok_or_else(|| TransposeError::InvalidNoteName(name.to_string()))
}

/// Spell a pitch using the sharp or flat table. Any integer is accepted and
/// reduced modulo 12 first.
pub fn semitone_to_note(pitch: i32, prefer_sharps: bool) -> &'static str {
    let index = pitch.rem_euclid(12) as usize;
    if prefer_sharps {
        SHARP_NAMES[index]
    } else {
        FLAT_NAMES[index]
    }
}

/// Ascending distance in semitones from `from_key` to `to_key`, in `0..12`.
pub fn calculate_interval(from_key: &str, to_key: &str) -> Result<u8, TransposeError> {
    let from = note_to_semitone(from_key)? as i32;
    let to = note_to_semitone(to_key)? as i32;
    Ok((to - from).rem_euclid(12) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_all_pitches() {
        for pitch in 0..12u8 {
            for prefer_sharps in [true, false] {
                let name = semitone_to_note(pitch as i32, prefer_sharps);
                assert_eq!(note_to_semitone(name).unwrap(), pitch, "{}", name);
            }
        }
    }

    #[test]
    fn test_wrap_around() {
        assert_eq!(semitone_to_note(-1, true), "B");
        assert_eq!(semitone_to_note(12, true), "C");
        assert_eq!(semitone_to_note(-12, true), semitone_to_note(0, true));
        assert_eq!(semitone_to_note(-13, false), "B");
        assert_eq!(semitone_to_note(25, false), "Db");
    }

    #[test]
    fn test_enharmonic_pairs() {
        for (sharp, flat) in [
            ("C#", "Db"),
            ("D#", "Eb"),
            ("F#", "Gb"),
            ("G#", "Ab"),
            ("A#", "Bb"),
        ] {
            assert_eq!(note_to_semitone(sharp), note_to_semitone(flat));
        }
        // Outliers resolve onto naturals
        assert_eq!(note_to_semitone("E#").unwrap(), note_to_semitone("F").unwrap());
        assert_eq!(note_to_semitone("B#").unwrap(), 0);
        assert_eq!(note_to_semitone("Cb").unwrap(), 11);
        assert_eq!(note_to_semitone("Fb").unwrap(), 4);
    }

    #[test]
    fn test_case_insensitive_and_unicode() {
        assert_eq!(note_to_semitone("c#").unwrap(), 1);
        assert_eq!(note_to_semitone("bb").unwrap(), 10);
        assert_eq!(note_to_semitone("F♯").unwrap(), 6);
        assert_eq!(note_to_semitone("B♭").unwrap(), 10);
    }

    #[test]
    fn test_invalid_note_names() {
        for bad in ["H", "X", "", "C##", "Cm", " C"] {
            assert_eq!(
                note_to_semitone(bad),
                Err(TransposeError::InvalidNoteName(bad.to_string()))
            );
        }
    }

    #[test]
    fn test_outliers_never_produced() {
        for pitch in -24..24 {
            for prefer_sharps in [true, false] {
                let name = semitone_to_note(pitch, prefer_sharps);
                assert!(!["B#", "E#", "Cb", "Fb"].contains(&name));
            }
        }
    }

    #[test]
    fn test_interval_is_ascending() {
        assert_eq!(calculate_interval("G", "C").unwrap(), 5);
        assert_eq!(calculate_interval("C", "G").unwrap(), 7);
        assert_eq!(calculate_interval("G", "G").unwrap(), 0);
        assert_eq!(calculate_interval("B", "C").unwrap(), 1);
        assert_eq!(calculate_interval("G", "Eb").unwrap(), 8);
        assert!(calculate_interval("G", "H").is_err());
    }
}
