//! # Key Classifier
//!
//! Decides whether a key's chart is spelled with sharps or flats.
//!
//! Membership is a curated lookup, not a key-signature computation: `C#` and
//! `B` are sharp-preferring, `Gb` and `Db` are flat-preferring, and anything
//! the tables do not name (including the legacy `D#`, `G#`, `A#` keys) falls
//! back to sharps.
//!
//! Key arguments are normalized first, so `"G major"`, `"Em"`, `"B♭"` and
//! `"bbm"` all resolve to a canonical tonic name.

use serde::Serialize;

use crate::pitch::{ascii_accidentals, note_to_semitone, Pitch};
use crate::TransposeError;

/// Sharp-preferring keys, clockwise round the circle of fifths.
pub const SHARP_KEYS: [&str; 8] = ["C", "G", "D", "A", "E", "B", "F#", "C#"];

/// Flat-preferring keys, counter-clockwise round the circle of fifths.
pub const FLAT_KEYS: [&str; 6] = ["F", "Bb", "Eb", "Ab", "Db", "Gb"];

/// Enharmonic key names still found in stored songs.
const LEGACY_KEYS: [&str; 3] = ["D#", "G#", "A#"];

/// Checked longest-first so `"maj"` wins over `"m"`.
const MODE_SUFFIXES: [&str; 5] = ["major", "maj", "minor", "min", "m"];

/// Accidental style used when rendering note names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Spelling {
    Sharps,
    Flats,
}

impl Spelling {
    /// Spelling convention of the given key; unknown keys get sharps.
    pub fn for_key(key: &str) -> Self {
        if uses_sharps(key) {
            Spelling::Sharps
        } else {
            Spelling::Flats
        }
    }

    pub fn prefers_sharps(self) -> bool {
        self == Spelling::Sharps
    }
}

fn strip_mode_suffix(key: &str) -> &str {
    for suffix in MODE_SUFFIXES {
        let Some(split) = key.len().checked_sub(suffix.len()) else {
            continue;
        };
        if split > 0 && key.is_char_boundary(split) && key[split..].eq_ignore_ascii_case(suffix) {
            return key[..split].trim_end();
        }
    }
    key
}

/// Map a free-form key name onto one of the 17 canonical key names.
///
/// Handles surrounding whitespace, unicode accidentals and a trailing mode
/// word. Returns `None` when the remaining tonic is not a known key.
///
/// ```rust
/// use chordshift::normalize_key;
///
/// assert_eq!(normalize_key("G major"), Some("G"));
/// assert_eq!(normalize_key("F♯"), Some("F#"));
/// assert_eq!(normalize_key("Bbm"), Some("Bb"));
/// assert_eq!(normalize_key("H"), None);
/// ```
pub fn normalize_key(key: &str) -> Option<&'static str> {
    let ascii = ascii_accidentals(key.trim());
    let tonic = strip_mode_suffix(&ascii);
    SHARP_KEYS
        .iter()
        .chain(FLAT_KEYS.iter())
        .chain(LEGACY_KEYS.iter())
        .find(|name| name.eq_ignore_ascii_case(tonic))
        .copied()
}

/// True unless the normalized key is one of the flat-preferring keys.
pub fn uses_sharps(key: &str) -> bool {
    !matches!(normalize_key(key), Some(name) if FLAT_KEYS.contains(&name))
}

/// Canonical name for a key argument, or the raw text when it cannot be
/// normalized so that pitch lookup reports the caller's own input.
pub(crate) fn resolve_key(key: &str) -> &str {
    normalize_key(key).unwrap_or(key)
}

/// Pitch class of a key's tonic.
pub(crate) fn key_semitone(key: &str) -> Result<Pitch, TransposeError> {
    note_to_semitone(resolve_key(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sharp_keys() {
        for key in SHARP_KEYS {
            assert!(uses_sharps(key), "{} should use sharps", key);
        }
    }

    #[test]
    fn test_flat_keys() {
        for key in FLAT_KEYS {
            assert!(!uses_sharps(key), "{} should use flats", key);
        }
    }

    #[test]
    fn test_unknown_keys_default_to_sharps() {
        for key in ["D#", "G#", "A#", "H", "", "Verse"] {
            assert!(uses_sharps(key), "{:?} should default to sharps", key);
        }
    }

    #[test]
    fn test_normalize_key_variants() {
        assert_eq!(normalize_key(" G "), Some("G"));
        assert_eq!(normalize_key("Gmaj"), Some("G"));
        assert_eq!(normalize_key("Em"), Some("E"));
        assert_eq!(normalize_key("E minor"), Some("E"));
        assert_eq!(normalize_key("Amin"), Some("A"));
        assert_eq!(normalize_key("E♭"), Some("Eb"));
        assert_eq!(normalize_key("C♯"), Some("C#"));
        assert_eq!(normalize_key("g#"), Some("G#"));
        assert_eq!(normalize_key("m"), None);
        assert_eq!(normalize_key(""), None);
        assert_eq!(normalize_key("Cb"), None);
    }

    #[test]
    fn test_normalized_keys_classify() {
        assert!(!uses_sharps("Bb major"));
        assert!(!uses_sharps("E♭"));
        assert!(uses_sharps("F♯m"));
        assert_eq!(Spelling::for_key("Ab"), Spelling::Flats);
        assert_eq!(Spelling::for_key("B"), Spelling::Sharps);
    }

    #[test]
    fn test_key_semitone() {
        assert_eq!(key_semitone("G major").unwrap(), 7);
        assert_eq!(key_semitone("Cb").unwrap(), 11);
        assert_eq!(
            key_semitone("H"),
            Err(TransposeError::InvalidNoteName("H".to_string()))
        );
    }
}
