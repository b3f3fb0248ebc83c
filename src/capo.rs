//! # Capo Advisor
//!
//! Suggests capo positions that let a guitarist play a hard key with
//! open-chord shapes from an easier one.
//!
//! The easy keys are ranked by how comfortable their open shapes are:
//! `G`, `C`, `D`, `A`, `E`. That order is the primary sort key for
//! suggestions; the capo fret breaks ties.
//!
//! ```rust
//! use chordshift::{is_difficult_key, suggest_capo, CapoSuggestion};
//!
//! assert!(is_difficult_key("Bb")?);
//! let hints = suggest_capo("Bb")?;
//! assert_eq!(hints[0], CapoSuggestion { capo: 3, played_key: "G" });
//! # Ok::<(), chordshift::TransposeError>(())
//! ```

use serde::Serialize;

use crate::key::key_semitone;
use crate::pitch::semitone_to_note;
use crate::transpose::transpose_key;
use crate::TransposeError;

/// Guitar-friendly keys, most comfortable first.
pub const EASY_KEYS: [&str; 5] = ["G", "C", "D", "A", "E"];

/// Highest fret offered as a capo position.
const MAX_CAPO: u8 = 11;

/// Capo on `capo`, fret the shapes of `played_key`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapoSuggestion {
    pub capo: u8,
    pub played_key: &'static str,
}

fn easy_rank(key: &str) -> Option<usize> {
    EASY_KEYS.iter().position(|easy| *easy == key)
}

/// True if the key (after enharmonic resolution) is not one of [`EASY_KEYS`].
pub fn is_difficult_key(key: &str) -> Result<bool, TransposeError> {
    let tonic = key_semitone(key)?;
    Ok(easy_rank(semitone_to_note(tonic as i32, true)).is_none())
}

/// Capo positions 1 through 11 whose played shapes fall in an easy key,
/// best shape first.
pub fn suggest_capo(key: &str) -> Result<Vec<CapoSuggestion>, TransposeError> {
    let mut ranked = Vec::new();
    for capo in 1..=MAX_CAPO {
        let played = transpose_key(key, -(capo as i32))?;
        if let Some(rank) = easy_rank(played) {
            ranked.push((rank, CapoSuggestion { capo, played_key: EASY_KEYS[rank] }));
        }
    }
    ranked.sort_by_key(|(rank, suggestion)| (*rank, suggestion.capo));
    log::trace!("{} capo suggestions for {}", ranked.len(), key);

    Ok(ranked.into_iter().map(|(_, suggestion)| suggestion).collect())
}
