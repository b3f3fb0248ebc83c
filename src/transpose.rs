use crate::chord::{parse_chord, Chord, ChordNote};
use crate::key::{key_semitone, uses_sharps};
use crate::pitch::semitone_to_note;
use crate::TransposeError;

/// Move a single chord note and respell it
fn transpose_note(note: ChordNote<'_>, semitones: i32, prefer_sharps: bool) -> &'static str {
    semitone_to_note(i32::from(note.pitch) + semitones.rem_euclid(12), prefer_sharps)
}

/// Transpose an already parsed chord, carrying the quality through verbatim
pub fn transpose_parsed(chord: &Chord<'_>, semitones: i32, prefer_sharps: bool) -> String {
    let mut out = String::with_capacity(chord.quality.len() + 6);
    out.push_str(transpose_note(chord.root, semitones, prefer_sharps));
    out.push_str(chord.quality);
    if let Some(bass) = chord.bass {
        out.push('/');
        out.push_str(transpose_note(bass, semitones, prefer_sharps));
    }
    out
}

/// Transpose a chord symbol by `semitones`, spelling the result with sharps
/// or flats.
///
/// Anything that does not parse as a chord is returned unchanged.
///
/// ```rust
/// use chordshift::transpose_chord;
///
/// assert_eq!(transpose_chord("Am7", 5, true), "Dm7");
/// assert_eq!(transpose_chord("G/B", 2, true), "A/C#");
/// assert_eq!(transpose_chord("Verse", 3, true), "Verse");
/// ```
pub fn transpose_chord(symbol: &str, semitones: i32, prefer_sharps: bool) -> String {
    match parse_chord(symbol) {
        Some(chord) => transpose_parsed(&chord, semitones, prefer_sharps),
        None => symbol.to_string(),
    }
}

/// Move a key name by `semitones`, keeping the source key's sharp/flat style
pub fn transpose_key(key: &str, semitones: i32) -> Result<&'static str, TransposeError> {
    let tonic = key_semitone(key)?;
    Ok(semitone_to_note(
        i32::from(tonic) + semitones.rem_euclid(12),
        uses_sharps(key),
    ))
}
