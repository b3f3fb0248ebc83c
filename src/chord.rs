//! # Chord Tokenizer / Parser
//!
//! Splits a chord symbol into root, quality suffix and optional bass note.
//!
//! ## Grammar
//! ```text
//! chord   := note quality ("/" note)?
//! note    := [A-G] ("#" | "b" | "♯" | "♭")?
//! quality := ( digit | "maj" | "min" | "sus" | "add" | "dim" | "aug" | "m" | "M"
//!            | "#" | "b" | "♯" | "♭" | "+" | "-" | "(" | ")" | "°" | "ø" | "Δ" | "/" digit )*
//! ```
//!
//! The quality is kept as an opaque slice of the input. It is never
//! interpreted, only checked against the vocabulary above. That check is what
//! separates `[Bm7]` (a chord) from `[Bridge]` (a section label): `r` is not
//! chord vocabulary, so the parse fails and the caller sees `None`.
//!
//! ## Slash handling
//! - `G/B` → root `G`, bass `B`
//! - `C6/9` → root `C`, quality `6/9` (the text after the slash is not a note)
//! - `C/H` → not a chord
//!
//! ## Example
//! ```rust
//! use chordshift::{is_chord, parse_chord};
//!
//! let chord = parse_chord("F#m7/C#").unwrap();
//! assert_eq!(chord.root.name, "F#");
//! assert_eq!(chord.quality, "m7");
//! assert_eq!(chord.bass.map(|b| b.name), Some("C#"));
//!
//! assert!(is_chord("Bm7"));
//! assert!(!is_chord("Bridge"));
//! ```

use std::fmt;

use serde::Serialize;

use crate::pitch::{note_to_semitone, Pitch};

/// Longer words first so `maj` is not read as `m` + `aj`.
const QUALITY_WORDS: [&str; 8] = ["maj", "min", "sus", "add", "dim", "aug", "m", "M"];

const QUALITY_SYMBOLS: [char; 11] = ['#', 'b', '♯', '♭', '+', '-', '(', ')', '°', 'ø', 'Δ'];

/// A note as written inside a chord symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChordNote<'a> {
    /// Original spelling, e.g. `"Bb"` or `"B♭"`.
    pub name: &'a str,
    pub pitch: Pitch,
}

/// A parsed chord symbol borrowing from the text it was parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Chord<'a> {
    pub root: ChordNote<'a>,
    /// Everything between the root and the bass slash, verbatim.
    pub quality: &'a str,
    pub bass: Option<ChordNote<'a>>,
}

impl Chord<'_> {
    pub fn root_pitch(&self) -> Pitch {
        self.root.pitch
    }

    pub fn bass_pitch(&self) -> Option<Pitch> {
        self.bass.map(|bass| bass.pitch)
    }
}

impl fmt::Display for Chord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.root.name, self.quality)?;
        if let Some(bass) = self.bass {
            write!(f, "/{}", bass.name)?;
        }
        Ok(())
    }
}

/// Split a leading note name off `text`, returning it and the remainder.
fn split_note(text: &str) -> Option<(ChordNote<'_>, &str)> {
    let mut chars = text.char_indices();
    let (_, letter) = chars.next()?;
    if !matches!(letter, 'A'..='G') {
        return None;
    }
    let end = match chars.next() {
        Some((idx, accidental)) if matches!(accidental, '#' | 'b' | '♯' | '♭') => {
            idx + accidental.len_utf8()
        }
        _ => letter.len_utf8(),
    };
    let name = &text[..end];
    let pitch = note_to_semitone(name).ok()?;
    Some((ChordNote { name, pitch }, &text[end..]))
}

/// Parse a complete note name, rejecting trailing text.
fn parse_note(text: &str) -> Option<ChordNote<'_>> {
    match split_note(text)? {
        (note, "") => Some(note),
        _ => None,
    }
}

fn is_quality(text: &str) -> bool {
    let mut rest = text;
    while let Some(c) = rest.chars().next() {
        if c.is_ascii_digit() || QUALITY_SYMBOLS.contains(&c) {
            rest = &rest[c.len_utf8()..];
        } else if c == '/' && rest[1..].starts_with(|d: char| d.is_ascii_digit()) {
            rest = &rest[1..];
        } else if let Some(word) = QUALITY_WORDS.iter().find(|word| rest.starts_with(*word)) {
            rest = &rest[word.len()..];
        } else {
            return false;
        }
    }
    true
}

/// Parse a chord symbol. Returns `None` for anything that is not chord-shaped.
pub fn parse_chord(symbol: &str) -> Option<Chord<'_>> {
    let (root, rest) = split_note(symbol)?;

    if let Some(slash) = rest.rfind('/') {
        if let Some(bass) = parse_note(&rest[slash + 1..]) {
            let quality = &rest[..slash];
            return is_quality(quality).then_some(Chord {
                root,
                quality,
                bass: Some(bass),
            });
        }
    }

    is_quality(rest).then_some(Chord {
        root,
        quality: rest,
        bass: None,
    })
}

/// True if `token` parses as a chord.
pub fn is_chord(token: &str) -> bool {
    parse_chord(token).is_some()
}
