//! # Document Transposer
//!
//! Walks a ChordPro-style chart line by line and rewrites every chord token,
//! leaving lyrics, section headers and directives untouched.
//!
//! ## Line Kinds
//! - **Section header**: the whole trimmed line is one bracket token whose
//!   content is not a chord, e.g. `[Verse 1]`. Copied verbatim.
//! - **Directive**: the trimmed line is brace-delimited, e.g. `{title: Amazing Grace}`.
//!   Copied verbatim.
//! - **Content**: everything else. Text between brackets is copied verbatim;
//!   bracket tokens that parse as chords are transposed, others are kept.
//!
//! Lines are split on `\n` only and re-joined the same way, so blank lines,
//! trailing newlines and `\r\n` endings survive byte for byte.
//!
//! ## Example
//! ```rust
//! use chordshift::transpose_chordpro;
//!
//! let chart = "{title: Example}\n[Verse 1]\n[G]Amazing [D/F#]grace";
//! let out = transpose_chordpro(chart, Some("G"), "A")?;
//! assert_eq!(out, "{title: Example}\n[Verse 1]\n[A]Amazing [E/G#]grace");
//! # Ok::<(), chordshift::TransposeError>(())
//! ```

use serde::Serialize;

use crate::chord::{is_chord, parse_chord, Chord};
use crate::key::{resolve_key, Spelling};
use crate::pitch::calculate_interval;
use crate::transpose::transpose_parsed;
use crate::TransposeError;

/// Structural role of a single chart line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LineKind {
    SectionHeader,
    Directive,
    Content,
}

/// Classify one line of a chart.
pub fn classify_line(line: &str) -> LineKind {
    let trimmed = line.trim();

    if let Some(inner) = trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
    {
        if !inner.contains(['[', ']']) && !is_chord(inner) {
            return LineKind::SectionHeader;
        }
    }

    if trimmed.len() >= 2 && trimmed.starts_with('{') && trimmed.ends_with('}') {
        return LineKind::Directive;
    }

    LineKind::Content
}

/// A run of literal text or the inside of a `[...]` token.
#[derive(Debug, PartialEq, Eq)]
enum Segment<'a> {
    Text(&'a str),
    Bracket(&'a str),
}

/// Splits a content line into literal text and bracket tokens.
/// An unclosed `[` is literal text up to the end of the line.
struct Segments<'a> {
    rest: &'a str,
}

impl<'a> Segments<'a> {
    fn new(line: &'a str) -> Self {
        Segments { rest: line }
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        let rest = self.rest;
        let (segment, remainder) = match rest.find('[') {
            Some(0) => match rest.find(']') {
                Some(close) => (Segment::Bracket(&rest[1..close]), &rest[close + 1..]),
                None => (Segment::Text(rest), ""),
            },
            Some(open) => (Segment::Text(&rest[..open]), &rest[open..]),
            None => (Segment::Text(rest), ""),
        };
        self.rest = remainder;
        Some(segment)
    }
}

fn transpose_content_line(line: &str, interval: i32, prefer_sharps: bool, out: &mut String) {
    for segment in Segments::new(line) {
        match segment {
            Segment::Text(text) => out.push_str(text),
            Segment::Bracket(token) => {
                out.push('[');
                match parse_chord(token) {
                    Some(chord) => {
                        let transposed = transpose_parsed(&chord, interval, prefer_sharps);
                        log::trace!("{} -> {}", token, transposed);
                        out.push_str(&transposed);
                    }
                    None => out.push_str(token),
                }
                out.push(']');
            }
        }
    }
}

/// Transpose every chord in a chart from `from_key` to `to_key`.
///
/// An unset or blank `from_key`, or one textually equal to `to_key`, returns
/// the document unchanged. Otherwise chords are moved by the ascending
/// interval between the keys and spelled in the target key's style.
///
/// # Errors
/// [`TransposeError::InvalidNoteName`] if either key does not name a pitch.
pub fn transpose_chordpro(
    document: &str,
    from_key: Option<&str>,
    to_key: &str,
) -> Result<String, TransposeError> {
    let Some(from_key) = from_key.filter(|key| !key.trim().is_empty()) else {
        return Ok(document.to_string());
    };
    if from_key == to_key {
        return Ok(document.to_string());
    }

    let interval = calculate_interval(resolve_key(from_key), resolve_key(to_key))? as i32;
    let spelling = Spelling::for_key(to_key);
    let prefer_sharps = spelling.prefers_sharps();
    log::debug!(
        "Transposing chart from {} to {}: {} semitones, {:?}",
        from_key,
        to_key,
        interval,
        spelling
    );

    let mut out = String::with_capacity(document.len() + document.len() / 8);
    for (index, line) in document.split('\n').enumerate() {
        if index > 0 {
            out.push('\n');
        }
        let kind = classify_line(line);
        log::trace!("line {}: {:?}", index + 1, kind);
        match kind {
            LineKind::SectionHeader | LineKind::Directive => out.push_str(line),
            LineKind::Content => transpose_content_line(line, interval, prefer_sharps, &mut out),
        }
    }
    Ok(out)
}

/// Every chord token on the chart's content lines, in document order.
pub fn extract_chords(document: &str) -> Vec<Chord<'_>> {
    document
        .split('\n')
        .filter(|line| classify_line(line) == LineKind::Content)
        .flat_map(Segments::new)
        .filter_map(|segment| match segment {
            Segment::Bracket(token) => parse_chord(token),
            Segment::Text(_) => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_lines() {
        assert_eq!(classify_line("[Verse 1]"), LineKind::SectionHeader);
        assert_eq!(classify_line("  [Bridge]  "), LineKind::SectionHeader);
        assert_eq!(classify_line("[]"), LineKind::SectionHeader);
        assert_eq!(classify_line("{title: Amazing Grace}"), LineKind::Directive);
        assert_eq!(classify_line("{start_of_chorus}"), LineKind::Directive);
        assert_eq!(classify_line("[G]"), LineKind::Content);
        assert_eq!(classify_line("[Verse] [G]"), LineKind::Content);
        assert_eq!(classify_line("[G]Amazing [D]grace"), LineKind::Content);
        assert_eq!(classify_line(""), LineKind::Content);
        assert_eq!(classify_line("{"), LineKind::Content);
    }

    #[test]
    fn test_segments() {
        let segments: Vec<_> = Segments::new("a[G]b[ c").collect();
        assert_eq!(
            segments,
            vec![
                Segment::Text("a"),
                Segment::Bracket("G"),
                Segment::Text("b"),
                Segment::Text("[ c"),
            ]
        );
        assert_eq!(Segments::new("").count(), 0);
    }

    #[test]
    fn test_identity_fast_path() {
        let doc = "[G]La [C]la\n\n{key: G}";
        assert_eq!(transpose_chordpro(doc, Some("G"), "G").unwrap(), doc);
        assert_eq!(transpose_chordpro(doc, None, "A").unwrap(), doc);
        assert_eq!(transpose_chordpro(doc, Some(""), "A").unwrap(), doc);
        assert_eq!(transpose_chordpro(doc, Some("  "), "A").unwrap(), doc);
        // Fast path happens before key validation
        assert_eq!(transpose_chordpro(doc, Some("H"), "H").unwrap(), doc);
    }

    #[test]
    fn test_section_header_immunity() {
        let out = transpose_chordpro("[Verse 1]\n[G]La la [C]la", Some("G"), "C").unwrap();
        assert_eq!(out, "[Verse 1]\n[C]La la [F]la");
    }

    #[test]
    fn test_non_chord_brackets_in_content() {
        let out = transpose_chordpro("[Verse] [G] [] [x] [G", Some("G"), "A").unwrap();
        assert_eq!(out, "[Verse] [A] [] [x] [G");
    }

    #[test]
    fn test_directives_untouched() {
        let doc = "{key: G}\n{comment: [G] stays}\n[G]Go";
        let out = transpose_chordpro(doc, Some("G"), "D").unwrap();
        assert_eq!(out, "{key: G}\n{comment: [G] stays}\n[D]Go");
    }

    #[test]
    fn test_whitespace_and_line_endings() {
        let doc = "\n   \n[G]One\r\n[C]Two\r\n\n";
        let out = transpose_chordpro(doc, Some("G"), "A").unwrap();
        assert_eq!(out, "\n   \n[A]One\r\n[D]Two\r\n\n");
    }

    #[test]
    fn test_invalid_keys() {
        assert_eq!(
            transpose_chordpro("[G]", Some("H"), "C"),
            Err(TransposeError::InvalidNoteName("H".to_string()))
        );
        assert!(transpose_chordpro("[G]", Some("G"), "X").is_err());
    }

    #[test]
    fn test_normalized_keys() {
        let out = transpose_chordpro("[Em] [C] [G] [D]", Some("Em"), "F♯m").unwrap();
        assert_eq!(out, "[F#m] [D] [A] [E]");
        let out = transpose_chordpro("[G] [C]", Some("G major"), "B♭").unwrap();
        assert_eq!(out, "[Bb] [Eb]");
    }

    #[test]
    fn test_extract_chords() {
        let doc = "{title: X}\n[Chorus]\n[G]Praise [D/F#]him [Verse] [Em7]";
        let chords: Vec<String> = extract_chords(doc).iter().map(|c| c.to_string()).collect();
        assert_eq!(chords, vec!["G", "D/F#", "Em7"]);
        assert!(extract_chords("").is_empty());
    }
}
