use serde::Serialize;
use wasm_bindgen::prelude::*;

use chordshift::TransposeError;

#[derive(Serialize)]
struct BindingError {
    message: String,
    kind: &'static str,
}

fn to_js_error(e: TransposeError) -> JsValue {
    let error = match &e {
        TransposeError::InvalidNoteName(_) => BindingError {
            message: e.to_string(),
            kind: "invalid_note_name",
        },
    };
    to_json(&error).unwrap_or_else(|fallback| fallback)
}

/// Serialize to a JSON string value, or a plain error string if that fails
fn to_json<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_json::to_string(value)
        .map(|json| JsValue::from_str(&json))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Transpose a ChordPro-style chart. An unset `from_key` returns the chart unchanged.
#[wasm_bindgen(js_name = transposeChordPro)]
pub fn transpose_chordpro(text: &str, from_key: Option<String>, to_key: &str) -> Result<String, JsValue> {
    chordshift::transpose_chordpro(text, from_key.as_deref(), to_key).map_err(to_js_error)
}

/// Transpose a single chord symbol; non-chords come back unchanged
#[wasm_bindgen(js_name = transposeChord)]
pub fn transpose_chord(symbol: &str, semitones: i32, prefer_sharps: bool) -> String {
    chordshift::transpose_chord(symbol, semitones, prefer_sharps)
}

#[wasm_bindgen(js_name = isChord)]
pub fn is_chord(token: &str) -> bool {
    chordshift::is_chord(token)
}

/// Parsed chord as JSON (`{root, quality, bass}`), or `null` for non-chords
#[wasm_bindgen(js_name = parseChord)]
pub fn parse_chord(symbol: &str) -> Result<JsValue, JsValue> {
    match chordshift::parse_chord(symbol) {
        Some(chord) => to_json(&chord),
        None => Ok(JsValue::NULL),
    }
}

/// Capo suggestions as a JSON array of `{capo, playedKey}`
#[wasm_bindgen(js_name = suggestCapo)]
pub fn suggest_capo(key: &str) -> Result<JsValue, JsValue> {
    let suggestions = chordshift::suggest_capo(key).map_err(to_js_error)?;
    to_json(&suggestions)
}

#[wasm_bindgen(js_name = isDifficultKey)]
pub fn is_difficult_key(key: &str) -> Result<bool, JsValue> {
    chordshift::is_difficult_key(key).map_err(to_js_error)
}

#[wasm_bindgen(js_name = usesSharps)]
pub fn uses_sharps(key: &str) -> bool {
    chordshift::uses_sharps(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_value_bindings() {
        assert_eq!(transpose_chord("D/F#", 2, true), "E/G#");
        assert_eq!(transpose_chord("Chorus", 2, true), "Chorus");
        assert!(is_chord("F#m7"));
        assert!(!uses_sharps("Eb"));
    }
}
