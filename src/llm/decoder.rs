//! Decodes the model's text reply into an ordered table of word records.
//!
//! The reply is expected to be a JSON array of per-word objects. Parsing is
//! strict: either the whole reply parses into records or decoding fails —
//! there is no per-record fallback, and decode failures are never turned
//! into synthetic table rows. Record order is whatever the model returned;
//! nothing enforces that it matches the input word order, and field values
//! are untrusted free text.

use serde_json::Value;
use thiserror::Error;

/// Sentinel substituted for fields the model omitted.
pub const NOT_AVAILABLE: &str = "N/A";

// ---------------------------------------------------------------------------
// DecodeError
// ---------------------------------------------------------------------------

/// Ways the model's reply can fail to decode.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The reply is not syntactically valid JSON.
    #[error("the model reply is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The reply is valid JSON but not an array.
    #[error("the model reply is valid JSON but not an array of objects")]
    NotAnArray,

    /// An array element is not a JSON object.
    #[error("array element {index} of the model reply is not a JSON object")]
    NotAnObject { index: usize },
}

// ---------------------------------------------------------------------------
// WordRecord / AnalysisResult
// ---------------------------------------------------------------------------

/// One row of the analysis table. All fields are free-text strings taken
/// verbatim from the model; `base_form` is only present when the base-form
/// prompt variant was used and the model supplied the key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRecord {
    pub word: String,
    pub base_form: Option<String>,
    pub ipa: String,
    pub english_translation: String,
    pub thai_translation: String,
    pub part_of_speech: String,
}

/// Ordered sequence of [`WordRecord`]s — insertion order is the order the
/// model returned them. Exists only for one render/export cycle; nothing is
/// cached across submissions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisResult {
    pub records: Vec<WordRecord>,
}

impl AnalysisResult {
    /// Number of word records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` when the model returned an empty array.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns `true` when any record carries a base form, which decides
    /// whether the table/CSV gets a "Base Form" column.
    pub fn has_base_forms(&self) -> bool {
        self.records.iter().any(|r| r.base_form.is_some())
    }
}

// ---------------------------------------------------------------------------
// decode_reply
// ---------------------------------------------------------------------------

/// Strictly parse `raw` as a JSON array of per-word objects.
///
/// Recognized keys per object: `word`, `base_form` (optional), `IPA`,
/// `english_translation`, `thai_translation`, `part_of_speech`. A missing
/// or non-string field becomes the [`NOT_AVAILABLE`] sentinel; unrecognized
/// keys are ignored. Array order is preserved.
///
/// # Examples
///
/// ```
/// use spanish_text_analyser::llm::decode_reply;
///
/// let reply = r#"[{"word": "hola", "IPA": "ˈo.la",
///                  "english_translation": "hello",
///                  "thai_translation": "สวัสดี",
///                  "part_of_speech": "interjection"}]"#;
/// let result = decode_reply(reply).unwrap();
/// assert_eq!(result.len(), 1);
/// assert_eq!(result.records[0].word, "hola");
/// ```
pub fn decode_reply(raw: &str) -> Result<AnalysisResult, DecodeError> {
    let value: Value = serde_json::from_str(raw.trim())?;

    let items = value.as_array().ok_or(DecodeError::NotAnArray)?;

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let obj = item.as_object().ok_or(DecodeError::NotAnObject { index })?;

        records.push(WordRecord {
            word: string_field(obj, "word"),
            base_form: obj
                .get("base_form")
                .and_then(Value::as_str)
                .map(str::to_string),
            ipa: string_field(obj, "IPA"),
            english_translation: string_field(obj, "english_translation"),
            thai_translation: string_field(obj, "thai_translation"),
            part_of_speech: string_field(obj, "part_of_speech"),
        });
    }

    Ok(AnalysisResult { records })
}

fn string_field(obj: &serde_json::Map<String, Value>, key: &str) -> String {
    obj.get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
