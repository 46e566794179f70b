//! Prompt builder for the Spanish linguistic-analysis request.
//!
//! [`PromptBuilder`] produces the `(system_msg, user_msg)` pair for an
//! OpenAI-compatible `/v1/chat/completions` endpoint. The system
//! instruction is fixed per [`PromptStyle`]; the user's text is the sole
//! user turn, embedded verbatim.

use crate::config::PromptStyle;

// ---------------------------------------------------------------------------
// System instructions
// ---------------------------------------------------------------------------

/// Plain per-word breakdown: word, IPA, English/Thai translation, POS.
const SYSTEM_INSTRUCTION_PER_WORD: &str = "\
You are a linguist specializing in Spanish.
Given a Spanish text, split it into words and provide:
- Word in Spanish
- IPA transcription
- English translation
- Thai translation
- Part of speech (e.g., noun, verb, adjective)
Return the data as a JSON array of objects, one object per word, formatted like this:
[
    {\"word\": \"hola\", \"IPA\": \"ˈo.la\", \"english_translation\": \"hello\", \"thai_translation\": \"สวัสดี\", \"part_of_speech\": \"interjection\"}
]
Return only the JSON array, with no extra commentary.";

/// Base-form-normalization variant: additionally asks for the dictionary
/// (lemma) form of every word.
const SYSTEM_INSTRUCTION_BASE_FORM: &str = "\
You are a linguist specializing in Spanish.
Given a Spanish text, split it into words and provide:
- Word in Spanish exactly as it appears in the text
- Base form (the dictionary form: infinitive for verbs, singular for nouns)
- IPA transcription
- English translation
- Thai translation
- Part of speech (e.g., noun, verb, adjective)
Return the data as a JSON array of objects, one object per word, formatted like this:
[
    {\"word\": \"hablamos\", \"base_form\": \"hablar\", \"IPA\": \"aˈβla.mos\", \"english_translation\": \"we speak\", \"thai_translation\": \"เราพูด\", \"part_of_speech\": \"verb\"}
]
Return only the JSON array, with no extra commentary.";

// ---------------------------------------------------------------------------
// PromptBuilder
// ---------------------------------------------------------------------------

/// Builds the chat messages for one analysis request.
///
/// # Example
/// ```rust
/// use spanish_text_analyser::config::PromptStyle;
/// use spanish_text_analyser::llm::PromptBuilder;
///
/// let builder = PromptBuilder::new(PromptStyle::PerWord);
/// let (system, user) = builder.build_chat("hola mundo");
/// assert!(system.contains("linguist specializing in Spanish"));
/// assert_eq!(user, "hola mundo");
/// ```
pub struct PromptBuilder {
    style: PromptStyle,
}

impl PromptBuilder {
    /// Create a builder for the given prompt variant.
    pub fn new(style: PromptStyle) -> Self {
        Self { style }
    }

    /// Build the **(system_msg, user_msg)** pair.
    ///
    /// The user message is the submitted text itself — no wrapping, so the
    /// model sees exactly what the user typed.
    pub fn build_chat(&self, text: &str) -> (String, String) {
        (self.system_instruction().to_string(), text.to_string())
    }

    fn system_instruction(&self) -> &'static str {
        match self.style {
            PromptStyle::PerWord => SYSTEM_INSTRUCTION_PER_WORD,
            PromptStyle::BaseForm => SYSTEM_INSTRUCTION_BASE_FORM,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
