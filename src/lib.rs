//! Spanish Text Analyser — library crate.
//!
//! Breaks Spanish text into words by delegating the linguistics (IPA
//! transcription, English/Thai translation, part-of-speech tagging) to an
//! OpenAI-compatible chat-completions endpoint, then decodes the reply into
//! an ordered table suitable for display and CSV export.
//!
//! Modules:
//! * [`config`] — `AppConfig` (TOML persistence) and `AppPaths`.
//! * [`validate`] — optional pre-dispatch input validation policies.
//! * [`llm`] — prompt construction, the single API call, reply decoding.
//! * [`pipeline`] — `AnalysisRequestPipeline` wiring the stages together.
//! * [`output`] — table rendering and CSV export.

pub mod config;
pub mod llm;
pub mod output;
pub mod pipeline;
pub mod validate;
