//! Chat-completions plumbing: prompt construction, the single API call,
//! and reply decoding.
//!
//! This module provides:
//! * [`WordAnalyzer`] — async trait implemented by analyzer backends.
//! * [`ApiAnalyzer`] — OpenAI-compatible REST API analyzer.
//! * [`PromptBuilder`] — builds the fixed linguistic-analysis prompts.
//! * [`decode_reply`] — parses the model's JSON reply into [`AnalysisResult`].
//! * [`AnalyzerError`] / [`DecodeError`] — error variants per stage.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use spanish_text_analyser::config::ApiConfig;
//! use spanish_text_analyser::llm::{decode_reply, ApiAnalyzer, WordAnalyzer};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut api = ApiConfig::default();
//!     api.api_key = Some("sk-...".into());
//!
//!     let analyzer = ApiAnalyzer::from_config(&api);
//!     let reply = analyzer.analyze("hola mundo").await.unwrap();
//!     let result = decode_reply(&reply).unwrap();
//!     for record in &result.records {
//!         println!("{} [{}] {}", record.word, record.ipa, record.english_translation);
//!     }
//! }
//! ```

pub mod analyzer;
pub mod decoder;
pub mod prompt;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use analyzer::{AnalyzerError, ApiAnalyzer, WordAnalyzer};
pub use decoder::{decode_reply, AnalysisResult, DecodeError, WordRecord, NOT_AVAILABLE};
pub use prompt::PromptBuilder;
