//! `AnalysisRequestPipeline` — the three sequential stages of one
//! submission: validate the input, dispatch the single API call, decode the
//! reply.
//!
//! Each run is independent; the pipeline holds no mutable state, so one
//! instance can serve any number of submissions. Empty text and a missing
//! credential are rejected before the analyzer is ever touched, and decode
//! failures surface as errors rather than synthetic table rows.

use std::sync::Arc;

use thiserror::Error;

use crate::config::ApiConfig;
use crate::llm::{decode_reply, AnalysisResult, AnalyzerError, DecodeError, WordAnalyzer};
use crate::validate::{InputValidator, ValidationError};

// ---------------------------------------------------------------------------
// PipelineError
// ---------------------------------------------------------------------------

/// Everything that can go wrong during one submission, kept distinct per
/// stage so the user-facing message says which step failed.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Rejected before any network call: nothing to analyse.
    #[error("no text to analyse — enter some Spanish text first")]
    EmptyInput,

    /// Rejected before any network call: no credential configured.
    #[error("no API key provided — pass --api-key or set OPENAI_API_KEY")]
    MissingCredential,

    /// The configured validation policy rejected the text.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Transport or remote-service failure during dispatch.
    #[error(transparent)]
    Analyzer(#[from] AnalyzerError),

    /// The reply came back but could not be decoded into records.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

// ---------------------------------------------------------------------------
// AnalysisRequestPipeline
// ---------------------------------------------------------------------------

/// Wires validator → analyzer → decoder for one submission at a time.
pub struct AnalysisRequestPipeline {
    api: ApiConfig,
    validator: InputValidator,
    analyzer: Arc<dyn WordAnalyzer>,
}

impl AnalysisRequestPipeline {
    /// Assemble a pipeline from its parts. The analyzer is a trait object so
    /// tests can substitute a stub for the real API client.
    pub fn new(api: ApiConfig, validator: InputValidator, analyzer: Arc<dyn WordAnalyzer>) -> Self {
        Self {
            api,
            validator,
            analyzer,
        }
    }

    /// Run one submission through all three stages.
    ///
    /// Stage order:
    /// 1. Reject empty/whitespace-only text (no network call).
    /// 2. Reject an empty or missing credential (no network call).
    /// 3. Run the configured validation policy.
    /// 4. Dispatch exactly one API request.
    /// 5. Decode the reply into an [`AnalysisResult`].
    pub async fn run(&self, text: &str) -> Result<AnalysisResult, PipelineError> {
        if text.trim().is_empty() {
            return Err(PipelineError::EmptyInput);
        }

        if self.api.api_key.as_deref().unwrap_or("").is_empty() {
            return Err(PipelineError::MissingCredential);
        }

        self.validator.check(text)?;

        log::debug!("dispatching analysis request ({} chars)", text.len());
        let reply = self.analyzer.analyze(text).await?;

        let result = decode_reply(&reply)?;
        log::debug!("decoded {} word records", result.len());

        Ok(result)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, Ordering};

    const HOLA_REPLY: &str = r#"[
        {"word": "hola", "IPA": "ˈo.la", "english_translation": "hello",
         "thai_translation": "สวัสดี", "part_of_speech": "interjection"}
    ]"#;

    /// Stub analyzer that records whether it was called and returns a
    /// canned reply.
    struct StubAnalyzer {
        reply: &'static str,
        called: Arc<AtomicBool>,
    }

    #[async_trait]
    impl WordAnalyzer for StubAnalyzer {
        async fn analyze(&self, _text: &str) -> Result<String, AnalyzerError> {
            self.called.store(true, Ordering::SeqCst);
            Ok(self.reply.to_string())
        }
    }

    fn pipeline_with(
        api_key: Option<&str>,
        validator: InputValidator,
        reply: &'static str,
    ) -> (AnalysisRequestPipeline, Arc<AtomicBool>) {
        let called = Arc::new(AtomicBool::new(false));
        let analyzer = Arc::new(StubAnalyzer {
            reply,
            called: Arc::clone(&called),
        });
        let api = ApiConfig {
            api_key: api_key.map(|s| s.to_string()),
            ..ApiConfig::default()
        };
        (
            AnalysisRequestPipeline::new(api, validator, analyzer),
            called,
        )
    }

    #[tokio::test]
    async fn empty_text_is_rejected_before_dispatch() {
        let (pipeline, called) = pipeline_with(Some("sk-test"), InputValidator::Disabled, "[]");
        let err = pipeline.run("   \n ").await.unwrap_err();
        assert!(matches!(err, PipelineError::EmptyInput));
        assert!(!called.load(Ordering::SeqCst), "analyzer must not be called");
    }

    #[tokio::test]
    async fn missing_credential_is_rejected_before_dispatch() {
        let (pipeline, called) = pipeline_with(None, InputValidator::Disabled, "[]");
        let err = pipeline.run("hola mundo").await.unwrap_err();
        assert!(matches!(err, PipelineError::MissingCredential));
        assert!(!called.load(Ordering::SeqCst), "analyzer must not be called");
    }

    #[tokio::test]
    async fn empty_string_credential_is_rejected_before_dispatch() {
        let (pipeline, called) = pipeline_with(Some(""), InputValidator::Disabled, "[]");
        let err = pipeline.run("hola mundo").await.unwrap_err();
        assert!(matches!(err, PipelineError::MissingCredential));
        assert!(!called.load(Ordering::SeqCst), "analyzer must not be called");
    }

    #[tokio::test]
    async fn validation_failure_is_rejected_before_dispatch() {
        let (pipeline, called) = pipeline_with(Some("sk-test"), InputValidator::Charset, "[]");
        let err = pipeline.run("hola 123").await.unwrap_err();
        assert!(matches!(err, PipelineError::Validation(_)));
        assert!(!called.load(Ordering::SeqCst), "analyzer must not be called");
    }

    #[tokio::test]
    async fn happy_path_decodes_the_reply() {
        let (pipeline, called) =
            pipeline_with(Some("sk-test"), InputValidator::Disabled, HOLA_REPLY);
        let result = pipeline.run("hola").await.expect("run");
        assert!(called.load(Ordering::SeqCst));
        assert_eq!(result.len(), 1);
        assert_eq!(result.records[0].word, "hola");
    }

    #[tokio::test]
    async fn undecodable_reply_surfaces_a_decode_error() {
        let (pipeline, _) =
            pipeline_with(Some("sk-test"), InputValidator::Disabled, "no soy json");
        let err = pipeline.run("hola").await.unwrap_err();
        assert!(matches!(err, PipelineError::Decode(_)));
    }

    #[tokio::test]
    async fn decode_errors_never_become_rows() {
        // A failed decode must yield an error, not a sentinel "Error" row.
        let (pipeline, _) = pipeline_with(
            Some("sk-test"),
            InputValidator::Disabled,
            r#"{"word": "hola"}"#,
        );
        assert!(pipeline.run("hola").await.is_err());
    }
}
