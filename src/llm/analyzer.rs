//! Core `WordAnalyzer` trait and `ApiAnalyzer` implementation.
//!
//! `ApiAnalyzer` calls any OpenAI-compatible `/v1/chat/completions` endpoint.
//! All connection details come from [`ApiConfig`]; nothing is hardcoded and
//! no client state outlives the analyzer that owns it.

use async_trait::async_trait;
use thiserror::Error;

use crate::config::ApiConfig;
use crate::llm::prompt::PromptBuilder;

// ---------------------------------------------------------------------------
// AnalyzerError
// ---------------------------------------------------------------------------

/// Errors that can occur while dispatching the analysis request.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// HTTP transport or connection error.
    #[error("HTTP request failed: {0}")]
    Request(String),

    /// The request did not complete within the configured timeout.
    #[error("analysis request timed out")]
    Timeout,

    /// The remote service returned an error object (invalid credential,
    /// unknown model, quota...). The message is surfaced verbatim.
    #[error("API error: {0}")]
    Api(String),

    /// The HTTP response body could not be parsed as the expected envelope.
    #[error("failed to parse API response: {0}")]
    Parse(String),

    /// The model returned a reply with no usable text content.
    #[error("the model returned an empty reply")]
    EmptyReply,
}

impl From<reqwest::Error> for AnalyzerError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            AnalyzerError::Timeout
        } else {
            AnalyzerError::Request(e.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// WordAnalyzer trait
// ---------------------------------------------------------------------------

/// Async trait for the single outbound analysis call.
///
/// Implementors must be `Send + Sync` so they can be shared as
/// `Arc<dyn WordAnalyzer>`. The return value is the model's raw text reply;
/// decoding it into records is a separate stage
/// ([`decode_reply`](crate::llm::decode_reply)).
#[async_trait]
pub trait WordAnalyzer: Send + Sync {
    async fn analyze(&self, text: &str) -> Result<String, AnalyzerError>;
}

// ---------------------------------------------------------------------------
// ApiAnalyzer
// ---------------------------------------------------------------------------

/// Calls an OpenAI-compatible `/v1/chat/completions` endpoint.
///
/// Exactly one request per [`analyze`](WordAnalyzer::analyze) call — no
/// retry, no streaming. All connection details (`base_url`, `api_key`,
/// `model`, `temperature`) come exclusively from the [`ApiConfig`] passed to
/// [`ApiAnalyzer::from_config`].
pub struct ApiAnalyzer {
    client: reqwest::Client,
    config: ApiConfig,
    prompt_builder: PromptBuilder,
}

impl ApiAnalyzer {
    /// Build an `ApiAnalyzer` from request configuration.
    ///
    /// The HTTP client is pre-configured with the per-request timeout from
    /// `config.timeout_secs`. A default client is used as a last-resort
    /// fallback if the builder fails (should never happen in practice).
    pub fn from_config(config: &ApiConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        let prompt_builder = PromptBuilder::new(config.prompt_style);

        Self {
            client,
            config: config.clone(),
            prompt_builder,
        }
    }
}

#[async_trait]
impl WordAnalyzer for ApiAnalyzer {
    /// Send `text` to the configured endpoint for per-word analysis.
    ///
    /// The `Authorization: Bearer …` header is attached only when
    /// `config.api_key` is `Some(key)` and `key` is non-empty, so local
    /// OpenAI-compatible providers that need no authentication keep working.
    async fn analyze(&self, text: &str) -> Result<String, AnalyzerError> {
        let (system_msg, user_msg) = self.prompt_builder.build_chat(text);

        let url = format!("{}/v1/chat/completions", self.config.base_url);

        let body = serde_json::json!({
            "model":       self.config.model,
            "messages": [
                { "role": "system", "content": system_msg },
                { "role": "user",   "content": user_msg   }
            ],
            "stream":      false,
            "temperature": self.config.temperature
        });

        let mut req = self.client.post(&url).json(&body);

        let key = self.config.api_key.as_deref().unwrap_or("");
        if !key.is_empty() {
            req = req.bearer_auth(key);
        }

        let response = req.send().await?;

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AnalyzerError::Parse(e.to_string()))?;

        // Credential and service errors arrive as an `error` object; the
        // remote message is surfaced to the user verbatim.
        if let Some(message) = json["error"]["message"].as_str() {
            return Err(AnalyzerError::Api(message.to_string()));
        }

        let reply = json["choices"][0]["message"]["content"]
            .as_str()
            .ok_or(AnalyzerError::EmptyReply)?
            .trim()
            .to_string();

        if reply.is_empty() {
            return Err(AnalyzerError::EmptyReply);
        }

        Ok(reply)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;

    fn make_config(api_key: Option<&str>) -> ApiConfig {
        ApiConfig {
            api_key: api_key.map(|s| s.to_string()),
            ..ApiConfig::default()
        }
    }

    #[test]
    fn from_config_builds_without_panic() {
        let config = make_config(None);
        let _analyzer = ApiAnalyzer::from_config(&config);
    }

    #[test]
    fn from_config_accepts_empty_api_key() {
        let config = make_config(Some(""));
        let _analyzer = ApiAnalyzer::from_config(&config);
    }

    /// Verify that `ApiAnalyzer` is object-safe (usable as `dyn WordAnalyzer`).
    #[test]
    fn analyzer_is_object_safe() {
        let config = make_config(Some("sk-test-1234"));
        let analyzer: Box<dyn WordAnalyzer> = Box::new(ApiAnalyzer::from_config(&config));
        drop(analyzer);
    }
}
