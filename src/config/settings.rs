//! Application settings structs, defaults and TOML persistence.
//!
//! All structs implement `Serialize`, `Deserialize`, `Default` and `Clone`
//! so they can be round-tripped through TOML files.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::AppPaths;

// ---------------------------------------------------------------------------
// PromptStyle
// ---------------------------------------------------------------------------

/// Selects which analysis prompt is sent as the system instruction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PromptStyle {
    /// Plain per-word breakdown: word, IPA, English/Thai translation, POS.
    PerWord,
    /// Same as `PerWord` plus the dictionary (base) form of every word.
    BaseForm,
}

impl Default for PromptStyle {
    fn default() -> Self {
        Self::PerWord
    }
}

// ---------------------------------------------------------------------------
// ValidationPolicy
// ---------------------------------------------------------------------------

/// Selects which input check (if any) runs before the API call.
///
/// The two policies are independent alternatives, never composed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ValidationPolicy {
    /// No pre-dispatch validation.
    Off,
    /// Accept only Spanish-alphabet characters and whitespace.
    Charset,
    /// Reject tokens absent from a preloaded Spanish word-list file.
    WordList,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self::Off
    }
}

// ---------------------------------------------------------------------------
// ApiConfig
// ---------------------------------------------------------------------------

/// Settings for the single chat-completions request.
///
/// The credential is an explicit per-request configuration value; there is
/// no process-wide client object holding it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the API endpoint (OpenAI: `https://api.openai.com`).
    pub base_url: String,
    /// API key — `None` until the user supplies one. Never persisted back
    /// to disk by the CLI; a value here only exists if the user wrote it
    /// into `settings.toml` themselves.
    pub api_key: Option<String>,
    /// Model identifier sent to the API.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f64,
    /// Maximum seconds to wait for a response before timing out.
    pub timeout_secs: u64,
    /// Which system prompt variant to send.
    pub prompt_style: PromptStyle,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com".into(),
            api_key: None,
            model: "gpt-4o-mini".into(),
            temperature: 0.6,
            timeout_secs: 60,
            prompt_style: PromptStyle::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// ValidationConfig
// ---------------------------------------------------------------------------

/// Settings for pre-dispatch input validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Which policy to apply.
    pub policy: ValidationPolicy,
    /// Explicit word-list file for the `WordList` policy. `None` means the
    /// default path under the config directory.
    pub wordlist_file: Option<std::path::PathBuf>,
}

// ---------------------------------------------------------------------------
// ExportConfig
// ---------------------------------------------------------------------------

/// Settings for CSV export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Default CSV file name when `--output` is given no explicit path.
    pub file_name: String,
    /// Prefix the file with a UTF-8 byte-order mark so spreadsheet apps
    /// pick up the Thai text correctly.
    pub with_bom: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_name: "spanish_text_analysis.csv".into(),
            with_bom: true,
        }
    }
}

// ---------------------------------------------------------------------------
// AppConfig  (top-level)
// ---------------------------------------------------------------------------

/// Top-level application configuration, serialised as `settings.toml`.
///
/// # Persistence
///
/// ```rust,no_run
/// use spanish_text_analyser::config::AppConfig;
///
/// // Load (returns Default when file is missing)
/// let config = AppConfig::load().unwrap();
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Chat-completions request settings.
    pub api: ApiConfig,
    /// Pre-dispatch input validation settings.
    pub validation: ValidationConfig,
    /// CSV export settings.
    pub export: ExportConfig,
}

impl AppConfig {
    /// Load configuration from the platform-appropriate `settings.toml`.
    ///
    /// Returns `Ok(AppConfig::default())` when the file does not exist yet
    /// (first-run scenario) so callers never need to special-case a missing
    /// file.
    pub fn load() -> Result<Self> {
        Self::load_from(&AppPaths::new().settings_file)
    }

    /// Load from an explicit path (useful for tests).
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to the platform-appropriate `settings.toml`,
    /// creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&AppPaths::new().settings_file)
    }

    /// Save to an explicit path (useful for tests).
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    /// Verify that a default `AppConfig` can be serialised to TOML and
    /// deserialised back without any data loss.
    #[test]
    fn round_trip_toml() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");

        let original = AppConfig::default();
        original.save_to(&path).expect("save");

        let loaded = AppConfig::load_from(&path).expect("load");

        assert_eq!(original.api.base_url, loaded.api.base_url);
        assert_eq!(original.api.api_key, loaded.api.api_key);
        assert_eq!(original.api.model, loaded.api.model);
        assert_eq!(original.api.temperature, loaded.api.temperature);
        assert_eq!(original.api.timeout_secs, loaded.api.timeout_secs);
        assert_eq!(original.api.prompt_style, loaded.api.prompt_style);

        assert_eq!(original.validation.policy, loaded.validation.policy);
        assert_eq!(original.validation.wordlist_file, loaded.validation.wordlist_file);

        assert_eq!(original.export.file_name, loaded.export.file_name);
        assert_eq!(original.export.with_bom, loaded.export.with_bom);
    }

    /// `load_from` on a non-existent path must return `Default` without error.
    #[test]
    fn load_missing_returns_default() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("nonexistent.toml");

        let config = AppConfig::load_from(&path).expect("should not error");
        let default = AppConfig::default();

        assert_eq!(config.api.model, default.api.model);
        assert_eq!(config.validation.policy, default.validation.policy);
        assert_eq!(config.export.file_name, default.export.file_name);
    }

    /// Defaults mirror the fixed parameters of the analysis request.
    #[test]
    fn default_values() {
        let cfg = AppConfig::default();

        assert_eq!(cfg.api.base_url, "https://api.openai.com");
        assert!(cfg.api.api_key.is_none());
        assert_eq!(cfg.api.model, "gpt-4o-mini");
        assert_eq!(cfg.api.temperature, 0.6);
        assert_eq!(cfg.api.prompt_style, PromptStyle::PerWord);
        assert_eq!(cfg.validation.policy, ValidationPolicy::Off);
        assert_eq!(cfg.export.file_name, "spanish_text_analysis.csv");
        assert!(cfg.export.with_bom);
    }

    /// Verify that modified non-default values survive a round trip.
    #[test]
    fn round_trip_modified_values() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("modified.toml");

        let mut cfg = AppConfig::default();
        cfg.api.base_url = "http://localhost:11434".into();
        cfg.api.api_key = Some("sk-test".into());
        cfg.api.model = "gpt-4o".into();
        cfg.api.prompt_style = PromptStyle::BaseForm;
        cfg.validation.policy = ValidationPolicy::WordList;
        cfg.validation.wordlist_file = Some("/tmp/words.txt".into());
        cfg.export.with_bom = false;

        cfg.save_to(&path).expect("save");
        let loaded = AppConfig::load_from(&path).expect("load");

        assert_eq!(loaded.api.base_url, "http://localhost:11434");
        assert_eq!(loaded.api.api_key, Some("sk-test".into()));
        assert_eq!(loaded.api.model, "gpt-4o");
        assert_eq!(loaded.api.prompt_style, PromptStyle::BaseForm);
        assert_eq!(loaded.validation.policy, ValidationPolicy::WordList);
        assert_eq!(loaded.validation.wordlist_file, Some("/tmp/words.txt".into()));
        assert!(!loaded.export.with_bom);
    }
}
