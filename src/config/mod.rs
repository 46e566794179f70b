//! Configuration module for the Spanish Text Analyser.
//!
//! Provides `AppConfig` (top-level settings), sub-configs for the API call,
//! input validation and CSV export, `AppPaths` for cross-platform config
//! directories, and TOML persistence via `AppConfig::load` /
//! `AppConfig::save`.

pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::{
    ApiConfig, AppConfig, ExportConfig, PromptStyle, ValidationConfig, ValidationPolicy,
};
