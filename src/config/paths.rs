//! Cross-platform application paths using the `dirs` crate.
//!
//! Config dir (settings + word list):
//!   Windows: %APPDATA%\spanish-text-analyser\
//!   macOS:   ~/Library/Application Support/spanish-text-analyser/
//!   Linux:   ~/.config/spanish-text-analyser/

use std::path::PathBuf;

/// Holds all resolved application directory/file paths.
#[derive(Debug, Clone)]
pub struct AppPaths {
    /// Directory for `settings.toml` and the default word list.
    pub config_dir: PathBuf,
    /// Full path to `settings.toml`.
    pub settings_file: PathBuf,
    /// Default path of the Spanish word-list file (one word per line),
    /// used by the word-list validation policy when no explicit path is
    /// configured.
    pub wordlist_file: PathBuf,
}

impl AppPaths {
    const APP_NAME: &'static str = "spanish-text-analyser";

    /// Resolves all paths using the `dirs` crate.
    ///
    /// Falls back to the current directory if the platform cannot provide a
    /// standard path (should be extremely rare in practice).
    pub fn new() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(Self::APP_NAME);

        let settings_file = config_dir.join("settings.toml");
        let wordlist_file = config_dir.join("spanish-words.txt");

        Self {
            config_dir,
            settings_file,
            wordlist_file,
        }
    }
}

impl Default for AppPaths {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_non_empty() {
        let paths = AppPaths::new();
        assert!(paths.config_dir.to_str().is_some_and(|s| !s.is_empty()));
        assert!(paths
            .settings_file
            .file_name()
            .is_some_and(|n| n == "settings.toml"));
        assert!(paths
            .wordlist_file
            .file_name()
            .is_some_and(|n| n == "spanish-words.txt"));
    }
}
