//! Pre-dispatch input validation.
//!
//! Two independent policies (never composed):
//! * [`charset::check_charset`] — accept only Spanish-alphabet characters
//!   and whitespace, reporting any offending characters.
//! * [`wordlist::SpanishWordList`] — reject whitespace-delimited tokens
//!   absent from a preloaded word-list file.
//!
//! [`InputValidator`] selects the configured policy and runs it.

pub mod charset;
pub mod wordlist;

use std::path::PathBuf;

use thiserror::Error;

use crate::config::{AppPaths, ValidationConfig, ValidationPolicy};

pub use charset::check_charset;
pub use wordlist::SpanishWordList;

// ---------------------------------------------------------------------------
// ValidationError
// ---------------------------------------------------------------------------

/// Rejection reasons and word-list configuration failures.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Characters outside the Spanish alphabet (charset policy).
    #[error("text contains characters outside the Spanish alphabet: {}", join_chars(.0))]
    InvalidCharacters(Vec<char>),

    /// Tokens missing from the word list (word-list policy).
    #[error("unknown Spanish words: {}", .0.join(", "))]
    UnknownWords(Vec<String>),

    /// Short-circuit rejection when the word-list policy sees a script it
    /// cannot look up, reported as one notice rather than a word list.
    #[error("non-Latin characters detected")]
    NonLatinInput,

    /// The configured word-list file does not exist. Surfaced as a distinct
    /// configuration error instead of silently checking against an empty
    /// set that would reject everything.
    #[error("Spanish word-list file not found: {0}")]
    WordListMissing(PathBuf),

    /// The word-list file exists but could not be read.
    #[error("failed to read Spanish word list {path}: {source}")]
    WordListUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },
}

fn join_chars(chars: &[char]) -> String {
    chars
        .iter()
        .map(|c| format!("'{c}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

// ---------------------------------------------------------------------------
// InputValidator
// ---------------------------------------------------------------------------

/// The configured validation policy, ready to run against submissions.
#[derive(Debug)]
pub enum InputValidator {
    /// No validation.
    Disabled,
    /// Character-class policy.
    Charset,
    /// Dictionary policy with its preloaded word set.
    WordList(SpanishWordList),
}

impl InputValidator {
    /// Build the validator selected by `config`.
    ///
    /// For the word-list policy the file is loaded once here; a missing or
    /// unreadable file fails construction.
    pub fn from_config(config: &ValidationConfig, paths: &AppPaths) -> Result<Self, ValidationError> {
        match config.policy {
            ValidationPolicy::Off => Ok(Self::Disabled),
            ValidationPolicy::Charset => Ok(Self::Charset),
            ValidationPolicy::WordList => {
                let path = config
                    .wordlist_file
                    .clone()
                    .unwrap_or_else(|| paths.wordlist_file.clone());
                Ok(Self::WordList(SpanishWordList::load(&path)?))
            }
        }
    }

    /// Run the policy against `text`.
    pub fn check(&self, text: &str) -> Result<(), ValidationError> {
        match self {
            Self::Disabled => Ok(()),
            Self::Charset => check_charset(text),
            Self::WordList(words) => words.check(text),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
