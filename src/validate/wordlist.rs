//! Dictionary validation policy backed by a flat word-list file.
//!
//! The file holds one Spanish word per line and is loaded once into a
//! case-sensitive set; lookups case-fold the token instead. Digits and
//! punctuation are stripped before tokenisation, but non-Latin letters
//! short-circuit the whole check: there is no point looking Thai or Chinese
//! text up in a Spanish word list, so that case is reported as a single
//! "non-Latin characters detected" notice rather than a list of unknown
//! words.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use super::ValidationError;

// ---------------------------------------------------------------------------
// SpanishWordList
// ---------------------------------------------------------------------------

/// A preloaded set of known Spanish words.
#[derive(Debug)]
pub struct SpanishWordList {
    words: HashSet<String>,
    path: PathBuf,
}

impl SpanishWordList {
    /// Load the word list from `path`, one word per line; blank lines are
    /// skipped and surrounding whitespace trimmed.
    ///
    /// A missing file is a configuration error, not an empty set — an empty
    /// set would silently reject every submission.
    pub fn load(path: &Path) -> Result<Self, ValidationError> {
        if !path.exists() {
            return Err(ValidationError::WordListMissing(path.to_path_buf()));
        }
        let content =
            std::fs::read_to_string(path).map_err(|source| ValidationError::WordListUnreadable {
                path: path.to_path_buf(),
                source,
            })?;
        let words = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Ok(Self {
            words,
            path: path.to_path_buf(),
        })
    }

    /// The file this set was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of words in the set.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` when the file contained no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check that every token of `text` is a known Spanish word.
    ///
    /// Non-Latin letters anywhere in the text short-circuit to
    /// [`ValidationError::NonLatinInput`]. Otherwise the text is split on
    /// every non-alphabetic character (stripping digits and punctuation),
    /// each token is case-folded, and the distinct unknown tokens are
    /// reported in first-seen order.
    pub fn check(&self, text: &str) -> Result<(), ValidationError> {
        if text.chars().any(is_non_latin) {
            return Err(ValidationError::NonLatinInput);
        }

        let mut unknown: Vec<String> = Vec::new();
        for token in text.split(|c: char| !c.is_alphabetic()) {
            if token.is_empty() {
                continue;
            }
            let folded = token.to_lowercase();
            if !self.words.contains(&folded) && !unknown.contains(&folded) {
                unknown.push(folded);
            }
        }

        if unknown.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::UnknownWords(unknown))
        }
    }
}

/// Returns `true` for alphabetic characters outside the Latin blocks
/// (Basic Latin, Latin-1 Supplement, Latin Extended-A/B).
#[inline]
fn is_non_latin(c: char) -> bool {
    c.is_alphabetic() && (c as u32) > 0x024F
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn word_list(words: &str) -> (SpanishWordList, tempfile::TempDir) {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("words.txt");
        let mut file = std::fs::File::create(&path).expect("create");
        write!(file, "{words}").expect("write");
        (SpanishWordList::load(&path).expect("load"), dir)
    }

    #[test]
    fn missing_file_is_a_distinct_error() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("no-such-file.txt");
        let err = SpanishWordList::load(&path).unwrap_err();
        assert!(matches!(err, ValidationError::WordListMissing(_)));
    }

    #[test]
    fn loads_one_word_per_line() {
        let (list, _dir) = word_list("hola\nmundo\n\n  adiós  \n");
        assert_eq!(list.len(), 3);
        assert!(!list.is_empty());
    }

    #[test]
    fn known_words_are_accepted() {
        let (list, _dir) = word_list("hola\nmundo");
        assert!(list.check("hola mundo").is_ok());
    }

    #[test]
    fn lookup_is_case_folded() {
        let (list, _dir) = word_list("hola\nmundo");
        assert!(list.check("Hola MUNDO").is_ok());
    }

    #[test]
    fn unknown_words_are_reported_folded() {
        let (list, _dir) = word_list("hola");
        let err = list.check("Hola Tierra").unwrap_err();
        match err {
            ValidationError::UnknownWords(words) => assert_eq!(words, vec!["tierra"]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn digits_and_punctuation_are_stripped() {
        let (list, _dir) = word_list("hola\nmundo");
        assert!(list.check("¡hola, mundo! 42").is_ok());
    }

    #[test]
    fn non_latin_text_short_circuits() {
        let (list, _dir) = word_list("hola");
        let err = list.check("hola สวัสดี").unwrap_err();
        assert!(matches!(err, ValidationError::NonLatinInput));
    }

    #[test]
    fn accented_spanish_is_still_latin() {
        let (list, _dir) = word_list("niño\ncomió");
        assert!(list.check("niño comió").is_ok());
    }

    #[test]
    fn duplicate_unknowns_reported_once() {
        let (list, _dir) = word_list("hola");
        let err = list.check("foo hola foo Foo").unwrap_err();
        match err {
            ValidationError::UnknownWords(words) => assert_eq!(words, vec!["foo"]),
            other => panic!("unexpected error: {other}"),
        }
    }
}
