//! Frequency vocabulary built from a training corpus.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::OnceLock;

use ahash::AHashMap;
use regex::Regex;

use crate::error::{CorrigoError, Result};

/// Chunk size for incremental corpus reads.
const READ_CHUNK_SIZE: usize = 64 * 1024;

/// The `\w+` token pattern: maximal runs of Unicode word characters.
pub(crate) fn word_pattern() -> &'static Regex {
    static WORD: OnceLock<Regex> = OnceLock::new();
    WORD.get_or_init(|| Regex::new(r"\w+").expect("word pattern should be valid"))
}

/// A vocabulary mapping lower-cased words to their occurrence counts in a
/// training corpus. Built once at corrector construction and read-only
/// afterwards; corrections never feed back into the counts.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    /// Words and their occurrence counts (keys are lower-cased).
    counts: AHashMap<String, u64>,
    /// Sum of all counts. Greater than zero after a successful load.
    total_count: u64,
}

impl Vocabulary {
    /// Build a vocabulary from corpus text.
    ///
    /// Tokenizes the text into maximal runs of word characters, lower-cases
    /// every token, and counts occurrences. A corpus with no recognizable
    /// tokens is an initialization error.
    pub fn from_corpus(text: &str) -> Result<Self> {
        let mut counts: AHashMap<String, u64> = AHashMap::new();
        let mut total_count = 0u64;

        for token in word_pattern().find_iter(text) {
            let word = token.as_str().to_lowercase();
            *counts.entry(word).or_insert(0) += 1;
            total_count += 1;
        }

        if total_count == 0 {
            return Err(CorrigoError::corpus(
                "corpus contains no recognizable word tokens",
            ));
        }

        Ok(Vocabulary {
            counts,
            total_count,
        })
    }

    /// Load a vocabulary from a corpus file.
    ///
    /// The file is read incrementally in bounded-size chunks before the
    /// concatenated text goes through the same tokenizer as [`from_corpus`].
    /// A missing or unreadable file is an initialization error.
    ///
    /// [`from_corpus`]: Vocabulary::from_corpus
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            CorrigoError::corpus(format!("cannot read corpus {}: {e}", path.display()))
        })?;
        let mut reader = BufReader::new(file);

        let mut buffer = Vec::new();
        let mut chunk = vec![0u8; READ_CHUNK_SIZE];
        loop {
            let n = reader.read(&mut chunk)?;
            if n == 0 {
                break;
            }
            buffer.extend_from_slice(&chunk[..n]);
        }

        let text = String::from_utf8(buffer).map_err(|e| {
            CorrigoError::corpus(format!("corpus {} is not valid UTF-8: {e}", path.display()))
        })?;

        Self::from_corpus(&text)
    }

    /// Check if a word exists in the vocabulary. The lookup is exact: keys
    /// are lower-cased, so cased input only matches when already lower-case.
    pub fn contains(&self, word: &str) -> bool {
        self.counts.contains_key(word)
    }

    /// Get the occurrence count of a word (0 for unknown words).
    pub fn count(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Get the probability of a word (`count / total_count`).
    ///
    /// Unknown words have probability 0; this is a total function and never
    /// an error. Division is well-defined because `total_count > 0` is a load
    /// invariant.
    pub fn probability(&self, word: &str) -> f64 {
        self.count(word) as f64 / self.total_count as f64
    }

    /// Iterate over the vocabulary words.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    /// Get the number of unique words.
    pub fn word_count(&self) -> usize {
        self.counts.len()
    }

    /// Get the total occurrence count across all words.
    pub fn total_count(&self) -> u64 {
        self.total_count
    }
}
