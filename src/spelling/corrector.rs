//! Spelling corrector with tiered candidate search and result caching.
//!
//! The corrector owns a frequency [`Vocabulary`] plus two mutable caches: a
//! correction cache (word → confirmed correction) and a candidate cache
//! (word → ranked candidate list). Both caches are keyed by the lower-cased
//! word, populated lazily, and kept for the lifetime of the corrector. They
//! sit behind [`RwLock`]s so one corrector can be shared across worker
//! threads; concurrent misses on the same key may compute overlapping entries
//! and the last insert wins with an identical value.

use ahash::AHashMap;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::error::{CorrigoError, Result};
use crate::spelling::case::apply_case;
use crate::spelling::distance::{damerau_levenshtein, length_lower_bound};
use crate::spelling::vocabulary::Vocabulary;

/// Words below this length bypass correction entirely. Edit-distance search
/// over one- and two-character tokens is too ambiguous without a language
/// model.
const MIN_WORD_LEN: usize = 3;

/// Configuration for the spelling corrector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrectorConfig {
    /// Maximum edit distance tier to search before giving up. Must be at
    /// least 1.
    pub max_distance: usize,
    /// Maximum number of suggestions surfaced by the service layer.
    pub max_suggestions: usize,
}

impl Default for CorrectorConfig {
    fn default() -> Self {
        CorrectorConfig {
            max_distance: 2,
            max_suggestions: 5,
        }
    }
}

/// Statistics about a corrector instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrectorStats {
    /// Number of unique words in the vocabulary.
    pub vocabulary_words: usize,
    /// Total occurrence count across the vocabulary.
    pub total_count: u64,
    /// Number of memoized correction decisions.
    pub cached_corrections: usize,
    /// Number of memoized candidate lists.
    pub cached_candidate_lists: usize,
}

/// Dictionary-based spelling corrector.
pub struct SpellingCorrector {
    vocabulary: Vocabulary,
    config: CorrectorConfig,
    corrections: RwLock<AHashMap<String, String>>,
    candidate_lists: RwLock<AHashMap<String, Vec<String>>>,
}

impl SpellingCorrector {
    /// Create a corrector over the given vocabulary with the default
    /// configuration.
    pub fn new(vocabulary: Vocabulary) -> Self {
        SpellingCorrector {
            vocabulary,
            config: CorrectorConfig::default(),
            corrections: RwLock::new(AHashMap::new()),
            candidate_lists: RwLock::new(AHashMap::new()),
        }
    }

    /// Create a corrector with a custom configuration.
    pub fn with_config(vocabulary: Vocabulary, config: CorrectorConfig) -> Result<Self> {
        if config.max_distance == 0 {
            return Err(CorrigoError::config("max_distance must be at least 1"));
        }

        Ok(SpellingCorrector {
            vocabulary,
            config,
            corrections: RwLock::new(AHashMap::new()),
            candidate_lists: RwLock::new(AHashMap::new()),
        })
    }

    /// Create a corrector by loading a corpus file.
    pub fn from_corpus_file<P: AsRef<std::path::Path>>(
        path: P,
        config: CorrectorConfig,
    ) -> Result<Self> {
        let vocabulary = Vocabulary::load_from_file(path)?;
        Self::with_config(vocabulary, config)
    }

    /// The vocabulary backing this corrector.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// The active configuration.
    pub fn config(&self) -> &CorrectorConfig {
        &self.config
    }

    /// Return ranked correction candidates for a word, best first. Never
    /// empty: a word with no vocabulary match at any configured distance
    /// returns itself as the sole candidate.
    ///
    /// Results for fuzzy lookups are memoized in the candidate cache keyed by
    /// the lower-cased word; exact vocabulary hits short-circuit without a
    /// cache write.
    pub fn candidates(&self, word: &str) -> Vec<String> {
        if self.vocabulary.contains(word) {
            return vec![word.to_string()];
        }

        let key = word.to_lowercase();
        if let Some(cached) = self.candidate_lists.read().get(&key) {
            return cached.clone();
        }

        let found = self.search(&key);
        self.candidate_lists.write().insert(key, found.clone());
        found
    }

    /// Return the most probable correction for a word, preserving its
    /// capitalization style. Words shorter than three characters are returned
    /// unchanged.
    pub fn correct(&self, word: &str) -> String {
        if word.chars().count() < MIN_WORD_LEN {
            return word.to_string();
        }

        let key = word.to_lowercase();
        if let Some(hit) = self.corrections.read().get(&key) {
            return apply_case(word, hit);
        }

        // Known words pass through untouched; exact matches need no
        // memoization.
        if self.vocabulary.contains(word) {
            return word.to_string();
        }

        let candidates = self.candidates(&key);
        let best = candidates
            .first()
            .cloned()
            .unwrap_or_else(|| key.clone());

        self.corrections.write().insert(key, best.clone());
        apply_case(word, &best)
    }

    /// Record an externally confirmed correction.
    ///
    /// Overwrites the correction cache entry for the lower-cased word. The
    /// candidate list is seeded with the confirmation when absent; otherwise
    /// any existing occurrence of the confirmed string is removed and the
    /// string reinserted at rank 0, so repeated confirmations progressively
    /// bias future suggestion order.
    pub fn confirm(&self, word: &str, correction: &str) {
        let key = word.to_lowercase();

        self.corrections
            .write()
            .insert(key.clone(), correction.to_string());

        let mut lists = self.candidate_lists.write();
        match lists.get_mut(&key) {
            Some(list) => {
                list.retain(|candidate| candidate != correction);
                list.insert(0, correction.to_string());
            }
            None => {
                lists.insert(key, vec![correction.to_string()]);
            }
        }
    }

    /// Get statistics about this corrector.
    pub fn stats(&self) -> CorrectorStats {
        CorrectorStats {
            vocabulary_words: self.vocabulary.word_count(),
            total_count: self.vocabulary.total_count(),
            cached_corrections: self.corrections.read().len(),
            cached_candidate_lists: self.candidate_lists.read().len(),
        }
    }

    /// Tiered vocabulary scan. Every vocabulary word's distance to `word` is
    /// computed once and bucketed; the lowest non-empty tier within
    /// `max_distance` wins, so a distance-1 match is never re-surfaced at
    /// distance 2. Ties within a tier rank by probability descending, then
    /// word ascending for determinism.
    fn search(&self, word: &str) -> Vec<String> {
        if self.vocabulary.contains(word) {
            return vec![word.to_string()];
        }

        let max_distance = self.config.max_distance;
        let mut tiers: Vec<Vec<&str>> = vec![Vec::new(); max_distance];

        for entry in self.vocabulary.words() {
            if length_lower_bound(word, entry) > max_distance {
                continue;
            }
            let distance = damerau_levenshtein(word, entry);
            if (1..=max_distance).contains(&distance) {
                tiers[distance - 1].push(entry);
            }
        }

        for tier in &mut tiers {
            if tier.is_empty() {
                continue;
            }
            // Frequency order equals probability order under a fixed total.
            tier.sort_by(|a, b| {
                self.vocabulary
                    .count(b)
                    .cmp(&self.vocabulary.count(a))
                    .then_with(|| a.cmp(b))
            });
            return tier.iter().map(|entry| entry.to_string()).collect();
        }

        vec![word.to_string()]
    }
}
