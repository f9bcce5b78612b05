//! Request-level operations over the corrector registry.
//!
//! The service exposes the two logical operations an embedding surfaces to
//! users: "suggest corrections for a word" and "confirm a correction". It
//! validates input and resolves the language before any corrector is touched,
//! so the core engine never sees empty or mixed-script words.

use serde::{Deserialize, Serialize};

use crate::error::{CorrigoError, Result};
use crate::language::detector::{Language, LanguageDetector};
use crate::language::registry::CorrectorRegistry;

/// Ranked suggestions for a word.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestResponse {
    /// The word as submitted (trimmed).
    pub word: String,
    /// Detected (or forced) language code.
    pub language: String,
    /// Ranked candidate corrections, best first, truncated to the configured
    /// maximum.
    pub suggestions: Vec<String>,
}

/// Acknowledgement of a confirmed correction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmResponse {
    /// The word the confirmation applies to (trimmed).
    pub word: String,
    /// The confirmed correction.
    pub correction: String,
    /// Language the confirmation was recorded under.
    pub language: String,
}

/// Spelling service over a corrector registry.
pub struct SpellService {
    registry: CorrectorRegistry,
    detector: LanguageDetector,
}

impl SpellService {
    /// Create a service over the given registry.
    pub fn new(registry: CorrectorRegistry) -> Self {
        SpellService {
            registry,
            detector: LanguageDetector::new(),
        }
    }

    /// The underlying registry.
    pub fn registry(&self) -> &CorrectorRegistry {
        &self.registry
    }

    /// Get ranked correction suggestions for a word.
    ///
    /// Errors on empty input, on scripts that match no supported language,
    /// and on languages whose corpus cannot be loaded.
    pub fn suggest(&self, word: &str) -> Result<SuggestResponse> {
        self.suggest_in(word, None)
    }

    /// Get suggestions with an optional forced language (skips detection).
    pub fn suggest_in(&self, word: &str, language: Option<Language>) -> Result<SuggestResponse> {
        let word = word.trim();
        if word.is_empty() {
            return Err(CorrigoError::invalid_input("no word provided"));
        }

        let language = match language {
            Some(language) => language,
            None => self.detect(word)?,
        };

        let corrector = self.registry.get(language)?;
        let mut suggestions = corrector.candidates(word);
        suggestions.truncate(corrector.config().max_suggestions);

        Ok(SuggestResponse {
            word: word.to_string(),
            language: language.code().to_string(),
            suggestions,
        })
    }

    /// Record a user-confirmed correction for a word.
    ///
    /// Both the word and the correction must be non-empty after trimming;
    /// the word's script selects the language. The cache update itself cannot
    /// fail.
    pub fn confirm(&self, word: &str, correction: &str) -> Result<ConfirmResponse> {
        let word = word.trim();
        let correction = correction.trim();
        if word.is_empty() {
            return Err(CorrigoError::invalid_input("no word provided"));
        }
        if correction.is_empty() {
            return Err(CorrigoError::invalid_input("no correction provided"));
        }

        let language = self.detect(word)?;
        let corrector = self.registry.get(language)?;
        corrector.confirm(word, correction);

        Ok(ConfirmResponse {
            word: word.to_string(),
            correction: correction.to_string(),
            language: language.code().to_string(),
        })
    }

    fn detect(&self, word: &str) -> Result<Language> {
        self.detector.detect(word).ok_or_else(|| {
            CorrigoError::language(format!(
                "the script of {word:?} does not match any supported language"
            ))
        })
    }
}
