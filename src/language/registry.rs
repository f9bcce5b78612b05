//! Per-language corrector registry.

use std::path::PathBuf;
use std::sync::Arc;

use ahash::AHashMap;
use parking_lot::RwLock;

use crate::error::Result;
use crate::language::detector::Language;
use crate::spelling::corrector::{CorrectorConfig, SpellingCorrector};

/// Configuration for the corrector registry.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Directory containing one `<code>.txt` corpus file per language.
    pub data_dir: PathBuf,
    /// Corrector configuration applied to every language.
    pub corrector: CorrectorConfig,
}

impl RegistryConfig {
    /// Create a registry configuration for the given corpus directory with
    /// default corrector settings.
    pub fn new<P: Into<PathBuf>>(data_dir: P) -> Self {
        RegistryConfig {
            data_dir: data_dir.into(),
            corrector: CorrectorConfig::default(),
        }
    }
}

/// Holds one corrector per language, constructed lazily on first use and
/// never torn down. Instances are shared: every caller for the same language
/// gets the same corrector, so cache state accumulates across requests.
pub struct CorrectorRegistry {
    config: RegistryConfig,
    correctors: RwLock<AHashMap<Language, Arc<SpellingCorrector>>>,
}

impl CorrectorRegistry {
    /// Create an empty registry.
    pub fn new(config: RegistryConfig) -> Self {
        CorrectorRegistry {
            config,
            correctors: RwLock::new(AHashMap::new()),
        }
    }

    /// Get the corrector for a language, loading its corpus on first use.
    ///
    /// A missing or unreadable corpus is a corpus error; the registry does
    /// not retry internally and callers should report the language as
    /// unavailable.
    pub fn get(&self, language: Language) -> Result<Arc<SpellingCorrector>> {
        if let Some(corrector) = self.correctors.read().get(&language) {
            return Ok(corrector.clone());
        }

        let path = self
            .config
            .data_dir
            .join(format!("{}.txt", language.code()));
        let corrector = Arc::new(SpellingCorrector::from_corpus_file(
            &path,
            self.config.corrector.clone(),
        )?);

        // First insert wins so concurrent loaders converge on one instance.
        let mut guard = self.correctors.write();
        let entry = guard.entry(language).or_insert(corrector);
        Ok(entry.clone())
    }

    /// Languages with an already-loaded corrector.
    pub fn loaded(&self) -> Vec<Language> {
        let mut languages: Vec<Language> = self.correctors.read().keys().copied().collect();
        languages.sort();
        languages
    }
}
