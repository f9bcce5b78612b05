//! Spelling correction engine.
//!
//! This module provides the corrector core: a frequency vocabulary built from
//! a training corpus, Damerau-Levenshtein candidate search over exact distance
//! tiers, case-preserving correction, and the mutable correction/candidate
//! caches that let confirmed corrections bias future suggestions.

pub mod case;
pub mod corrector;
pub mod distance;
pub mod vocabulary;

// Re-export commonly used types
pub use case::apply_case;
pub use corrector::{CorrectorConfig, CorrectorStats, SpellingCorrector};
pub use distance::damerau_levenshtein;
pub use vocabulary::Vocabulary;
