//! # Corrigo
//!
//! A frequency-weighted spelling corrector with per-language dictionaries.
//!
//! ## Features
//!
//! - Vocabulary built from a plain-text training corpus
//! - Damerau-Levenshtein candidate search over exact distance tiers
//! - Case-preserving correction with confirmation feedback
//! - Alphabet-based language detection and a per-language registry
//! - Layout-preserving document correction with parallel line processing

pub mod cli;
pub mod error;
pub mod language;
pub mod pipeline;
pub mod service;
pub mod spelling;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
