//! Language classification by alphabet membership.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A supported correction language, defined by its lower-case alphabet.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    En,
    /// Bulgarian
    Bg,
}

impl Language {
    /// All supported languages, in detection order.
    pub const ALL: [Language; 2] = [Language::En, Language::Bg];

    /// The two-letter language code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Bg => "bg",
        }
    }

    /// Look up a language by its two-letter code.
    pub fn from_code(code: &str) -> Option<Language> {
        Self::ALL.iter().copied().find(|lang| lang.code() == code)
    }

    /// The lower-case alphabet of this language.
    pub fn alphabet(&self) -> &'static str {
        match self {
            Language::En => "abcdefghijklmnopqrstuvwxyz",
            Language::Bg => "абвгдежзийклмнопрстуфхцчшщъьюя",
        }
    }

    /// Check whether every alphabetic character of `text` belongs to this
    /// language's alphabet. Punctuation, whitespace, digits, and underscores
    /// are ignored.
    pub fn covers(&self, text: &str) -> bool {
        let alphabet = self.alphabet();
        text.chars()
            .filter(|ch| ch.is_alphabetic())
            .all(|ch| ch.to_lowercase().all(|lower| alphabet.contains(lower)))
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Classifies tokens into supported languages by alphabet membership.
#[derive(Debug, Clone, Default)]
pub struct LanguageDetector;

impl LanguageDetector {
    /// Create a detector over all supported languages.
    pub fn new() -> Self {
        LanguageDetector
    }

    /// Detect the language of a token.
    ///
    /// A token classifies as a language when every alphabetic character
    /// belongs to that language's alphabet and exactly one language
    /// qualifies. Mixed-script tokens, unrecognized scripts, and tokens with
    /// no alphabetic characters at all are undetermined (`None`).
    pub fn detect(&self, token: &str) -> Option<Language> {
        if !token.chars().any(|ch| ch.is_alphabetic()) {
            return None;
        }

        let mut matched = None;
        for language in Language::ALL {
            if language.covers(token) {
                if matched.is_some() {
                    return None;
                }
                matched = Some(language);
            }
        }
        matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::En.code(), "en");
        assert_eq!(Language::Bg.code(), "bg");
        assert_eq!(Language::from_code("en"), Some(Language::En));
        assert_eq!(Language::from_code("bg"), Some(Language::Bg));
        assert_eq!(Language::from_code("fr"), None);
    }

    #[test]
    fn test_detect_english() {
        let detector = LanguageDetector::new();
        assert_eq!(detector.detect("hello"), Some(Language::En));
        assert_eq!(detector.detect("Hello"), Some(Language::En));
    }

    #[test]
    fn test_detect_bulgarian() {
        let detector = LanguageDetector::new();
        assert_eq!(detector.detect("здравей"), Some(Language::Bg));
        assert_eq!(detector.detect("Здравей"), Some(Language::Bg));
    }

    #[test]
    fn test_mixed_script_is_undetermined() {
        let detector = LanguageDetector::new();
        assert_eq!(detector.detect("helloздравей"), None);
    }

    #[test]
    fn test_unknown_script_is_undetermined() {
        let detector = LanguageDetector::new();
        assert_eq!(detector.detect("日本語"), None);
    }

    #[test]
    fn test_no_alphabetic_characters_is_undetermined() {
        let detector = LanguageDetector::new();
        assert_eq!(detector.detect("123"), None);
        assert_eq!(detector.detect("_"), None);
        assert_eq!(detector.detect(""), None);
    }

    #[test]
    fn test_digits_and_underscores_ignored_in_detection() {
        let detector = LanguageDetector::new();
        assert_eq!(detector.detect("hello_123"), Some(Language::En));
    }

    #[test]
    fn test_covers_whole_text() {
        assert!(Language::En.covers("This is English text, with punctuation! 123"));
        assert!(!Language::En.covers("Това е български текст"));
        assert!(Language::Bg.covers("Това е български текст"));
        // No alphabetic content at all is vacuously covered.
        assert!(Language::En.covers("123 ... !!!"));
    }
}
