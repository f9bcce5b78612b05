//! Case restoration for corrected words.

/// Apply the capitalization style of `original` onto `replacement`.
///
/// All-upper originals yield an upper-cased replacement; title-case originals
/// (first letter upper, rest lower, checked against the whole string) yield a
/// capitalized replacement; anything else yields a lower-cased replacement.
/// Candidate ranking always operates on lower-cased tokens, so this runs only
/// on cache hits and final correction output.
pub fn apply_case(original: &str, replacement: &str) -> String {
    if is_upper_case(original) {
        replacement.to_uppercase()
    } else if is_title_case(original) {
        capitalize(replacement)
    } else {
        replacement.to_lowercase()
    }
}

fn is_upper_case(word: &str) -> bool {
    !word.is_empty() && word == word.to_uppercase()
}

fn is_title_case(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            first.is_uppercase() && {
                let rest: String = chars.collect();
                rest == rest.to_lowercase()
            }
        }
        None => false,
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let rest: String = chars.collect();
            format!("{}{}", first.to_uppercase(), rest.to_lowercase())
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upper_case_preserved() {
        assert_eq!(apply_case("HELLO", "hello"), "HELLO");
        assert_eq!(apply_case("WRLD", "world"), "WORLD");
    }

    #[test]
    fn test_title_case_preserved() {
        assert_eq!(apply_case("Hello", "hello"), "Hello");
        assert_eq!(apply_case("Wrld", "world"), "World");
        assert_eq!(apply_case("Hello", "hello_corr"), "Hello_corr");
    }

    #[test]
    fn test_lower_case_preserved() {
        assert_eq!(apply_case("hello", "hello"), "hello");
        assert_eq!(apply_case("wrld", "World"), "world");
    }

    #[test]
    fn test_mixed_case_falls_back_to_lower() {
        // "heLLo" is neither all-upper nor title-case.
        assert_eq!(apply_case("heLLo", "Hello"), "hello");
    }

    #[test]
    fn test_single_character_original() {
        assert_eq!(apply_case("A", "a"), "A");
        assert_eq!(apply_case("a", "A"), "a");
    }

    #[test]
    fn test_cyrillic_case() {
        assert_eq!(apply_case("ЗДРАВЕЙ", "здравей"), "ЗДРАВЕЙ");
        assert_eq!(apply_case("Здравей", "здравей"), "Здравей");
        assert_eq!(apply_case("здравей", "ЗДРАВЕЙ"), "здравей");
    }
}
