//! Document correction pipeline.
//!
//! Corrects word tokens in place while copying everything between them
//! (punctuation, whitespace, digits-only runs are tokens too and pass through
//! the corrector's own policies) verbatim, so a corrected document keeps its
//! original layout. File processing validates the document against the
//! selected language, corrects lines in parallel on a dedicated thread pool,
//! and writes the result next to the input unless told otherwise.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::error::{CorrigoError, Result};
use crate::language::detector::Language;
use crate::spelling::corrector::SpellingCorrector;
use crate::spelling::vocabulary::word_pattern;

/// Options for batch file processing.
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// Directory for the corrected file (default: the input's directory).
    pub output_dir: Option<PathBuf>,
    /// Output file stem, keeping the input extension (default:
    /// `<stem>_corrected`).
    pub output_name: Option<String>,
    /// Worker threads for line processing (default: all logical CPUs).
    pub threads: Option<usize>,
}

/// Correct the word tokens of a single line, preserving punctuation and
/// whitespace layout exactly.
pub fn correct_line(corrector: &SpellingCorrector, line: &str) -> String {
    let mut output = String::with_capacity(line.len());
    let mut last_end = 0;

    for token in word_pattern().find_iter(line) {
        output.push_str(&line[last_end..token.start()]);
        output.push_str(&corrector.correct(token.as_str()));
        last_end = token.end();
    }
    output.push_str(&line[last_end..]);

    output
}

/// Correct a whole text sequentially, line by line.
pub fn correct_text(corrector: &SpellingCorrector, text: &str) -> String {
    let lines: Vec<String> = text
        .split('\n')
        .map(|line| correct_line(corrector, line))
        .collect();
    lines.join("\n")
}

/// Correct a whole text with lines processed in parallel. Lines are
/// independent; the shared corrector's caches make repeated words cheap
/// across workers.
pub fn correct_text_parallel(
    corrector: &SpellingCorrector,
    text: &str,
    threads: Option<usize>,
) -> Result<String> {
    let num_threads = threads.unwrap_or_else(num_cpus::get);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build()
        .map_err(|e| CorrigoError::other(format!("failed to build thread pool: {e}")))?;

    let lines: Vec<&str> = text.split('\n').collect();
    let corrected: Vec<String> = pool.install(|| {
        lines
            .par_iter()
            .map(|line| correct_line(corrector, line))
            .collect()
    });

    Ok(corrected.join("\n"))
}

/// Correct a document file and write the result.
///
/// The document must belong to the selected language: every alphabetic
/// character (ignoring punctuation, whitespace, and digits) has to come from
/// the language's alphabet, otherwise processing aborts with a language
/// error. Returns the path of the written file.
pub fn process_file(
    corrector: &SpellingCorrector,
    language: Language,
    input: &Path,
    options: &BatchOptions,
) -> Result<PathBuf> {
    let text = fs::read_to_string(input)?;

    if !language.covers(&text) {
        return Err(CorrigoError::language(format!(
            "{} contains characters outside the {} alphabet",
            input.display(),
            language.code()
        )));
    }

    let corrected = correct_text_parallel(corrector, &text, options.threads)?;

    let output_path = output_path(input, options);
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(&output_path, corrected)?;

    Ok(output_path)
}

/// Resolve the output path: `<stem>_corrected.<ext>` next to the input, with
/// the stem and directory overridable.
fn output_path(input: &Path, options: &BatchOptions) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());

    let mut name = match &options.output_name {
        Some(name) => name.clone(),
        None => format!("{stem}_corrected"),
    };
    if let Some(ext) = input.extension() {
        name.push('.');
        name.push_str(&ext.to_string_lossy());
    }

    let dir = match &options.output_dir {
        Some(dir) => dir.clone(),
        None => input.parent().map(Path::to_path_buf).unwrap_or_default(),
    };

    dir.join(name)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::spelling::vocabulary::Vocabulary;

    const SAMPLE: &str = "this is a sample dataset for testing testing";

    fn corrector() -> SpellingCorrector {
        SpellingCorrector::new(Vocabulary::from_corpus(SAMPLE).unwrap())
    }

    #[test]
    fn test_correct_line_preserves_layout() {
        let corrector = corrector();
        let line = "Thiss is  a datset, for testting!";

        assert_eq!(
            correct_line(&corrector, line),
            "This is  a dataset, for testing!"
        );
    }

    #[test]
    fn test_correct_line_leaves_punctuation_only_lines_alone() {
        let corrector = corrector();
        assert_eq!(correct_line(&corrector, "--- ... !!!"), "--- ... !!!");
        assert_eq!(correct_line(&corrector, ""), "");
    }

    #[test]
    fn test_correct_text_keeps_line_structure() {
        let corrector = corrector();
        let text = "firsst datset\n\nsecond testting\n";

        let corrected = correct_text(&corrector, text);
        assert_eq!(corrected.split('\n').count(), text.split('\n').count());
        assert!(corrected.contains("dataset"));
        assert!(corrected.ends_with('\n'));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let corrector = corrector();
        let text = "datset testting\nsamplle is a\nthiss for datset\n";

        let sequential = correct_text(&corrector, text);
        let parallel = correct_text_parallel(&corrector, text, Some(4)).unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_process_file_writes_corrected_output() {
        let corrector = corrector();
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("note.txt");
        fs::write(&input, "a datset for testting").unwrap();

        let output = process_file(&corrector, Language::En, &input, &BatchOptions::default())
            .unwrap();

        assert_eq!(output, dir.path().join("note_corrected.txt"));
        assert_eq!(
            fs::read_to_string(output).unwrap(),
            "a dataset for testing"
        );
    }

    #[test]
    fn test_process_file_honors_output_options() {
        let corrector = corrector();
        let dir = TempDir::new().unwrap();
        let out_dir = dir.path().join("out");
        let input = dir.path().join("note.txt");
        fs::write(&input, "datset").unwrap();

        let options = BatchOptions {
            output_dir: Some(out_dir.clone()),
            output_name: Some("fixed".to_string()),
            threads: Some(1),
        };
        let output = process_file(&corrector, Language::En, &input, &options).unwrap();

        assert_eq!(output, out_dir.join("fixed.txt"));
        assert!(output.exists());
    }

    #[test]
    fn test_process_file_rejects_foreign_script() {
        let corrector = corrector();
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("note.txt");
        fs::write(&input, "this has български text").unwrap();

        let err =
            process_file(&corrector, Language::En, &input, &BatchOptions::default()).unwrap_err();
        assert!(matches!(err, CorrigoError::Language(_)));
    }
}
