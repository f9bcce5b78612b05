//! Command line argument parsing for the Corrigo CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::language::detector::Language;

/// Corrigo - a frequency-weighted spelling corrector
#[derive(Parser, Debug, Clone)]
#[command(name = "corrigo")]
#[command(about = "A frequency-weighted spelling corrector with per-language dictionaries")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct CorrigoArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl CorrigoArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Correct a document file, or run an interactive correction loop
    Correct(CorrectArgs),

    /// Print ranked correction suggestions for a single word
    Suggest(SuggestArgs),
}

/// Arguments for the correct command
#[derive(Parser, Debug, Clone)]
pub struct CorrectArgs {
    /// Maximum edit distance for corrections
    #[arg(short = 'd', long, default_value = "2")]
    pub max_distance: usize,

    /// Language of the text
    #[arg(short, long, default_value = "en")]
    pub language: Language,

    /// Directory containing one <code>.txt corpus file per language
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,

    /// Input file to correct; without it an interactive loop starts
    #[arg(short = 'F', long = "file", value_name = "INPUT_FILE")]
    pub file: Option<PathBuf>,

    /// Output directory for the corrected file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Name for the output file (without extension)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Number of worker threads for file processing
    #[arg(short, long)]
    pub threads: Option<usize>,
}

/// Arguments for the suggest command
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    /// The word to look up
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Maximum edit distance for suggestions
    #[arg(short = 'd', long, default_value = "2")]
    pub max_distance: usize,

    /// Maximum number of suggestions to return
    #[arg(long, default_value = "5")]
    pub limit: usize,

    /// Force a language instead of detecting it from the word's script
    #[arg(short, long)]
    pub language: Option<Language>,

    /// Directory containing one <code>.txt corpus file per language
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_correct_file_command() {
        let args = CorrigoArgs::try_parse_from([
            "corrigo",
            "correct",
            "--max-distance",
            "3",
            "--language",
            "bg",
            "--file",
            "input.txt",
            "--output",
            "out",
        ])
        .unwrap();

        if let Command::Correct(correct_args) = args.command {
            assert_eq!(correct_args.max_distance, 3);
            assert_eq!(correct_args.language, Language::Bg);
            assert_eq!(correct_args.file, Some(PathBuf::from("input.txt")));
            assert_eq!(correct_args.output, Some(PathBuf::from("out")));
        } else {
            panic!("Expected Correct command");
        }
    }

    #[test]
    fn test_correct_defaults() {
        let args = CorrigoArgs::try_parse_from(["corrigo", "correct"]).unwrap();

        if let Command::Correct(correct_args) = args.command {
            assert_eq!(correct_args.max_distance, 2);
            assert_eq!(correct_args.language, Language::En);
            assert_eq!(correct_args.data_dir, PathBuf::from("data"));
            assert!(correct_args.file.is_none());
        } else {
            panic!("Expected Correct command");
        }
    }

    #[test]
    fn test_suggest_command() {
        let args =
            CorrigoArgs::try_parse_from(["corrigo", "suggest", "datset", "--limit", "3"]).unwrap();

        if let Command::Suggest(suggest_args) = args.command {
            assert_eq!(suggest_args.word, "datset");
            assert_eq!(suggest_args.limit, 3);
            assert!(suggest_args.language.is_none());
        } else {
            panic!("Expected Suggest command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        let args = CorrigoArgs::try_parse_from(["corrigo", "correct"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = CorrigoArgs::try_parse_from(["corrigo", "-vv", "correct"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args = CorrigoArgs::try_parse_from(["corrigo", "--quiet", "correct"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args =
            CorrigoArgs::try_parse_from(["corrigo", "--format", "json", "suggest", "word"])
                .unwrap();
        assert!(matches!(args.output_format, OutputFormat::Json));
    }
}
