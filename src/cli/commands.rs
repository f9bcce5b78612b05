//! Command implementations for the Corrigo CLI.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{CorrigoError, Result};
use crate::language::detector::Language;
use crate::language::registry::{CorrectorRegistry, RegistryConfig};
use crate::pipeline::{self, BatchOptions};
use crate::service::SpellService;
use crate::spelling::corrector::CorrectorConfig;

/// Execute a CLI command.
pub fn execute_command(args: CorrigoArgs) -> Result<()> {
    match &args.command {
        Command::Correct(correct_args) => run_correct(correct_args.clone(), &args),
        Command::Suggest(suggest_args) => run_suggest(suggest_args.clone(), &args),
    }
}

fn build_registry(data_dir: &std::path::Path, config: CorrectorConfig) -> CorrectorRegistry {
    let mut registry_config = RegistryConfig::new(data_dir);
    registry_config.corrector = config;
    CorrectorRegistry::new(registry_config)
}

/// Correct a file, or run the interactive loop when no file was given.
fn run_correct(args: CorrectArgs, cli_args: &CorrigoArgs) -> Result<()> {
    let config = CorrectorConfig {
        max_distance: args.max_distance,
        ..Default::default()
    };
    let registry = build_registry(&args.data_dir, config);

    match &args.file {
        Some(input) => correct_file(&registry, &args, input, cli_args),
        None => interactive_loop(&registry, args.language, cli_args),
    }
}

fn correct_file(
    registry: &CorrectorRegistry,
    args: &CorrectArgs,
    input: &std::path::Path,
    cli_args: &CorrigoArgs,
) -> Result<()> {
    let corrector = registry.get(args.language)?;
    debug!(
        "loaded {} corpus: {} words",
        args.language,
        corrector.vocabulary().word_count()
    );

    let options = BatchOptions {
        output_dir: args.output.clone(),
        output_name: args.name.clone(),
        threads: args.threads,
    };

    let start_time = Instant::now();
    let output = pipeline::process_file(&corrector, args.language, input, &options)?;
    let duration = start_time.elapsed();

    let lines = std::fs::read_to_string(&output)?.split('\n').count();
    info!("corrected {} lines in {:?}", lines, duration);

    output_result(
        "File corrected successfully",
        &FileCorrectionResult {
            input: input.to_string_lossy().to_string(),
            output: output.to_string_lossy().to_string(),
            lines,
            duration_ms: duration.as_millis() as u64,
        },
        cli_args,
    )?;

    Ok(())
}

/// Interactive correction loop.
///
/// Text accumulates until a blank line, `!exit` quits, and `!change <code>`
/// switches language; an unavailable corpus is reported without exiting.
fn interactive_loop(
    registry: &CorrectorRegistry,
    mut language: Language,
    cli_args: &CorrigoArgs,
) -> Result<()> {
    let mut corrector = match registry.get(language) {
        Ok(corrector) => corrector,
        Err(e) => {
            eprintln!("The {language} dataset is not available: {e}");
            return Err(e);
        }
    };

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("Enter text (press Enter twice to process, '!change <lang>' to switch language, or '!exit' to quit):");
        io::stdout().flush()?;

        let mut text = String::new();
        loop {
            let line = match lines.next() {
                Some(line) => line?,
                None => return Ok(()), // EOF
            };
            let trimmed = line.trim();

            if trimmed == "!exit" {
                return Ok(());
            }
            if let Some(code) = trimmed.strip_prefix("!change") {
                match Language::from_code(code.trim()) {
                    Some(new_language) => match registry.get(new_language) {
                        Ok(new_corrector) => {
                            language = new_language;
                            corrector = new_corrector;
                            println!("Language switched to {language}.");
                        }
                        Err(_) => {
                            println!("The dataset file was not found or is not yet added.");
                        }
                    },
                    None => println!("Unsupported language code."),
                }
                text.clear();
                break;
            }
            if trimmed.is_empty() {
                break;
            }
            text.push_str(&line);
            text.push(' ');
        }

        let text = text.trim().to_string();
        if text.is_empty() {
            continue;
        }
        if !language.covers(&text) {
            println!("The text does not match the selected language.");
            continue;
        }

        let start_time = Instant::now();
        let corrected = pipeline::correct_text(&corrector, &text);
        let duration = start_time.elapsed();

        output_result(
            "",
            &TextCorrectionResult {
                original: text,
                corrected,
                duration_ms: duration.as_millis() as u64,
            },
            cli_args,
        )?;
    }
}

/// Print ranked suggestions for a single word.
fn run_suggest(args: SuggestArgs, cli_args: &CorrigoArgs) -> Result<()> {
    if args.limit == 0 {
        return Err(CorrigoError::invalid_input("limit must be at least 1"));
    }

    let config = CorrectorConfig {
        max_distance: args.max_distance,
        max_suggestions: args.limit,
    };
    let service = SpellService::new(build_registry(&args.data_dir, config));

    let response = service.suggest_in(&args.word, args.language)?;
    debug!(
        "{} suggestions for {:?} ({})",
        response.suggestions.len(),
        response.word,
        response.language
    );

    output_result(
        "Suggestions",
        &SuggestionResult {
            word: response.word,
            language: response.language,
            suggestions: response.suggestions,
        },
        cli_args,
    )?;

    Ok(())
}
