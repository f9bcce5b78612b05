//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{CorrigoArgs, OutputFormat};
use crate::error::Result;

/// Result structure for file correction.
#[derive(Debug, Serialize, Deserialize)]
pub struct FileCorrectionResult {
    pub input: String,
    pub output: String,
    pub lines: usize,
    pub duration_ms: u64,
}

/// Result structure for interactive text correction.
#[derive(Debug, Serialize, Deserialize)]
pub struct TextCorrectionResult {
    pub original: String,
    pub corrected: String,
    pub duration_ms: u64,
}

/// Result structure for word suggestions.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestionResult {
    pub word: String,
    pub language: String,
    pub suggestions: Vec<String>,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &CorrigoArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &CorrigoArgs) -> Result<()> {
    if args.verbosity() > 0 && !message.is_empty() {
        println!("{message}");
    }

    let value = serde_json::to_value(result)?;
    match value {
        serde_json::Value::Object(map) => {
            for (key, field) in map {
                match field {
                    serde_json::Value::Array(items) => {
                        println!("{key}:");
                        for item in items {
                            println!("  - {}", render_scalar(&item));
                        }
                    }
                    other => println!("{key}: {}", render_scalar(&other)),
                }
            }
        }
        other => println!("{}", render_scalar(&other)),
    }

    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &CorrigoArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

fn render_scalar(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_structs_serialize() {
        let result = SuggestionResult {
            word: "datset".to_string(),
            language: "en".to_string(),
            suggestions: vec!["dataset".to_string()],
        };

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"word\":\"datset\""));
        assert!(json.contains("\"suggestions\":[\"dataset\"]"));
    }

    #[test]
    fn test_render_scalar() {
        assert_eq!(
            render_scalar(&serde_json::Value::String("plain".to_string())),
            "plain"
        );
        assert_eq!(render_scalar(&serde_json::json!(42)), "42");
    }
}
