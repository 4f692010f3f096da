//! Output rendering for command results.
//!
//! Results go to stdout either as human-readable text or as pretty JSON.

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Print `value` as JSON, or `text` in text mode.
pub fn print_result<T: Serialize>(format: OutputFormat, value: &T, text: &str) -> Result<()> {
    println!("{}", render(format, value, text)?);
    Ok(())
}

fn render<T: Serialize>(format: OutputFormat, value: &T, text: &str) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_text_ignores_value() {
        let rendered = render(OutputFormat::Text, &json!({"a": 1}), "plain").unwrap();
        assert_eq!(rendered, "plain");
    }

    #[test]
    fn test_render_json() {
        let rendered = render(OutputFormat::Json, &json!({"uri": "/spaces/1"}), "ignored").unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed["uri"], "/spaces/1");
    }
}
