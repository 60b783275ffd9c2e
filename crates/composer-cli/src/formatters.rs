//! Output formatters for structured CLI output.
//!
//! Catalog listings and status reports go through [`format_output`];
//! rendered documents and document JSON are printed verbatim by their
//! commands.

use anyhow::Result;
use colored::Colorize;
use composer_core::cli::OutputFormat;
use serde::Serialize;

/// Format data according to the specified output format.
///
/// # Errors
///
/// Returns an error if the data cannot be converted to JSON.
///
/// # Examples
///
/// ```
/// use composer_cli::formatters::format_output;
/// use composer_core::cli::OutputFormat;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Entry {
///     id: String,
///     category: String,
/// }
///
/// let entry = Entry {
///     id: "role".to_string(),
///     category: "content".to_string(),
/// };
///
/// let output = format_output(&entry, OutputFormat::Json)?;
/// assert!(output.contains("\"id\": \"role\""));
///
/// let output = format_output(&entry, OutputFormat::Text)?;
/// assert_eq!(output, "id: role\ncategory: content");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn format_output<T: Serialize>(data: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format(data),
        OutputFormat::Text => text::format(data),
        OutputFormat::Pretty => pretty::format(data),
    }
}

/// JSON output formatting.
pub mod json {
    use super::{Result, Serialize};

    /// Format data as JSON with 2-space indentation.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(data)?)
    }
}

/// Plain text output for scripts.
///
/// Objects become `key: value` lines. A list of objects becomes one
/// tab-separated row per item, which keeps `cut` and `awk` usable.
pub mod text {
    use super::{Result, Serialize};
    use serde_json::{Map, Value};

    /// Format data as plain text.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        let value = serde_json::to_value(data)?;
        Ok(match &value {
            Value::Array(items) => items.iter().map(row).collect::<Vec<_>>().join("\n"),
            Value::Object(obj) => id_first(obj)
                .map(|(k, v)| format!("{k}: {}", scalar(v)))
                .collect::<Vec<_>>()
                .join("\n"),
            other => scalar(other),
        })
    }

    fn row(item: &Value) -> String {
        match item {
            Value::Object(obj) => id_first(obj)
                .map(|(_, v)| scalar(v))
                .collect::<Vec<_>>()
                .join("\t"),
            other => scalar(other),
        }
    }

    // Columns follow field order, except that id always leads.
    fn id_first(obj: &Map<String, Value>) -> impl Iterator<Item = (&String, &Value)> {
        obj.iter()
            .filter(|(k, _)| k.as_str() == "id")
            .chain(obj.iter().filter(|(k, _)| k.as_str() != "id"))
    }

    fn scalar(value: &Value) -> String {
        match value {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            Value::Array(items) => items.iter().map(scalar).collect::<Vec<_>>().join(","),
            Value::Object(_) | Value::Bool(_) | Value::Number(_) => value.to_string(),
        }
    }
}

/// Pretty (human-readable) output formatting.
pub mod pretty {
    use super::{Colorize, Result, Serialize};
    use serde_json::Value;

    /// Format data as colorized, human-readable output.
    ///
    /// Lists of objects are shown as blocks headed by their `id` field.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        let value = serde_json::to_value(data)?;
        Ok(match &value {
            Value::Array(items) if items.is_empty() => "(none)".dimmed().to_string(),
            Value::Array(items) => items
                .iter()
                .map(block)
                .collect::<Vec<_>>()
                .join("\n\n"),
            Value::Object(_) => fields(&value, 0),
            other => inline(other),
        })
    }

    fn block(item: &Value) -> String {
        let Value::Object(obj) = item else {
            return inline(item);
        };
        let mut out = obj
            .get("id")
            .and_then(Value::as_str)
            .map_or_else(String::new, |id| format!("{} {}", "•".cyan(), id.bold()));
        let rest = obj
            .iter()
            .filter(|(k, _)| k.as_str() != "id")
            .map(|(k, v)| line(k, v, 1))
            .collect::<Vec<_>>()
            .join("\n");
        if !rest.is_empty() {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(&rest);
        }
        out
    }

    fn fields(value: &Value, indent: usize) -> String {
        match value {
            Value::Object(obj) => obj
                .iter()
                .map(|(k, v)| line(k, v, indent))
                .collect::<Vec<_>>()
                .join("\n"),
            other => format!("{}{}", "  ".repeat(indent), inline(other)),
        }
    }

    fn line(key: &str, value: &Value, indent: usize) -> String {
        let pad = "  ".repeat(indent);
        match value {
            Value::Object(obj) if !obj.is_empty() => {
                format!("{pad}{}:\n{}", key.blue().bold(), fields(value, indent + 1))
            }
            _ => format!("{pad}{}: {}", key.blue().bold(), inline(value)),
        }
    }

    fn inline(value: &Value) -> String {
        match value {
            Value::Null => "-".dimmed().to_string(),
            Value::Bool(b) => b.to_string().yellow().to_string(),
            Value::Number(n) => n.to_string().cyan().to_string(),
            Value::String(s) if s.is_empty() => "\"\"".dimmed().to_string(),
            Value::String(s) => s.green().to_string(),
            Value::Array(items) if items.is_empty() => "[]".dimmed().to_string(),
            Value::Array(items) => items.iter().map(inline).collect::<Vec<_>>().join(", "),
            Value::Object(_) => value.to_string(),
        }
    }
}
