//! Parsing of JSON-valued free-text fields.
//!
//! MCP components keep `args` and `env` as JSON typed by hand into a text
//! box. Parsing is fallible and returns an explicit [`FieldJsonError`];
//! callers apply the documented fallback (an empty list or mapping) so a
//! malformed field never blocks the rest of the document.
//!
//! Accepted shapes:
//!
//! | field  | shapes                                                          |
//! |--------|-----------------------------------------------------------------|
//! | `args` | `["a", "b"]`                                                    |
//! | `env`  | `{"K": "V"}`, `[["K", "V"]]`, `[{"key": "K", "value": "V"}]`    |
//!
//! Numbers and booleans are converted to their JSON text; other scalar or
//! nested values are skipped. Blank input parses as empty.

use serde_json::{Map, Value};
use thiserror::Error;

/// Environment variables in the order the author wrote them.
pub type EnvMap = Map<String, Value>;

/// Keys that never reach a serialized mapping.
pub const RESERVED_KEYS: [&str; 3] = ["__proto__", "constructor", "prototype"];

/// Failure to interpret a JSON-valued field.
#[derive(Debug, Error)]
pub enum FieldJsonError {
    /// The text is not valid JSON.
    #[error("invalid JSON in field '{field}': {source}")]
    Syntax {
        /// Field name
        field: &'static str,
        /// Underlying parser error
        #[source]
        source: serde_json::Error,
    },

    /// The JSON is valid but has the wrong shape.
    #[error("field '{field}' must be {expected}")]
    Shape {
        /// Field name
        field: &'static str,
        /// Description of the accepted shape
        expected: &'static str,
    },
}

/// Returns `true` if `key` is one of [`RESERVED_KEYS`].
#[must_use]
pub fn is_reserved_key(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
}

/// Drops every reserved key from a list of pairs, keeping order.
///
/// # Examples
///
/// ```
/// use composer_engine::fields::filter_reserved_keys;
///
/// let pairs = vec![
///     ("__proto__".to_string(), "x".to_string()),
///     ("API_KEY".to_string(), "secret".to_string()),
/// ];
/// let kept = filter_reserved_keys(pairs);
/// assert_eq!(kept, vec![("API_KEY".to_string(), "secret".to_string())]);
/// ```
#[must_use]
pub fn filter_reserved_keys(pairs: Vec<(String, String)>) -> Vec<(String, String)> {
    pairs
        .into_iter()
        .filter(|(k, _)| !is_reserved_key(k))
        .collect()
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn parse_value(field: &'static str, text: &str) -> Result<Option<Value>, FieldJsonError> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(text)
        .map(Some)
        .map_err(|source| FieldJsonError::Syntax { field, source })
}

/// Parses an `args` field into a list of strings.
///
/// # Errors
///
/// Returns `FieldJsonError::Syntax` for invalid JSON and
/// `FieldJsonError::Shape` when the value is not an array.
///
/// # Examples
///
/// ```
/// use composer_engine::fields::parse_args;
///
/// assert_eq!(parse_args(r#"["-y", "pkg"]"#).unwrap(), vec!["-y", "pkg"]);
/// assert!(parse_args(r#"{"a": 1}"#).is_err());
/// assert!(parse_args("[oops").is_err());
/// ```
pub fn parse_args(text: &str) -> Result<Vec<String>, FieldJsonError> {
    match parse_value("args", text)? {
        None => Ok(Vec::new()),
        Some(Value::Array(items)) => Ok(items.iter().filter_map(scalar_text).collect()),
        Some(_) => Err(FieldJsonError::Shape {
            field: "args",
            expected: "a JSON array",
        }),
    }
}

fn env_pair(item: &Value) -> Option<(String, String)> {
    match item {
        Value::Array(pair) if pair.len() == 2 => {
            Some((scalar_text(&pair[0])?, scalar_text(&pair[1])?))
        }
        Value::Object(obj) => Some((
            scalar_text(obj.get("key")?)?,
            scalar_text(obj.get("value")?)?,
        )),
        _ => None,
    }
}

/// Parses an `env` field into a mapping of string values, reserved keys
/// removed.
///
/// Keys keep the author's order. Empty keys are dropped. When a key
/// repeats, it keeps its first position and the last value wins.
///
/// # Errors
///
/// Returns `FieldJsonError::Syntax` for invalid JSON and
/// `FieldJsonError::Shape` when the value is neither an array nor an object.
///
/// # Examples
///
/// ```
/// use composer_engine::fields::parse_env;
///
/// let env = parse_env(r#"{"__proto__": "x", "API_KEY": "secret"}"#).unwrap();
/// assert_eq!(env.len(), 1);
/// assert_eq!(env["API_KEY"], "secret");
///
/// let env = parse_env(r#"[["TOKEN", "abc"]]"#).unwrap();
/// assert_eq!(env["TOKEN"], "abc");
/// ```
pub fn parse_env(text: &str) -> Result<EnvMap, FieldJsonError> {
    let pairs: Vec<(String, String)> = match parse_value("env", text)? {
        None => Vec::new(),
        Some(Value::Array(items)) => items.iter().filter_map(env_pair).collect(),
        Some(Value::Object(obj)) => obj
            .iter()
            .filter_map(|(k, v)| Some((k.clone(), scalar_text(v)?)))
            .collect(),
        Some(_) => {
            return Err(FieldJsonError::Shape {
                field: "env",
                expected: "a JSON object or an array of [key, value] pairs",
            });
        }
    };

    Ok(filter_reserved_keys(pairs)
        .into_iter()
        .filter(|(k, _)| !k.is_empty())
        .map(|(k, v)| (k, Value::String(v)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args_blank_is_empty() {
        assert!(parse_args("").unwrap().is_empty());
        assert!(parse_args("   ").unwrap().is_empty());
        assert!(parse_args("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_args_mixed_scalars() {
        let args = parse_args(r#"["--port", 8080, true, null, {"x": 1}]"#).unwrap();
        assert_eq!(args, vec!["--port", "8080", "true"]);
    }

    #[test]
    fn test_parse_args_wrong_shape() {
        let err = parse_args(r#""just a string""#).unwrap_err();
        assert!(matches!(err, FieldJsonError::Shape { field: "args", .. }));
    }

    #[test]
    fn test_parse_args_syntax_error() {
        let err = parse_args("[\"unterminated").unwrap_err();
        assert!(matches!(err, FieldJsonError::Syntax { field: "args", .. }));
        assert!(err.to_string().contains("args"));
    }

    #[test]
    fn test_parse_env_pairs() {
        let env = parse_env(r#"[["A", "1"], ["B", 2], ["bad"], "skip"]"#).unwrap();
        assert_eq!(env.len(), 2);
        assert_eq!(env["A"], "1");
        assert_eq!(env["B"], "2");
    }

    #[test]
    fn test_parse_env_key_value_objects() {
        let env = parse_env(r#"[{"key": "HOST", "value": "db"}, {"key": "x"}]"#).unwrap();
        assert_eq!(env.len(), 1);
        assert_eq!(env["HOST"], "db");
    }

    #[test]
    fn test_parse_env_filters_reserved_keys() {
        let env = parse_env(
            r#"[["__proto__", "x"], ["constructor", "y"], ["prototype", "z"], ["OK", "1"]]"#,
        )
        .unwrap();
        assert_eq!(env.keys().collect::<Vec<_>>(), vec!["OK"]);
    }

    #[test]
    fn test_parse_env_drops_empty_keys() {
        let env = parse_env(r#"{"": "x", "K": "v"}"#).unwrap();
        assert_eq!(env.len(), 1);
    }

    #[test]
    fn test_parse_env_last_value_wins() {
        let env = parse_env(r#"[["K", "first"], ["K", "second"]]"#).unwrap();
        assert_eq!(env["K"], "second");
    }

    #[test]
    fn test_parse_env_keeps_author_order() {
        let env = parse_env(r#"{"Z": "1", "A": "2", "M": "3"}"#).unwrap();
        assert_eq!(env.keys().collect::<Vec<_>>(), vec!["Z", "A", "M"]);

        let env = parse_env(r#"[["Z", "1"], ["A", "2"], ["Z", "3"]]"#).unwrap();
        assert_eq!(env.keys().collect::<Vec<_>>(), vec!["Z", "A"]);
        assert_eq!(env["Z"], "3");
    }

    #[test]
    fn test_parse_env_wrong_shape() {
        assert!(matches!(
            parse_env("42").unwrap_err(),
            FieldJsonError::Shape { field: "env", .. }
        ));
    }

    #[test]
    fn test_is_reserved_key() {
        assert!(is_reserved_key("__proto__"));
        assert!(!is_reserved_key("PROTOTYPE"));
    }
}
