//! Lenient JSON helpers for rendering request and response payloads.
//!
//! Display code must not fail a render pass over a malformed body, so
//! every `safe_*` entry point hands the input back untouched when
//! conversion is impossible. The strict counterparts surface
//! [`CommonError`](crate::error::CommonError) for callers that need to
//! report the failure.

use serde::Serialize;

use crate::error::Result;

/// Outcome of a lenient parse: either a JSON document or the untouched
/// input text.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedJson<'a> {
    /// The input was valid JSON.
    Value(serde_json::Value),
    /// The input could not be parsed and is handed back as-is.
    Unchanged(&'a str),
}

impl ParsedJson<'_> {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, ParsedJson::Unchanged(_))
    }

    /// Collapses into a `Value`, keeping unparsed text as a JSON string.
    pub fn into_value(self) -> serde_json::Value {
        match self {
            ParsedJson::Value(value) => value,
            ParsedJson::Unchanged(raw) => serde_json::Value::String(raw.to_string()),
        }
    }
}

/// Parses `input` as JSON. Empty input and parse failures come back as
/// [`ParsedJson::Unchanged`].
pub fn safe_parse_json(input: &str) -> ParsedJson<'_> {
    if input.is_empty() {
        return ParsedJson::Unchanged(input);
    }

    match serde_json::from_str(input) {
        Ok(value) => ParsedJson::Value(value),
        Err(e) => {
            tracing::debug!("Body is not renderable as JSON: {}", e);
            ParsedJson::Unchanged(input)
        }
    }
}

/// Serializes `value` to JSON text, 2-space pretty-printed when
/// `indent` is set.
pub fn stringify_json<T: Serialize>(value: &T, indent: bool) -> Result<String> {
    let text = if indent {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(text)
}

/// Lenient wrapper around [`stringify_json`]; `None` marks a value that
/// could not be serialized, leaving the caller's value untouched.
pub fn safe_stringify_json<T: Serialize>(value: &T, indent: bool) -> Option<String> {
    match stringify_json(value, indent) {
        Ok(text) => Some(text),
        Err(e) => {
            tracing::debug!("JSON serialization failed: {}", e);
            None
        }
    }
}

/// Serializes `value` as JSON5 and strips the surrounding `{`/`}`
/// delimiters, yielding text for an object-body editor pane.
pub fn editor_fragment<T: Serialize>(value: &T) -> Result<String> {
    let text = json5::to_string(value)?;
    let trimmed = text.trim();
    let body = trimmed
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .unwrap_or(trimmed);
    Ok(body.trim().to_string())
}

/// Lenient wrapper around [`editor_fragment`].
pub fn safe_editor_fragment<T: Serialize>(value: &T) -> Option<String> {
    match editor_fragment(value) {
        Ok(text) => Some(text),
        Err(e) => {
            tracing::debug!("JSON5 conversion failed: {}", e);
            None
        }
    }
}
