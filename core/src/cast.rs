//! cast.rs
//! Shallow asciicast sanity check.
//!
//! A recording is newline-delimited JSON whose first line is a header object.
//! Only that first line is inspected; event lines stay opaque.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CastError {
    #[error("invalid input format: recording is empty")]
    EmptyInput,

    #[error("invalid input format: first line is not JSON: {0}")]
    HeaderNotJson(#[source] serde_json::Error),

    #[error("invalid input format: first line is a JSON {found}, expected an object")]
    HeaderNotObject { found: &'static str },
}

/// Header fields worth logging. Everything else is kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CastHeader {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Check that `text` is non-blank and that its first line is a JSON object.
pub fn validate_recording(text: &str) -> Result<CastHeader, CastError> {
    if text.trim().is_empty() {
        return Err(CastError::EmptyInput);
    }
    let first_line = text.split('\n').next().unwrap_or_default();
    let value: Value = serde_json::from_str(first_line).map_err(CastError::HeaderNotJson)?;

    let object = match value {
        Value::Object(object) => object,
        other => return Err(CastError::HeaderNotObject { found: json_kind(&other) }),
    };
    // Fields of unexpected type (e.g. "version": "2") are kept in `extra`.
    let mut header = CastHeader::default();
    for (key, value) in object {
        match (key.as_str(), value.as_u64()) {
            ("version", Some(n)) => header.version = Some(n),
            ("width", Some(n)) => header.width = Some(n),
            ("height", Some(n)) => header.height = Some(n),
            _ => {
                header.extra.insert(key, value);
            }
        }
    }
    Ok(header)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_v2_header() {
        let text = "{\"version\": 2, \"width\": 80, \"height\": 24, \"title\": \"demo\"}\n[0.1, \"o\", \"hi\"]\n";
        let header = validate_recording(text).unwrap();
        assert_eq!(header.version, Some(2));
        assert_eq!(header.width, Some(80));
        assert_eq!(header.height, Some(24));
        assert_eq!(header.extra.get("title"), Some(&Value::from("demo")));
    }

    #[test]
    fn crlf_first_line_is_accepted() {
        assert!(validate_recording("{\"version\":2}\r\n[0.5,\"o\",\"x\"]").is_ok());
    }

    #[test]
    fn rejects_blank_input() {
        assert!(matches!(validate_recording("  \n\t"), Err(CastError::EmptyInput)));
    }

    #[test]
    fn rejects_non_json_first_line() {
        assert!(matches!(validate_recording("Script started\n{}"), Err(CastError::HeaderNotJson(_))));
    }

    #[test]
    fn rejects_non_object_header() {
        assert!(matches!(
            validate_recording("[0.1, \"o\", \"x\"]\n"),
            Err(CastError::HeaderNotObject { found: "array" })
        ));
    }

    #[test]
    fn odd_field_types_stay_in_extra() {
        let header = validate_recording("{\"version\":\"2\"}").unwrap();
        assert_eq!(header.version, None);
        assert!(header.extra.contains_key("version"));
    }
}
