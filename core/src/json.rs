//! JSON object decoding of downloaded response bodies.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::FetchError;

/// A parsed top-level JSON object.
pub type JsonObject = serde_json::Map<String, Value>;

/// Read the downloaded body at `location` and parse it as a JSON object.
///
/// The file is removed once read — the JSON-flavored calls consume their
/// download. Read failures, malformed JSON, and non-object top-level
/// values all surface as `JsonDecode`.
pub fn decode_object(location: &Path) -> Result<JsonObject, FetchError> {
    let bytes = fs::read(location)
        .map_err(|err| FetchError::JsonDecode(format!("read {}: {err}", location.display())))?;
    let _ = fs::remove_file(location);

    let value: Value =
        serde_json::from_slice(&bytes).map_err(|err| FetchError::JsonDecode(err.to_string()))?;
    match value {
        Value::Object(object) => Ok(object),
        other => Err(FetchError::JsonDecode(format!(
            "expected a top-level JSON object, got {}",
            kind_of(&other)
        ))),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn write_body(bytes: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(format!("fetch-json-{}.body", uuid::Uuid::new_v4()));
        fs::write(&path, bytes).unwrap();
        path
    }

    #[test]
    fn object_body_decodes() {
        let path = write_body(br#"{"name":"fetch","count":3}"#);
        let object = decode_object(&path).unwrap();
        assert_eq!(object["name"], "fetch");
        assert_eq!(object["count"], 3);
    }

    #[test]
    fn decoded_body_file_is_consumed() {
        let path = write_body(br#"{}"#);
        decode_object(&path).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn array_body_is_a_decode_error() {
        let path = write_body(br#"[1,2,3]"#);
        let err = decode_object(&path).unwrap_err();
        assert!(matches!(err, FetchError::JsonDecode(msg) if msg.contains("an array")));
    }

    #[test]
    fn scalar_body_is_a_decode_error() {
        let path = write_body(br#""just a string""#);
        let err = decode_object(&path).unwrap_err();
        assert!(matches!(err, FetchError::JsonDecode(_)));
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let path = write_body(b"{not json");
        let err = decode_object(&path).unwrap_err();
        assert!(matches!(err, FetchError::JsonDecode(_)));
    }

    #[test]
    fn missing_file_is_a_decode_error() {
        let path = std::env::temp_dir().join("fetch-json-does-not-exist.body");
        let err = decode_object(&path).unwrap_err();
        assert!(matches!(err, FetchError::JsonDecode(msg) if msg.contains("read")));
    }
}
