//! Canonical JSON text: keys sorted at every level, four-space indentation

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Serializer, Value};

use crate::error::{CheckError, Result};

const INDENT: &[u8] = b"    ";

pub fn to_canonical_json(value: &Value) -> Result<String> {
    let sorted = sort_keys(value);
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    sorted
        .serialize(&mut serializer)
        .map_err(|err| CheckError::ParseError(format!("cannot serialize metadata: {err}")))?;
    String::from_utf8(buf)
        .map_err(|err| CheckError::ParseError(format!("metadata is not valid UTF-8: {err}")))
}

/// Rebuild every object with its keys inserted in sorted order, so the text
/// is sorted whichever map representation serde_json was built with.
fn sort_keys(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            let mut sorted = Map::new();
            for key in keys {
                sorted.insert(key.clone(), sort_keys(&map[key]));
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(sort_keys).collect()),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sorted_and_indented() {
        let value = json!({"title": "T", "category": "Maps", "nested": {"b": 1, "a": []}});
        let text = to_canonical_json(&value).unwrap();
        assert_eq!(
            text,
            "{\n    \"category\": \"Maps\",\n    \"nested\": {\n        \"a\": [],\n        \"b\": 1\n    },\n    \"title\": \"T\"\n}"
        );
    }

    #[test]
    fn test_deterministic() {
        let value = json!({"z": [3, 2, 1], "a": {"y": true, "x": null}});
        assert_eq!(to_canonical_json(&value).unwrap(), to_canonical_json(&value).unwrap());
    }
}
