// src/tools/schema.rs
//! Small builders for the strict JSON schemas handed to the provider, plus
//! the helpers the pipeline needs to reason about them.

use serde_json::{Map, Value, json};

pub fn string() -> Value {
    json!({ "type": "string" })
}

pub fn integer(minimum: i64, maximum: i64) -> Value {
    json!({ "type": "integer", "minimum": minimum, "maximum": maximum })
}

pub fn one_of(values: &[&str]) -> Value {
    json!({ "type": "string", "enum": values })
}

pub fn array_of(items: Value, min_items: usize, max_items: usize) -> Value {
    json!({
        "type": "array",
        "items": items,
        "minItems": min_items,
        "maxItems": max_items
    })
}

pub fn string_array(min_items: usize, max_items: usize) -> Value {
    array_of(string(), min_items, max_items)
}

/// Closed object where every listed property is required.
pub fn object(properties: Vec<(&str, Value)>) -> Value {
    let required: Vec<&str> = properties.iter().map(|(name, _)| *name).collect();
    let properties: Map<String, Value> = properties
        .into_iter()
        .map(|(name, schema)| (name.to_string(), schema))
        .collect();

    json!({
        "type": "object",
        "properties": properties,
        "required": required,
        "additionalProperties": false
    })
}

pub fn nullable_string() -> Value {
    json!({ "type": ["string", "null"] })
}

/// Top-level tool schema: a closed object plus the `error` field the model
/// fills in when the images cannot be analyzed. Strict mode wants every
/// property required, so `error` is required and nullable.
pub fn tool_result(mut properties: Vec<(&str, Value)>) -> Value {
    properties.push(("error", nullable_string()));
    object(properties)
}

/// The all-empty instance of a schema: `""`, `0`, `false`, `[]`, and
/// objects with every required property emptied recursively. Nullable types
/// use their non-null member.
pub fn empty_instance(schema: &Value) -> Value {
    match primary_type(schema) {
        Some("object") => {
            let mut out = Map::new();
            for name in required_fields(schema) {
                out.insert(name.clone(), empty_instance(&schema["properties"][&name]));
            }
            Value::Object(out)
        }
        Some("array") => Value::Array(Vec::new()),
        Some("integer") | Some("number") => json!(0),
        Some("boolean") => Value::Bool(false),
        Some("string") => Value::String(String::new()),
        _ => Value::Null,
    }
}

fn primary_type(schema: &Value) -> Option<&str> {
    match &schema["type"] {
        Value::String(name) => Some(name.as_str()),
        Value::Array(names) => names
            .iter()
            .filter_map(Value::as_str)
            .find(|name| *name != "null"),
        _ => None,
    }
}

fn is_nullable(schema: &Value) -> bool {
    match &schema["type"] {
        Value::String(name) => name == "null",
        Value::Array(names) => names.iter().any(|n| n == "null"),
        _ => false,
    }
}

pub fn required_fields(schema: &Value) -> Vec<String> {
    schema["required"]
        .as_array()
        .map(|names| {
            names
                .iter()
                .filter_map(|n| n.as_str().map(|s| s.to_string()))
                .collect()
        })
        .unwrap_or_default()
}

/// Top-level required fields absent from `result`. An absent nullable field
/// reads the same as `null` and is not reported.
pub fn missing_required(schema: &Value, result: &Map<String, Value>) -> Vec<String> {
    required_fields(schema)
        .into_iter()
        .filter(|name| !result.contains_key(name))
        .filter(|name| !is_nullable(&schema["properties"][name]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Value {
        tool_result(vec![
            ("score", integer(0, 100)),
            ("summary", string()),
            ("tags", string_array(0, 3)),
            (
                "detail",
                object(vec![("label", one_of(&["a", "b"])), ("count", integer(0, 9))]),
            ),
        ])
    }

    #[test]
    fn tool_result_is_closed_and_error_is_nullable() {
        let schema = sample();
        assert_eq!(schema["additionalProperties"], json!(false));
        assert_eq!(
            schema["properties"]["error"],
            json!({ "type": ["string", "null"] })
        );
        assert_eq!(
            required_fields(&schema),
            vec!["score", "summary", "tags", "detail", "error"]
        );
    }

    #[test]
    fn empty_instance_zeroes_everything() {
        assert_eq!(
            empty_instance(&sample()),
            json!({
                "score": 0,
                "summary": "",
                "tags": [],
                "detail": { "label": "", "count": 0 },
                "error": ""
            })
        );
    }

    #[test]
    fn reports_missing_required_fields() {
        let result = json!({ "score": 10, "tags": [] });
        let missing = missing_required(&sample(), result.as_object().unwrap());
        assert_eq!(missing, vec!["summary", "detail"]);
    }

    #[test]
    fn nullable_types_resolve_to_their_non_null_member() {
        assert_eq!(empty_instance(&nullable_string()), json!(""));
        assert_eq!(empty_instance(&json!({ "type": ["null", "integer"] })), json!(0));
        assert_eq!(empty_instance(&json!({ "type": "null" })), Value::Null);
    }
}
