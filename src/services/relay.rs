// src/services/relay.rs
use crate::errors::WingmanError;
use crate::models::{Analysis, ProviderResponse};
use serde_json::{Map, Value};

/// Extracts the analysis object from a provider response.
///
/// String content is parsed as JSON, object content is used as is. The result
/// must be a JSON object. A non-empty `error` field marks a soft error; the
/// body is returned unchanged either way.
pub fn relay(raw: ProviderResponse) -> Result<Analysis, WingmanError> {
    let content = raw
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or(WingmanError::EmptyResponse)?;

    let parsed = match content {
        Value::Null => return Err(WingmanError::EmptyResponse),
        Value::String(text) if text.trim().is_empty() => return Err(WingmanError::EmptyResponse),
        Value::String(text) => {
            serde_json::from_str(&text).map_err(|e| WingmanError::Parse(e.to_string()))?
        }
        other => other,
    };

    let body: Map<String, Value> = match parsed {
        Value::Object(body) => body,
        other => {
            return Err(WingmanError::Parse(format!(
                "expected a JSON object, got {}",
                kind_of(&other)
            )));
        }
    };

    let soft_error = body
        .get("error")
        .and_then(Value::as_str)
        .filter(|message| !message.trim().is_empty())
        .map(str::to_string);

    Ok(match soft_error {
        Some(message) => Analysis::SoftError { message, body },
        None => Analysis::Success(body),
    })
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
    use super::*;
    use serde_json::json;

    #[test]
    fn string_content_is_parsed() {
        let raw = ProviderResponse::with_content(json!("{\"profileScore\": 72}"));
        let analysis = relay(raw).unwrap();
        assert_eq!(
            analysis,
            Analysis::Success(json!({ "profileScore": 72 }).as_object().unwrap().clone())
        );
    }

    #[test]
    fn object_content_is_used_directly() {
        let raw = ProviderResponse::with_content(json!({ "summary": "fine" }));
        let body = relay(raw).unwrap().into_body();
        assert_eq!(body["summary"], "fine");
    }

    #[test]
    fn populated_error_is_a_soft_error() {
        let content = json!({ "error": "Not a chat screenshot", "profileScore": 0, "roasts": [] });
        let raw = ProviderResponse::with_content(Value::String(content.to_string()));
        match relay(raw).unwrap() {
            Analysis::SoftError { message, body } => {
                assert_eq!(message, "Not a chat screenshot");
                assert_eq!(Value::Object(body), content);
            }
            other => panic!("expected soft error, got {:?}", other),
        }
    }

    #[test]
    fn blank_error_field_is_success() {
        let raw = ProviderResponse::with_content(json!({ "error": "", "summary": "ok" }));
        assert!(matches!(relay(raw).unwrap(), Analysis::Success(_)));

        let raw = ProviderResponse::with_content(json!({ "error": null, "summary": "ok" }));
        assert!(matches!(relay(raw).unwrap(), Analysis::Success(_)));
    }

    #[test]
    fn missing_content_is_empty_response() {
        assert!(matches!(
            relay(ProviderResponse::default()),
            Err(WingmanError::EmptyResponse)
        ));
        assert!(matches!(
            relay(ProviderResponse::with_content(json!(""))),
            Err(WingmanError::EmptyResponse)
        ));
        assert!(matches!(
            relay(ProviderResponse::with_content(Value::Null)),
            Err(WingmanError::EmptyResponse)
        ));
    }

    #[test]
    fn non_json_content_is_a_parse_error() {
        let err = relay(ProviderResponse::with_content(json!("not json"))).unwrap_err();
        assert!(matches!(err, WingmanError::Parse(_)));
    }

    #[test]
    fn non_object_json_is_a_parse_error() {
        let err = relay(ProviderResponse::with_content(json!("[1, 2]"))).unwrap_err();
        assert!(matches!(err, WingmanError::Parse(ref msg) if msg.contains("an array")));
    }
}
