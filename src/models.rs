// src/models.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// A request body that passed validation. Images are the raw strings the
/// client sent, already filtered down to non-empty entries.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRequest {
    pub notes: String,
    pub params: BTreeMap<String, String>,
    pub images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageUrl {
    pub url: String,
}

impl ContentBlock {
    pub fn text(text: impl Into<String>) -> Self {
        ContentBlock::Text { text: text.into() }
    }

    pub fn image(url: impl Into<String>) -> Self {
        ContentBlock::ImageUrl {
            image_url: ImageUrl { url: url.into() },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: Vec<ContentBlock>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub response_format: ResponseFormat,
    pub stream: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseFormat {
    #[serde(rename = "type")]
    pub format_type: String,
    pub json_schema: JsonSchemaFormat,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSchemaFormat {
    pub name: String,
    pub strict: bool,
    pub schema: Value,
}

/// The subset of a chat-completion response the relay looks at.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub model: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChoiceMessage {
    /// Usually a JSON string; some providers hand back the object directly.
    #[serde(default)]
    pub content: Option<Value>,
}

#[cfg(test)]
impl ProviderResponse {
    pub fn with_content(content: Value) -> Self {
        Self {
            choices: vec![Choice {
                message: ChoiceMessage {
                    content: Some(content),
                },
            }],
            model: None,
        }
    }
}

/// Outcome of a relayed analysis. Both variants are answered with HTTP 200.
#[derive(Debug, Clone, PartialEq)]
pub enum Analysis {
    Success(Map<String, Value>),
    SoftError {
        message: String,
        body: Map<String, Value>,
    },
}

impl Analysis {
    pub fn into_body(self) -> Map<String, Value> {
        match self {
            Analysis::Success(body) => body,
            Analysis::SoftError { body, .. } => body,
        }
    }
}
