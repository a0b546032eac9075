// src/services/llm_service.rs
use crate::config::Config;
use crate::errors::WingmanError;
use crate::models::*;
use crate::tools::ToolSpec;
use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use std::time::Instant;

/// A hosted chat-completion API. One call per analysis, no retries.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ProviderResponse, WingmanError>;

    fn model(&self) -> &str;
}

/// OpenAI-compatible `/chat/completions` client.
pub struct LLMService {
    api_key: String,
    base_url: String,
    model: String,
    client: Client,
}

impl LLMService {
    pub fn new(config: &Config) -> Result<Self, WingmanError> {
        if config.api_key.trim().is_empty() {
            return Err(WingmanError::MissingCredentials);
        }

        Ok(Self {
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            client: Client::new(),
        })
    }
}

#[async_trait]
impl CompletionProvider for LLMService {
    async fn complete(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ProviderResponse, WingmanError> {
        let start = Instant::now();

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(request)
            .send()
            .await
            .map_err(|e| WingmanError::Provider(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("Provider returned {}: {}", status, error_text);
            return Err(WingmanError::Provider(format!("{}: {}", status, error_text)));
        }

        let result: ProviderResponse = response
            .json()
            .await
            .map_err(|e| WingmanError::Provider(format!("unreadable response body: {}", e)))?;

        debug!(
            "Provider answered in {}ms with {} choice(s) from {}",
            start.elapsed().as_millis(),
            result.choices.len(),
            result.model.as_deref().unwrap_or(&self.model)
        );

        Ok(result)
    }

    fn model(&self) -> &str {
        &self.model
    }
}

/// One user message: the prompt text first, then the images in order.
pub fn build_request(
    model: &str,
    tool: &ToolSpec,
    prompt: &str,
    images: &[String],
) -> ChatCompletionRequest {
    let mut content = Vec::with_capacity(images.len() + 1);
    content.push(ContentBlock::text(prompt));
    content.extend(images.iter().map(|url| ContentBlock::image(url.as_str())));

    ChatCompletionRequest {
        model: model.to_string(),
        messages: vec![ChatMessage {
            role: "user".to_string(),
            content,
        }],
        response_format: ResponseFormat {
            format_type: "json_schema".to_string(),
            json_schema: JsonSchemaFormat {
                name: tool.schema_name.to_string(),
                strict: true,
                schema: (tool.schema)(),
            },
        },
        stream: false,
    }
}

pub async fn invoke(
    provider: &dyn CompletionProvider,
    tool: &ToolSpec,
    prompt: &str,
    images: &[String],
) -> Result<ProviderResponse, WingmanError> {
    let request = build_request(provider.model(), tool, prompt, images);
    provider.complete(&request).await
}
