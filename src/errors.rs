// src/errors.rs
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WingmanError {
    #[error("Invalid JSON in request body: {0}")]
    InvalidJson(String),

    #[error("Request body too large: {0}")]
    PayloadTooLarge(String),

    #[error("Could not read request body: {0}")]
    BodyRead(String),

    #[error("Missing required fields: {0}")]
    MissingFields(String),

    #[error("Maximum {max} {} allowed", image_noun(.max))]
    TooManyImages { max: usize },

    #[error("No valid images provided")]
    NoValidImages,

    #[error("Image input error: {0}")]
    Input(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing provider credentials")]
    MissingCredentials,

    #[error("LLM provider error: {0}")]
    Provider(String),

    #[error("Empty response from LLM provider")]
    EmptyResponse,

    #[error("Failed to parse LLM response: {0}")]
    Parse(String),
}

fn image_noun(max: &usize) -> &'static str {
    if *max == 1 { "image" } else { "images" }
}

impl WingmanError {
    /// Message sent to the caller. Server-side failures get a fixed message so
    /// provider and configuration details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            WingmanError::InvalidJson(_) => "Invalid JSON in request body".to_string(),
            WingmanError::PayloadTooLarge(_) => "Request body too large".to_string(),
            WingmanError::BodyRead(_) => "Could not read request body".to_string(),
            WingmanError::Config(_) | WingmanError::MissingCredentials => {
                "Server configuration error".to_string()
            }
            WingmanError::Provider(_) => "Failed to analyze images".to_string(),
            WingmanError::EmptyResponse => "No response from AI".to_string(),
            WingmanError::Parse(_) => "Failed to parse AI response".to_string(),
            other => other.to_string(),
        }
    }
}

impl ResponseError for WingmanError {
    fn status_code(&self) -> StatusCode {
        match self {
            WingmanError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            WingmanError::InvalidJson(_)
            | WingmanError::BodyRead(_)
            | WingmanError::MissingFields(_)
            | WingmanError::TooManyImages { .. }
            | WingmanError::NoValidImages
            | WingmanError::Input(_) => StatusCode::BAD_REQUEST,
            WingmanError::UnknownTool(_) => StatusCode::NOT_FOUND,
            WingmanError::Config(_)
            | WingmanError::MissingCredentials
            | WingmanError::Provider(_)
            | WingmanError::EmptyResponse
            | WingmanError::Parse(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.public_message()
        }))
    }
}

/// Body extractor failures, so oversized or broken bodies still get the
/// `{"error": ...}` shape.
impl From<actix_web::Error> for WingmanError {
    fn from(err: actix_web::Error) -> Self {
        if err.as_response_error().status_code() == StatusCode::PAYLOAD_TOO_LARGE {
            WingmanError::PayloadTooLarge(err.to_string())
        } else {
            WingmanError::BodyRead(err.to_string())
        }
    }
}
