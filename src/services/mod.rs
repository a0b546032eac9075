// src/services/mod.rs
pub mod image_processor;
pub mod llm_service;
pub mod pipeline;
pub mod prompt_builder;
pub mod relay;
pub mod request_validator;

pub use image_processor::ImageProcessor;
pub use llm_service::{CompletionProvider, LLMService};
