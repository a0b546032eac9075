// src/main.rs
use actix_web::{App, HttpServer, middleware, web};
use anyhow::Context;
use log::info;
use std::sync::Arc;

mod config;
mod errors;
mod handlers;
mod models;
mod services;
mod tools;

use crate::config::Config;
use crate::services::{CompletionProvider, ImageProcessor, LLMService};

#[derive(Clone)]
pub struct AppState {
    llm_service: Arc<dyn CompletionProvider>,
    image_processor: Arc<ImageProcessor>,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting Wingman service...");

    let config = Config::from_env().context("invalid configuration")?;
    let llm_service = Arc::new(LLMService::new(&config).context("cannot create LLM client")?);
    let image_processor = Arc::new(ImageProcessor::new());

    let app_state = AppState {
        llm_service,
        image_processor,
    };

    info!(
        "Serving {} tools with model {} on {}",
        tools::TOOLS.len(),
        config.model,
        config.bind_addr
    );

    let max_body_bytes = config.max_body_bytes;
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::PayloadConfig::new(max_body_bytes))
            .wrap(handlers::cors_headers())
            .wrap(middleware::Logger::default())
            .configure(handlers::routes)
    })
    .bind(&config.bind_addr)
    .with_context(|| format!("cannot bind {}", config.bind_addr))?
    .run()
    .await?;

    Ok(())
}
