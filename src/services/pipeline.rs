// src/services/pipeline.rs
use crate::errors::WingmanError;
use crate::models::Analysis;
use crate::services::image_processor::ImageProcessor;
use crate::services::llm_service::{CompletionProvider, invoke};
use crate::services::{prompt_builder, relay, request_validator};
use crate::tools::ToolSpec;
use crate::tools::schema::missing_required;
use log::{debug, info, warn};
use std::time::Instant;
use uuid::Uuid;

/// Runs one request through validate, prompt, invoke and relay. Every failure
/// ends the request; nothing is retried.
pub async fn run(
    tool: &ToolSpec,
    body: &[u8],
    provider: &dyn CompletionProvider,
    image_processor: &ImageProcessor,
    request_id: Uuid,
) -> Result<Analysis, WingmanError> {
    let start = Instant::now();

    let request = request_validator::validate(tool, body)?;
    debug!(
        "[{}] {} validated: {} image(s), params {:?}",
        request_id,
        tool.slug,
        request.images.len(),
        request.params
    );

    let images = request
        .images
        .iter()
        .map(|raw| image_processor.normalize_detected(Some(raw.as_str())))
        .collect::<Result<Vec<_>, _>>()?;

    let prompt = prompt_builder::build_prompt(tool, &request.params, &request.notes, images.len());
    debug!("[{}] prompt built ({} chars)", request_id, prompt.len());

    let raw = invoke(provider, tool, &prompt, &images).await?;
    debug!("[{}] provider call finished", request_id);

    let analysis = relay::relay(raw)?;

    match &analysis {
        Analysis::Success(body) => {
            let missing = missing_required(&(tool.schema)(), body);
            if !missing.is_empty() {
                warn!(
                    "[{}] {} result is missing required fields {:?}",
                    request_id, tool.slug, missing
                );
            }
            info!(
                "[{}] {} analysis succeeded in {}ms",
                request_id,
                tool.slug,
                start.elapsed().as_millis()
            );
        }
        Analysis::SoftError { message, .. } => {
            warn!(
                "[{}] {} input not analyzable: {}",
                request_id, tool.slug, message
            );
        }
    }

    Ok(analysis)
}
