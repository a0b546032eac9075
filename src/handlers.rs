// src/handlers.rs
use crate::{AppState, errors::WingmanError, services::pipeline, tools};
use actix_web::{
    HttpRequest, HttpResponse, ResponseError, http::Method, middleware, web,
};
use log::{debug, error, warn};
use uuid::Uuid;

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/{tool}", web::post().to(analyze))
        .route("/{tool}", web::method(Method::OPTIONS).to(preflight));
}

/// Permissive CORS headers attached to every response.
pub fn cors_headers() -> middleware::DefaultHeaders {
    middleware::DefaultHeaders::new()
        .add(("Access-Control-Allow-Origin", ALLOW_ORIGIN))
        .add(("Access-Control-Allow-Headers", ALLOW_HEADERS))
}

pub async fn analyze(
    path: web::Path<String>,
    req: HttpRequest,
    body: Result<web::Bytes, WingmanError>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, WingmanError> {
    let slug = path.into_inner();
    let tool = tools::find(&slug).ok_or_else(|| WingmanError::UnknownTool(slug.clone()))?;
    let body = body.inspect_err(|e| warn!("{} body rejected: {}", tool.slug, e))?;

    let request_id = Uuid::new_v4();
    // Forwarded as-is by the client; not verified here.
    let has_bearer = req
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("Bearer "));
    debug!(
        "[{}] {} request: {} bytes, bearer token present: {}",
        request_id,
        tool.slug,
        body.len(),
        has_bearer
    );

    let analysis = pipeline::run(
        tool,
        &body,
        data.llm_service.as_ref(),
        &data.image_processor,
        request_id,
    )
    .await
    .inspect_err(|e| {
        if e.status_code().is_server_error() {
            error!("[{}] {} failed: {}", request_id, tool.slug, e);
        } else {
            warn!("[{}] {} rejected: {}", request_id, tool.slug, e);
        }
    })?;

    Ok(HttpResponse::Ok().json(analysis.into_body()))
}

pub async fn preflight() -> HttpResponse {
    HttpResponse::Ok().body("ok")
}

async fn health_check(data: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "wingman",
        "version": env!("CARGO_PKG_VERSION"),
        "model": data.llm_service.model()
    }))
}
