//! HTTP Handlers

use super::docs::api_description;
use super::messages::{ErrorResponse, InputRequest, StatusResponse};
use super::server::AppState;
use crate::core::ResultPair;
use crate::error::{CleanError, CleanResult};
use crate::upload::parse_upload;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use tracing::{debug, info, warn};

impl ResponseError for CleanError {
    fn status_code(&self) -> StatusCode {
        if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn error_response(&self) -> HttpResponse {
        if !self.is_client_error() {
            warn!("Request failed: {}", self);
        }
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}

/// Register every route on an app or scope
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root))
        .route("/get", web::get().to(get_results))
        .route("/input", web::post().to(process_input))
        .route("/upload", web::post().to(process_upload))
        .route("/delete", web::delete().to(remove_all))
        .route("/docs.json", web::get().to(docs));
}

/// Run a store operation on the blocking pool
async fn blocking<F, T>(f: F) -> CleanResult<T>
where
    F: FnOnce() -> CleanResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| CleanError::Other(anyhow::anyhow!("blocking task failed: {}", e)))?
}

async fn root() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Tweet cleaning API ☕")
}

async fn get_results(state: web::Data<AppState>) -> CleanResult<HttpResponse> {
    let store = state.store.clone();
    let pairs = blocking(move || store.all()).await?;
    debug!("📤 Returning {} stored tweets", pairs.len());
    Ok(HttpResponse::Ok().json(pairs))
}

/// Accepts a JSON body regardless of the declared content type
async fn process_input(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> CleanResult<HttpResponse> {
    let request: InputRequest = serde_json::from_slice(&body)
        .map_err(|e| CleanError::BadRequest(format!("expected {{\"Tweet\": \"...\"}}: {}", e)))?;

    let cleaned = state.normalizer.normalize(&request.tweet);
    let pair = ResultPair::new(request.tweet, cleaned);
    debug!("📨 Cleaned input: {:?} -> {:?}", pair.raw, pair.cleaned);

    let store = state.store.clone();
    let stored = pair.clone();
    blocking(move || store.insert(&stored)).await?;

    Ok(HttpResponse::Ok().json(pair))
}

/// The request body is the CSV file itself
async fn process_upload(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> CleanResult<HttpResponse> {
    let tweets = parse_upload(&body, state.upload_encoding)?;
    let pairs = state.normalizer.normalize_all(tweets);
    info!("📦 Cleaned {} uploaded tweets", pairs.len());

    let store = state.store.clone();
    let stored = pairs.clone();
    blocking(move || store.insert_all(&stored)).await?;

    Ok(HttpResponse::Ok().json(pairs))
}

async fn remove_all(state: web::Data<AppState>) -> CleanResult<HttpResponse> {
    let store = state.store.clone();
    let deleted = blocking(move || store.clear()).await?;
    info!("🗑️ Deleted {} stored tweets", deleted);

    if let Err(e) = crate::audit::log(
        &state.audit_log,
        &format!("Deleted all stored tweets ({} rows)", deleted),
    ) {
        warn!("Failed to write audit log: {}", e);
    }

    Ok(HttpResponse::Ok().json(StatusResponse {
        status: "All data has been deleted".to_string(),
    }))
}

async fn docs() -> HttpResponse {
    HttpResponse::Ok().json(api_description())
}
