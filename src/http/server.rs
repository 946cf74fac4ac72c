//! HTTP Server
//!
//! Shared request state and server startup.

use crate::config::Config;
use crate::core::TextNormalizer;
use crate::error::CleanResult;
use crate::lexicon::{resolve_encoding, Lexicons};
use crate::store::TweetStore;
use actix_web::{web, App, HttpServer};
use encoding_rs::Encoding;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// State shared by every request handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub normalizer: TextNormalizer,
    pub store: TweetStore,
    pub upload_encoding: &'static Encoding,
    pub audit_log: PathBuf,
}

impl AppState {
    pub fn new(
        lexicons: Arc<Lexicons>,
        store: TweetStore,
        upload_encoding: &'static Encoding,
        audit_log: PathBuf,
    ) -> Self {
        Self {
            normalizer: TextNormalizer::new(lexicons),
            store,
            upload_encoding,
            audit_log,
        }
    }

    /// Build state from config with already-loaded lexicons
    pub fn from_config(config: &Config, lexicons: Arc<Lexicons>) -> CleanResult<Self> {
        let store = TweetStore::new(PathBuf::from(&config.db_path))?;
        Ok(Self::new(
            lexicons,
            store,
            resolve_encoding(&config.upload_encoding)?,
            crate::audit::default_log_path(),
        ))
    }
}

/// Run the HTTP server until shutdown
pub async fn serve(config: &Config, state: AppState) -> std::io::Result<()> {
    let addr = config.bind_addr();
    let max_upload = config.max_upload_bytes;
    let data = web::Data::new(state);

    info!("🌐 HTTP server listening on http://{}", addr);
    info!("📖 API description at http://{}/docs.json", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .app_data(web::PayloadConfig::new(max_upload))
            .configure(super::routes)
    })
    .bind(&addr)?
    .run()
    .await
}
