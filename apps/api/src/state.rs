use std::sync::Arc;

use aws_sdk_s3::Client as S3Client;
use sqlx::PgPool;

use crate::config::Config;
use crate::embedding::Embedder;
use crate::llm_client::LlmClient;
use crate::matching::store::DocumentStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub s3: S3Client,
    pub llm: LlmClient,
    pub config: Config,
    /// Document lookup for the scorer. Default: `PgDocumentStore` over `db`.
    pub store: Arc<dyn DocumentStore>,
    /// Created once at startup; `None` when no embedding endpoint is configured.
    pub embedder: Option<Arc<dyn Embedder>>,
}
