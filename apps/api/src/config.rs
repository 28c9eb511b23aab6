use anyhow::{Context, Result};

use crate::matching::weights::ScoringWeights;

const DEFAULT_EMBEDDING_MODEL: &str = "all-MiniLM-L6-v2";

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing or the weights are invalid.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub s3_bucket: String,
    pub s3_endpoint: String,
    pub aws_access_key_id: String,
    pub aws_secret_access_key: String,
    pub anthropic_api_key: String,
    /// `None` when `EMBEDDING_API_URL` is unset; similarity then scores 0.
    pub embedding: Option<EmbeddingConfig>,
    pub weights: ScoringWeights,
    pub port: u16,
    pub rust_log: String,
}

#[derive(Debug, Clone)]
pub struct EmbeddingConfig {
    pub api_url: String,
    pub api_key: Option<String>,
    pub model: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            s3_bucket: require_env("S3_BUCKET")?,
            s3_endpoint: require_env("S3_ENDPOINT")?,
            aws_access_key_id: require_env("AWS_ACCESS_KEY_ID")?,
            aws_secret_access_key: require_env("AWS_SECRET_ACCESS_KEY")?,
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            embedding: optional_env("EMBEDDING_API_URL").map(|api_url| EmbeddingConfig {
                api_url,
                api_key: optional_env("EMBEDDING_API_KEY"),
                model: optional_env("EMBEDDING_MODEL")
                    .unwrap_or_else(|| DEFAULT_EMBEDDING_MODEL.to_string()),
            }),
            weights: weights_from_env()?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Reads `MATCH_WEIGHT_*` overrides on top of the defaults and validates the result.
fn weights_from_env() -> Result<ScoringWeights> {
    let defaults = ScoringWeights::default();
    let read = |key: &str, default: f64| -> Result<f64> {
        match optional_env(key) {
            Some(raw) => raw
                .trim()
                .parse::<f64>()
                .with_context(|| format!("{key} must be a number, got '{raw}'")),
            None => Ok(default),
        }
    };

    let weights = ScoringWeights::new(
        read("MATCH_WEIGHT_SEMANTIC", defaults.semantic())?,
        read("MATCH_WEIGHT_SKILL", defaults.skill())?,
        read("MATCH_WEIGHT_EXPERIENCE", defaults.experience())?,
        read("MATCH_WEIGHT_EDUCATION", defaults.education())?,
        read("MATCH_WEIGHT_TOOLS", defaults.tools())?,
    )
    .context("Invalid MATCH_WEIGHT_* configuration")?;

    Ok(weights)
}
