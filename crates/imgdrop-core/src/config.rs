//! Configuration module
//!
//! Environment-driven configuration for the upload pipeline and the
//! database pool. Every value has a default matching the original
//! deployment except `DATABASE_URL`, which must be set.

use std::env;

use anyhow::Context;

// Common constants
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_NAME_PREFIX: &str = "img_";
const DEFAULT_MAX_FILE_SIZE_MB: u64 = 2;
const DEFAULT_ALLOWED_CONTENT_TYPES: &str = "image/jpeg,image/png,image/gif";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 20;
const DEFAULT_DB_TIMEOUT_SECONDS: u64 = 30;

/// Upload pipeline configuration
#[derive(Clone, Debug)]
pub struct UploadConfig {
    pub upload_dir: String,
    pub name_prefix: String,
    pub max_file_size_bytes: u64,
    pub allowed_content_types: Vec<String>,
}

impl UploadConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let max_file_size_mb = env::var("MAX_FILE_SIZE_MB")
            .unwrap_or_else(|_| DEFAULT_MAX_FILE_SIZE_MB.to_string())
            .parse::<u64>()
            .context("MAX_FILE_SIZE_MB must be an integer")?;

        let allowed_content_types = env::var("ALLOWED_CONTENT_TYPES")
            .unwrap_or_else(|_| DEFAULT_ALLOWED_CONTENT_TYPES.to_string())
            .split(',')
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            upload_dir: env::var("UPLOAD_DIR").unwrap_or_else(|_| DEFAULT_UPLOAD_DIR.to_string()),
            name_prefix: env::var("UPLOAD_NAME_PREFIX")
                .unwrap_or_else(|_| DEFAULT_NAME_PREFIX.to_string()),
            max_file_size_bytes: max_file_size_mb * 1024 * 1024,
            allowed_content_types,
        })
    }
}

/// Database configuration
#[derive(Clone, Debug)]
pub struct DbConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub acquire_timeout_seconds: u64,
}

impl DbConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| DEFAULT_DB_MAX_CONNECTIONS.to_string())
                .parse()
                .context("DB_MAX_CONNECTIONS must be an integer")?,
            acquire_timeout_seconds: env::var("DB_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| DEFAULT_DB_TIMEOUT_SECONDS.to_string())
                .parse()
                .context("DB_TIMEOUT_SECONDS must be an integer")?,
        })
    }
}

/// Full application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub upload: UploadConfig,
    pub db: DbConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        Ok(Self {
            upload: UploadConfig::from_env()?,
            db: DbConfig::from_env()?,
        })
    }
}
