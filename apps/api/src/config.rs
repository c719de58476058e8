use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every setting has a default; dataset paths are optional.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Merged job-market CSV. Read at startup if it exists, written after a merge otherwise.
    pub market_data_path: Option<PathBuf>,
    pub skills_dataset_path: Option<PathBuf>,
    pub linkedin_dataset_path: Option<PathBuf>,
    /// Default list length for demand-by-sector lookups.
    pub market_top_n: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            market_data_path: optional_path("MARKET_DATA_PATH"),
            skills_dataset_path: optional_path("SKILLS_DATASET_PATH"),
            linkedin_dataset_path: optional_path("LINKEDIN_DATASET_PATH"),
            market_top_n: std::env::var("MARKET_TOP_N")
                .unwrap_or_else(|_| "10".to_string())
                .parse::<usize>()
                .context("MARKET_TOP_N must be a non-negative integer")?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            market_data_path: None,
            skills_dataset_path: None,
            linkedin_dataset_path: None,
            market_top_n: 10,
        }
    }
}

fn optional_path(key: &str) -> Option<PathBuf> {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
}
