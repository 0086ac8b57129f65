// src/config.rs
use dotenvy::dotenv;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_DATA_PATH: &str = "dataset/Airbnb_Cleaned.csv";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("STAY_BIND_ADDR must be a socket address: {0}")]
    BindAddr(String),
    #[error("STAY_MAX_WORKERS must be a positive number: {0}")]
    MaxWorkers(String),
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_path: PathBuf,
    pub images_dir: PathBuf,
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            images_dir: PathBuf::from("images"),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        let _ = dotenv();

        let defaults = Self::default();

        let bind_addr = match env::var("STAY_BIND_ADDR") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::BindAddr(raw))?,
            Err(_) => defaults.bind_addr,
        };

        let max_workers = match env::var("STAY_MAX_WORKERS") {
            Ok(raw) => match raw.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::MaxWorkers(raw)),
            },
            Err(_) => defaults.max_workers,
        };

        Ok(Self {
            data_path: env::var("STAY_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_path),
            images_dir: env::var("STAY_IMAGES_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.images_dir),
            bind_addr,
            max_workers,
        })
    }
}
