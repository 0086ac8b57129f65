// src/app.rs
use crate::config::Config;
use crate::dataset::{Dataset, DatasetCache};
use crate::errors::ServerError;
use crate::auth::SessionStore;
use std::sync::Arc;

/// Shared state handed to every request.
pub struct App {
    pub config: Config,
    pub datasets: DatasetCache,
    pub sessions: SessionStore,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            datasets: DatasetCache::new(),
            sessions: SessionStore::new(),
        }
    }

    /// The listings table for the configured path, loaded once per process.
    pub fn dataset(&self) -> Result<Arc<Dataset>, ServerError> {
        Ok(self.datasets.get_or_load(&self.config.data_path)?)
    }
}
