// API State Management

use crate::api::config::ApiConfig;
use crate::error::LoadError;
use crate::tags::TagDatabase;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state
///
/// The tag database is built before the state exists and is only ever read
/// afterwards, so handlers share it without locking.
pub struct AppState {
    /// API configuration
    pub config: Arc<ApiConfig>,

    /// Loaded tag database
    pub database: Arc<TagDatabase>,

    /// Server start time
    pub start_time: Instant,
}

impl AppState {
    /// Create new application state around an already loaded database
    pub fn new(config: ApiConfig, database: TagDatabase) -> Self {
        Self {
            config: Arc::new(config),
            database: Arc::new(database),
            start_time: Instant::now(),
        }
    }

    /// Load the database named by `config.database_path` and build the state
    pub fn load(config: ApiConfig) -> Result<Self, LoadError> {
        let database = TagDatabase::load(&config.database_path)?;
        Ok(Self::new(config, database))
    }

    /// Get uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
