//! Shared application state for request handlers.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::probe::{CacheProbe, DatabaseProbe};

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// The database and cache probes are injected as trait objects so the health
/// handler can be exercised in tests with substitutable fakes for both
/// collaborators.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub db: Arc<dyn DatabaseProbe>,
    pub cache: Arc<dyn CacheProbe>,
}

impl AppState {
    /// Creates a new application state from the given configuration and probes.
    pub fn new(
        config: AppConfig,
        db: Arc<dyn DatabaseProbe>,
        cache: Arc<dyn CacheProbe>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            db,
            cache,
        }
    }
}
