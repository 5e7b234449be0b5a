use std::sync::Arc;

use crate::config::Config;
use crate::oracle::ExtractionOracle;

/// Shared application state injected into route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The extraction/judgment collaborator. Live Claude client in
    /// production, deterministic fakes in tests.
    pub oracle: Arc<dyn ExtractionOracle>,
    /// Kept for handlers that need runtime configuration; only the bootstrap
    /// path reads it today.
    #[allow(dead_code)]
    pub config: Config,
}
