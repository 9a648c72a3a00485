//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks. Nothing in it
//! is mutated after startup.

use std::time::Instant;

use crate::config::{Config, ConfigError};
use crate::view::Renderer;

/// Shared application state for all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    /// View renderer (palette only; series are generated per request)
    pub renderer: Renderer,
    /// Largest `length` override accepted
    pub max_series_length: i64,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create an AppState around an existing renderer
    pub fn new(renderer: Renderer, max_series_length: i64) -> Self {
        Self {
            renderer,
            max_series_length,
            start_time: Instant::now(),
        }
    }

    /// Create AppState from loaded configuration
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let palette = config.dashboard.palette()?;
        Ok(Self::new(
            Renderer::new(palette),
            config.dashboard.max_series_length,
        ))
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Renderer::default(), 3650)
    }
}
