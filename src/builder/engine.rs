//! Builder for constructing fetch engines.

use crate::builder::error::BuildError;
use crate::core::{ContinuationGuard, FetchConfig, ReachedMaxRule};
use crate::effects::FetchEngine;

/// Builder for constructing a [`FetchEngine`] with a fluent API.
///
/// Every setting is optional; unset settings keep the
/// [`FetchConfig`] defaults.
pub struct FetchEngineBuilder {
    config: FetchConfig,
}

impl FetchEngineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            config: FetchConfig::default(),
        }
    }

    /// Start from an existing configuration.
    pub fn from_config(config: FetchConfig) -> Self {
        Self { config }
    }

    /// Page size for cursors created through the engine.
    pub fn page_size(mut self, size: u32) -> Self {
        self.config.default_page_size = size;
        self
    }

    pub fn reached_max_rule(mut self, rule: ReachedMaxRule) -> Self {
        self.config.reached_max_rule = rule;
        self
    }

    pub fn continuation_guard(mut self, guard: ContinuationGuard) -> Self {
        self.config.continuation_guard = guard;
        self
    }

    /// Drop a previously held error message when a fetch succeeds.
    pub fn clear_stale_error(mut self, clear: bool) -> Self {
        self.config.clear_stale_error = clear;
        self
    }

    /// Build the engine.
    /// Returns an error if the configuration is invalid.
    pub fn build(self) -> Result<FetchEngine, BuildError> {
        FetchEngine::new(self.config)
    }
}

impl Default for FetchEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
