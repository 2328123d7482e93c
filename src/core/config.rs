//! Engine configuration.

use super::guard::{ContinuationGuard, ReachedMaxRule};
use super::query::DEFAULT_PAGE_SIZE;
use crate::builder::BuildError;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

/// Tunables shared by the single and paginated machines.
///
/// Turned into an engine by
/// [`FetchEngineBuilder`](crate::builder::FetchEngineBuilder), which
/// validates it. Deserializing from a host's settings file validates too:
/// missing fields take their defaults and a zero page size is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawFetchConfig")]
pub struct FetchConfig {
    /// Page size for cursors created through the engine
    pub default_page_size: u32,

    /// How a successful page sets `reached_max`
    pub reached_max_rule: ReachedMaxRule,

    /// When continuation pages are refused
    pub continuation_guard: ContinuationGuard,

    /// Drop a previously held error message on success, for single and
    /// paginated fetches alike
    pub clear_stale_error: bool,
}

impl FetchConfig {
    /// Check the configuration, returning the page size it guarantees.
    pub fn validate(&self) -> Result<NonZeroU32, BuildError> {
        NonZeroU32::new(self.default_page_size).ok_or(BuildError::ZeroPageSize)
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            reached_max_rule: ReachedMaxRule::FullPage,
            continuation_guard: ContinuationGuard::RequireFullPage,
            clear_stale_error: false,
        }
    }
}

#[derive(Deserialize)]
#[serde(default)]
struct RawFetchConfig {
    default_page_size: u32,
    reached_max_rule: ReachedMaxRule,
    continuation_guard: ContinuationGuard,
    clear_stale_error: bool,
}

impl Default for RawFetchConfig {
    fn default() -> Self {
        let defaults = FetchConfig::default();
        Self {
            default_page_size: defaults.default_page_size,
            reached_max_rule: defaults.reached_max_rule,
            continuation_guard: defaults.continuation_guard,
            clear_stale_error: defaults.clear_stale_error,
        }
    }
}

impl TryFrom<RawFetchConfig> for FetchConfig {
    type Error = BuildError;

    fn try_from(raw: RawFetchConfig) -> Result<Self, Self::Error> {
        let config = FetchConfig {
            default_page_size: raw.default_page_size,
            reached_max_rule: raw.reached_max_rule,
            continuation_guard: raw.continuation_guard,
            clear_stale_error: raw.clear_stale_error,
        };
        config.validate()?;
        Ok(config)
    }
}
