//! Tunables shared by the forecaster, projector and report service.

use chrono::Days;
use serde::{Deserialize, Serialize};

/// Configuration for effective-date inference.
///
/// # Examples
///
/// ```
/// use linear_gantt::timeline::engine::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.fallback_horizon_days, 180);
///
/// let quarter = EngineConfig::default().with_fallback_horizon_days(90);
/// assert_eq!(quarter.fallback_horizon_days, 90);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Days added to the effective start when no target date or velocity
    /// forecast is available.
    pub fallback_horizon_days: u32,
}

impl EngineConfig {
    /// Horizon used when nothing else is configured.
    pub const DEFAULT_FALLBACK_HORIZON_DAYS: u32 = 180;

    /// Overrides the fallback horizon.
    #[must_use]
    pub const fn with_fallback_horizon_days(mut self, days: u32) -> Self {
        self.fallback_horizon_days = days;
        self
    }

    /// Returns the fallback horizon as a chrono day count.
    #[must_use]
    pub fn fallback_horizon(&self) -> Days {
        Days::new(u64::from(self.fallback_horizon_days))
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fallback_horizon_days: Self::DEFAULT_FALLBACK_HORIZON_DAYS,
        }
    }
}
