// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{Debounce, Throttle};
use core::time::Duration;
use pacer_core::{PacerError, Result};
use pacer_runtime::TimerService;
use serde::Deserialize;

/// Timing settings for the combinators, loadable from TOML.
///
/// Values are signed milliseconds; anything `<= 0` means "no delay", which
/// for a throttle lets every call through and for a debounce defers the
/// action only until the timer service next runs.
///
/// ```
/// use pacer::PacerConfig;
/// use std::time::Duration;
///
/// let config = PacerConfig::from_toml_str("throttle_interval_ms = 250").unwrap();
/// assert_eq!(config.throttle_interval(), Duration::from_millis(250));
/// assert_eq!(config.debounce_delay(), Duration::from_millis(500));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PacerConfig {
    pub throttle_interval_ms: i64,
    pub debounce_delay_ms: i64,
}

impl Default for PacerConfig {
    fn default() -> Self {
        Self {
            throttle_interval_ms: 1000,
            debounce_delay_ms: 500,
        }
    }
}

impl PacerConfig {
    /// Parse a configuration from TOML text.
    ///
    /// # Errors
    /// Returns `PacerError::Config` if the text is not valid TOML or contains
    /// unknown or mistyped keys.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| PacerError::config_error(e.to_string()))
    }

    pub fn throttle_interval(&self) -> Duration {
        millis(self.throttle_interval_ms)
    }

    pub fn debounce_delay(&self) -> Duration {
        millis(self.debounce_delay_ms)
    }

    /// Build a [`Throttle`] using the configured interval.
    pub fn throttle<A, R, F, TS>(&self, action: F, service: TS) -> Throttle<A, R, TS>
    where
        A: 'static,
        R: 'static,
        F: FnMut(A) -> R + Send + 'static,
        TS: TimerService,
    {
        Throttle::new(action, self.throttle_interval(), service)
    }

    /// Build a [`Debounce`] using the configured delay.
    pub fn debounce<A, F, TS>(&self, action: F, service: TS) -> Debounce<A, TS>
    where
        A: Send + 'static,
        F: FnMut(A) + Send + 'static,
        TS: TimerService,
    {
        Debounce::new(action, self.debounce_delay(), service)
    }
}

fn millis(value: i64) -> Duration {
    u64::try_from(value).map_or(Duration::ZERO, Duration::from_millis)
}
