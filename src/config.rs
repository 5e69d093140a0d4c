//! Configuration types.

use std::time::Duration;

use crate::error::ConfigError;

/// Assistant configuration.
#[derive(Debug, Clone)]
pub struct AssistantConfig {
    /// Assistant name for identification.
    pub name: String,
    /// Simulated latency before a bot chat reply lands.
    pub reply_delay: Duration,
    /// Simulated latency before the wizard's analysis result lands.
    pub analysis_delay: Duration,
    /// Capacity of the broadcast event channel.
    pub event_capacity: usize,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            name: "health-assist".to_string(),
            reply_delay: Duration::from_millis(1500),
            analysis_delay: Duration::from_millis(1500),
            event_capacity: 64,
        }
    }
}

impl AssistantConfig {
    /// Build a config from environment variables, falling back to defaults.
    ///
    /// `HEALTH_ASSIST_REPLY_DELAY_MS` and `HEALTH_ASSIST_ANALYSIS_DELAY_MS`
    /// override the simulated latencies.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(delay) = read_delay_ms("HEALTH_ASSIST_REPLY_DELAY_MS")? {
            config.reply_delay = delay;
        }
        if let Some(delay) = read_delay_ms("HEALTH_ASSIST_ANALYSIS_DELAY_MS")? {
            config.analysis_delay = delay;
        }
        Ok(config)
    }
}

fn read_delay_ms(key: &str) -> Result<Option<Duration>, ConfigError> {
    match std::env::var(key) {
        Ok(raw) => {
            let ms: u64 = raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: key.to_string(),
                message: format!("expected milliseconds as an integer, got {raw:?}"),
            })?;
            Ok(Some(Duration::from_millis(ms)))
        }
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_delays_match_product_latency() {
        let config = AssistantConfig::default();
        assert_eq!(config.reply_delay, Duration::from_millis(1500));
        assert_eq!(config.analysis_delay, Duration::from_millis(1500));
    }
}
