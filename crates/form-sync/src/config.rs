//! Synchronization Settings

use std::time::Duration;

use serde::Deserialize;

/// Coordinator and loader settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Simulated network latency of the fixture loader
    pub load_delay_ms: u64,
    /// Log the store contents before every reset
    pub dump_before_reset: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            load_delay_ms: 500,
            dump_before_reset: true,
        }
    }
}

impl SyncConfig {
    /// Parse overrides from JSON; omitted keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn load_delay(&self) -> Duration {
        Duration::from_millis(self.load_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override() {
        let config = SyncConfig::from_json(r#"{"load_delay_ms": 0}"#).unwrap();
        assert_eq!(config.load_delay(), Duration::ZERO);
        assert!(config.dump_before_reset);
    }
}
