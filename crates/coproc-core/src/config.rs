//! Centralized configuration for Coproc Core.
//!
//! Constants for the registry defaults and the host metrics probes.

use std::time::Duration;

/// Registry defaults.
pub struct RegistryConfig;

impl RegistryConfig {
    /// Directory handed to a registry built with `Default`.
    pub const DEFAULT_DIRECTORY: &'static str = "coprocessors";
}

/// Host metrics configuration.
pub struct MetricsConfig;

impl MetricsConfig {
    /// How long the engine process is observed when measuring CPU usage.
    pub const CPU_SAMPLE_INTERVAL: Duration = Duration::from_secs(1);
    pub const BYTES_PER_MB: f64 = 1024.0 * 1024.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_interval_is_reasonable() {
        assert!(MetricsConfig::CPU_SAMPLE_INTERVAL > Duration::ZERO);
        assert!(MetricsConfig::CPU_SAMPLE_INTERVAL <= Duration::from_secs(5));
    }

    #[test]
    fn test_default_directory() {
        assert_eq!(RegistryConfig::DEFAULT_DIRECTORY, "coprocessors");
    }
}
