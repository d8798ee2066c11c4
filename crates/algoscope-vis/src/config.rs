//! Environment-derived server configuration.

use std::net::SocketAddr;

use algoscope_core::limits::{clamp_array_size, clamp_speed_ms, DEFAULT_ARRAY_SIZE, DEFAULT_SPEED_MS};
use algoscope_core::AlgorithmKind;

use crate::error::{Error, Result};

pub const DEFAULT_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_SEED: u64 = 42;

/// Startup settings for the server and its first session.
#[derive(Debug, Clone, PartialEq)]
pub struct VisConfig {
    pub addr: SocketAddr,
    pub speed_ms: u64,
    pub array_size: usize,
    pub seed: u64,
    pub algorithm: AlgorithmKind,
}

impl Default for VisConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            speed_ms: DEFAULT_SPEED_MS,
            array_size: DEFAULT_ARRAY_SIZE,
            seed: DEFAULT_SEED,
            algorithm: AlgorithmKind::Bubble,
        }
    }
}

impl VisConfig {
    /// Create config from environment variables with sensible defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from any key lookup. Missing keys take their defaults;
    /// present but malformed keys are errors. Speed and size are clamped.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let addr = lookup("ALGOSCOPE_ADDR")
            .unwrap_or_else(|| DEFAULT_ADDR.to_string())
            .parse()
            .map_err(|e| Error::Config(format!("invalid ALGOSCOPE_ADDR: {e}")))?;

        let speed_ms = parse_or(&lookup, "ALGOSCOPE_SPEED_MS", DEFAULT_SPEED_MS)?;
        let array_size = parse_or(&lookup, "ALGOSCOPE_ARRAY_SIZE", DEFAULT_ARRAY_SIZE)?;
        let seed = parse_or(&lookup, "ALGOSCOPE_SEED", DEFAULT_SEED)?;

        let algorithm = match lookup("ALGOSCOPE_ALGORITHM") {
            Some(id) => id
                .trim()
                .parse()
                .map_err(|e| Error::Config(format!("invalid ALGOSCOPE_ALGORITHM: {e}")))?,
            None => AlgorithmKind::Bubble,
        };

        Ok(Self {
            addr,
            speed_ms: clamp_speed_ms(speed_ms),
            array_size: clamp_array_size(array_size),
            seed,
            algorithm,
        })
    }

    /// Replace the listening port, keeping the host.
    pub fn with_port(mut self, port: u16) -> Self {
        self.addr.set_port(port);
        self
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| Error::Config(format!("invalid {key}: {e}"))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = VisConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, VisConfig::default());
    }

    #[test]
    fn reads_every_key() {
        let config = VisConfig::from_lookup(lookup(&[
            ("ALGOSCOPE_ADDR", "127.0.0.1:8080"),
            ("ALGOSCOPE_SPEED_MS", "250"),
            ("ALGOSCOPE_ARRAY_SIZE", "12"),
            ("ALGOSCOPE_SEED", "7"),
            ("ALGOSCOPE_ALGORITHM", "dijkstra"),
        ]))
        .unwrap();
        assert_eq!(config.addr.port(), 8080);
        assert_eq!(config.speed_ms, 250);
        assert_eq!(config.array_size, 12);
        assert_eq!(config.seed, 7);
        assert_eq!(config.algorithm, AlgorithmKind::Dijkstra);
    }

    #[test]
    fn clamps_out_of_range_values() {
        let config = VisConfig::from_lookup(lookup(&[("ALGOSCOPE_SPEED_MS", "5"), ("ALGOSCOPE_ARRAY_SIZE", "99")])).unwrap();
        assert_eq!(config.speed_ms, 100);
        assert_eq!(config.array_size, 15);
    }

    #[test]
    fn malformed_values_are_config_errors() {
        for (key, value) in [
            ("ALGOSCOPE_ADDR", "not an address"),
            ("ALGOSCOPE_SEED", "-1"),
            ("ALGOSCOPE_ALGORITHM", "bogosort"),
        ] {
            let err = VisConfig::from_lookup(lookup(&[(key, value)])).unwrap_err();
            assert!(matches!(err, Error::Config(_)), "{key}");
        }
    }

    #[test]
    fn port_override() {
        let config = VisConfig::default().with_port(9999);
        assert_eq!(config.addr.to_string(), "0.0.0.0:9999");
    }
}
