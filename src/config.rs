use std::net::SocketAddr;
use std::time::Duration;

/// Application-level constants
pub const APP_NAME: &str = "CarePortal";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Support line shown on confirmation and appointment screens.
pub const SUPPORT_PHONE: &str = "(123) 456-7890";

const DEFAULT_BIND: &str = "127.0.0.1:8080";
const DEFAULT_MAP_DELAY_MS: u64 = 800;
const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// Default `tracing` filter when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "careportal=info,tower_http=warn"
}

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Artificial delay before generated map results are shown.
    pub map_delay: Duration,
    /// Quiet period after a ZIP code edit before the map re-queries.
    pub debounce: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND.parse().unwrap_or_else(|_| {
                SocketAddr::from(([127, 0, 0, 1], 8080))
            }),
            map_delay: Duration::from_millis(DEFAULT_MAP_DELAY_MS),
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
        }
    }
}

impl AppConfig {
    /// Build from `CAREPORTAL_*` environment variables.
    ///
    /// Unparseable values are logged and replaced by the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let bind_addr = match lookup("CAREPORTAL_BIND") {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!(value = %raw, "Invalid CAREPORTAL_BIND ({e}), using default");
                defaults.bind_addr
            }),
            None => defaults.bind_addr,
        };

        Self {
            bind_addr,
            map_delay: millis_var(&lookup, "CAREPORTAL_MAP_DELAY_MS", defaults.map_delay),
            debounce: millis_var(&lookup, "CAREPORTAL_DEBOUNCE_MS", defaults.debounce),
        }
    }

    /// Configuration with no artificial delays (tests, embedding).
    pub fn immediate() -> Self {
        Self {
            map_delay: Duration::ZERO,
            debounce: Duration::ZERO,
            ..Self::default()
        }
    }
}

fn millis_var<F>(lookup: &F, key: &str, default: Duration) -> Duration
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => match raw.trim().parse::<u64>() {
            Ok(ms) => Duration::from_millis(ms),
            Err(_) => {
                tracing::warn!(key, value = %raw, "Invalid millisecond value, using default");
                default
            }
        },
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.map_delay, Duration::from_millis(800));
        assert_eq!(config.debounce, Duration::from_millis(500));
    }

    #[test]
    fn reads_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("CAREPORTAL_BIND", "0.0.0.0:9000"),
            ("CAREPORTAL_MAP_DELAY_MS", "10"),
            ("CAREPORTAL_DEBOUNCE_MS", "0"),
        ]));
        assert_eq!(config.bind_addr.port(), 9000);
        assert_eq!(config.map_delay, Duration::from_millis(10));
        assert_eq!(config.debounce, Duration::ZERO);
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("CAREPORTAL_BIND", "not an address"),
            ("CAREPORTAL_MAP_DELAY_MS", "soon"),
        ]));
        assert_eq!(config.bind_addr, AppConfig::default().bind_addr);
        assert_eq!(config.map_delay, Duration::from_millis(800));
    }

    #[test]
    fn immediate_has_no_delays() {
        let config = AppConfig::immediate();
        assert_eq!(config.map_delay, Duration::ZERO);
        assert_eq!(config.debounce, Duration::ZERO);
    }

    #[test]
    fn app_name_is_careportal() {
        assert_eq!(APP_NAME, "CarePortal");
    }
}
