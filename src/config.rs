use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::atomic::AtomicBool;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
    pub show_headers: bool,
}

impl Config {
    /// Load configuration from an optional `config.*` file layered over
    /// built-in defaults (`0.0.0.0:9090`, access log enabled).
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 9090)?
            .set_default("logging.access_log", true)?
            .set_default("logging.show_headers", false)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

/// Shared per-process state. Nothing in it is mutated after startup, so
/// concurrent requests cannot observe each other.
pub struct AppState {
    pub config: Config,

    // Cached for lock-free reads on the request path
    pub cached_access_log: AtomicBool,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            cached_access_log: AtomicBool::new(config.logging.access_log),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::Ordering;

    fn default_config() -> Config {
        Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 9090,
                workers: None,
            },
            logging: LoggingConfig {
                access_log: true,
                show_headers: false,
            },
        }
    }

    #[test]
    fn test_default_socket_addr() {
        let cfg = default_config();
        let addr = cfg.get_socket_addr().unwrap();
        assert_eq!(addr.port(), 9090);
        assert!(addr.ip().is_unspecified());
    }

    #[test]
    fn test_invalid_host_is_an_error() {
        let mut cfg = default_config();
        cfg.server.host = "not a host".to_string();
        assert!(cfg.get_socket_addr().is_err());
    }

    #[test]
    fn test_state_caches_access_log_flag() {
        let mut cfg = default_config();
        cfg.logging.access_log = false;
        let state = AppState::new(&cfg);
        assert!(!state.cached_access_log.load(Ordering::Relaxed));
    }
}
