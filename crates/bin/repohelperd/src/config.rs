//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `repohelper.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::path::PathBuf;

use serde::Deserialize;

/// Name of the shell document inside the assets directory.
const SHELL_FILE: &str = "index.html";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Compiled front-end location.
    pub assets: AssetsConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Where the compiled front-end (Trunk `dist/`) lives.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Directory holding `index.html` and the wasm bundle.
    pub dir: PathBuf,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `repohelper.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("repohelper.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    /// Apply overrides read through `lookup` (the process environment in
    /// production). Later keys win: `REPOHELPER_BIND` over host/port, and
    /// `RUST_LOG` over `REPOHELPER_LOG`.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("REPOHELPER_HOST") {
            self.server.host = val;
        }
        if let Some(port) = lookup("REPOHELPER_PORT").and_then(|val| val.parse().ok()) {
            self.server.port = port;
        }
        if let Some(val) = lookup("REPOHELPER_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Some(val) = lookup("REPOHELPER_ASSETS_DIR") {
            self.assets.dir = PathBuf::from(val);
        }
        if let Some(val) = lookup("REPOHELPER_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.assets.dir.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "assets directory must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Return the path of the SPA shell document.
    #[must_use]
    pub fn shell_path(&self) -> PathBuf {
        self.assets.dir.join(SHELL_FILE)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("crates/adapters/dashboard_leptos/dist"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "repohelperd=info,repohelper=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn overridden(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).cloned());
        config
    }

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(
            config.assets.dir,
            PathBuf::from("crates/adapters/dashboard_leptos/dist")
        );
        assert_eq!(
            config.logging.filter,
            "repohelperd=info,repohelper=info,tower_http=debug"
        );
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [server]
            host = '127.0.0.1'
            port = 9090

            [assets]
            dir = '/srv/repohelper'

            [logging]
            filter = 'debug'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.assets.dir, PathBuf::from("/srv/repohelper"));
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [server]
            port = 3001
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 3001);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(
            config.assets.dir,
            PathBuf::from("crates/adapters/dashboard_leptos/dist")
        );
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn should_reject_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn should_reject_empty_assets_dir() {
        let mut config = Config::default();
        config.assets.dir = PathBuf::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_accept_defaults() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn should_override_host_and_port_from_env() {
        let config = overridden(&[("REPOHELPER_HOST", "127.0.0.1"), ("REPOHELPER_PORT", "9000")]);
        assert_eq!(config.bind_addr(), "127.0.0.1:9000");
    }

    #[test]
    fn should_ignore_unparsable_port_override() {
        let config = overridden(&[("REPOHELPER_PORT", "eighty")]);
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn should_prefer_bind_over_host_and_port() {
        let config = overridden(&[
            ("REPOHELPER_HOST", "10.0.0.1"),
            ("REPOHELPER_PORT", "1000"),
            ("REPOHELPER_BIND", "127.0.0.1:4000"),
        ]);
        assert_eq!(config.bind_addr(), "127.0.0.1:4000");
    }

    #[test]
    fn should_prefer_rust_log_over_repohelper_log() {
        let config = overridden(&[("REPOHELPER_LOG", "warn"), ("RUST_LOG", "trace")]);
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_override_assets_dir_and_derive_shell_path() {
        let config = overridden(&[("REPOHELPER_ASSETS_DIR", "/srv/dist")]);
        assert_eq!(config.shell_path(), PathBuf::from("/srv/dist/index.html"));
    }

    #[test]
    fn should_format_bind_addr() {
        assert_eq!(Config::default().bind_addr(), "0.0.0.0:8080");
    }
}
