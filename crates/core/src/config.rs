use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::{fs, net::SocketAddr, path::PathBuf, time::Duration};

fn default_listen() -> SocketAddr {
    "127.0.0.1:8085".parse().expect("static default address")
}

fn default_interval_ms() -> u64 {
    1000
}

/// Agent configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Address the HTTP server binds to
    #[serde(default = "default_listen")]
    pub listen: SocketAddr,

    /// Sampling interval in milliseconds
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            interval_ms: default_interval_ms(),
        }
    }
}

impl Config {
    /// Load configuration in order of preference:
    /// 1. CLI arguments override everything
    /// 2. JSON config file if specified
    /// 3. Default config file locations
    /// 4. Built-in defaults
    pub fn load(cli: Option<&CliConfig>, json_path: Option<&PathBuf>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(found) = Self::load_default_config()? {
            config = found;
        }

        if let Some(path) = json_path {
            config = Self::load_from_file(path)?;
        }

        if let Some(cli) = cli {
            config.apply_cli_overrides(cli);
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific JSON file
    pub fn load_from_file(path: &PathBuf) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            CoreError::config(format!("failed to read config file {}: {}", path.display(), e))
        })?;

        serde_json::from_str(&contents).map_err(|e| {
            CoreError::config(format!("failed to parse config file {}: {}", path.display(), e))
        })
    }

    /// Load configuration from default locations
    fn load_default_config() -> Result<Option<Self>> {
        for path in Self::default_config_paths() {
            if path.exists() {
                match Self::load_from_file(&path) {
                    Ok(config) => return Ok(Some(config)),
                    Err(e) => {
                        log::warn!("skipping config at {}: {}", path.display(), e);
                        continue;
                    }
                }
            }
        }
        Ok(None)
    }

    /// Default configuration file search paths
    fn default_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("sysagent").join("config.json"));
        }
        if let Some(home_dir) = dirs::home_dir() {
            paths.push(home_dir.join(".sysagent.json"));
        }
        paths.push(PathBuf::from("sysagent.json"));

        paths
    }

    /// Apply CLI argument overrides
    fn apply_cli_overrides(&mut self, cli: &CliConfig) {
        if let Some(listen) = cli.listen {
            self.listen = listen;
        }
        if let Some(interval_ms) = cli.interval_ms {
            self.interval_ms = interval_ms;
        }
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        if self.interval_ms < 100 {
            return Err(CoreError::config(
                "sampling interval must be at least 100ms",
            ));
        }
        if self.interval_ms > 60_000 {
            return Err(CoreError::config(
                "sampling interval must be at most 60 seconds",
            ));
        }
        Ok(())
    }

    /// Sampling interval as a Duration
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/// CLI overrides (parsed by the binary)
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub listen: Option<SocketAddr>,
    pub interval_ms: Option<u64>,
}
