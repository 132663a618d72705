//! Configuration for PostVelocity

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Name of the optional config file, looked up in the working directory.
const CONFIG_FILE: &str = "postvelocity.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the built frontend (served if present)
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,

    /// Third-party provider credentials
    #[serde(default)]
    pub keys: ApiKeys,
}

/// API keys for external providers. Loaded at startup from the environment
/// so operators can pre-provision them; no handler consumes them yet.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiKeys {
    pub claude_api_key: Option<String>,
    pub stripe_api_key: Option<String>,
    pub mongo_url: Option<String>,
    pub music_api_key: Option<String>,
    pub aiturbo_api_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            static_dir: default_static_dir(),
            keys: ApiKeys::default(),
        }
    }
}

impl Config {
    /// Load config from file or create default, then apply environment
    /// overrides.
    pub fn load() -> Result<Self> {
        let config_path = PathBuf::from(CONFIG_FILE);

        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content)?
        } else {
            Config::default()
        };

        config.apply_env()?;
        Ok(config)
    }

    /// Overlay environment variables on top of file/default values.
    fn apply_env(&mut self) -> Result<()> {
        if let Ok(port) = std::env::var("PORT") {
            self.port = port
                .parse()
                .map_err(|_| Error::Config(format!("Invalid PORT value: {port}")))?;
        }
        if let Ok(dir) = std::env::var("STATIC_DIR") {
            self.static_dir = PathBuf::from(dir);
        }

        self.keys.claude_api_key = env_or(self.keys.claude_api_key.take(), "CLAUDE_API_KEY");
        self.keys.stripe_api_key = env_or(self.keys.stripe_api_key.take(), "STRIPE_API_KEY");
        self.keys.mongo_url = env_or(self.keys.mongo_url.take(), "MONGO_URL");
        self.keys.music_api_key = env_or(self.keys.music_api_key.take(), "MUSIC_API_KEY");
        self.keys.aiturbo_api_key = env_or(self.keys.aiturbo_api_key.take(), "AITURBO_API_KEY");

        Ok(())
    }

    /// Subdirectory of the frontend build that holds hashed assets.
    pub fn assets_path(&self) -> PathBuf {
        self.static_dir.join("static")
    }

    /// Entry point of the frontend single-page app.
    pub fn index_path(&self) -> PathBuf {
        self.static_dir.join("index.html")
    }
}

fn env_or(current: Option<String>, var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|v| !v.is_empty()).or(current)
}

// Default value functions

fn default_port() -> u16 {
    8000
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("../frontend/build")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.port, 8000);
        assert_eq!(config.static_dir, PathBuf::from("../frontend/build"));
        assert!(config.keys.claude_api_key.is_none());
    }

    #[test]
    fn parses_partial_file() {
        let config: Config = toml::from_str("port = 9001").unwrap();
        assert_eq!(config.port, 9001);
        assert_eq!(config.static_dir, default_static_dir());
    }

    #[test]
    fn parses_keys_table() {
        let config: Config = toml::from_str(
            "[keys]\nstripe_api_key = \"sk_test_123\"\n",
        )
        .unwrap();
        assert_eq!(config.keys.stripe_api_key.as_deref(), Some("sk_test_123"));
        assert!(config.keys.mongo_url.is_none());
    }
}
