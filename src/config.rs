use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Server configuration, loadable from a TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory holding the bundled lesson posters and videos.
    #[serde(default = "default_asset_dir")]
    pub asset_dir: PathBuf,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_asset_dir() -> PathBuf {
    PathBuf::from("assets")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            asset_dir: default_asset_dir(),
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Ok(toml::from_str(&raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: Config = toml::from_str("port = 9000").unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9000);
        assert_eq!(config.asset_dir, PathBuf::from("assets"));
    }

    #[test]
    fn full_file_round_trips() {
        let config: Config = toml::from_str(
            r#"
            host = "0.0.0.0"
            port = 8443
            asset_dir = "/srv/safeschool/assets"
            "#,
        )
        .unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8443);
        assert_eq!(config.asset_dir, PathBuf::from("/srv/safeschool/assets"));
    }
}
