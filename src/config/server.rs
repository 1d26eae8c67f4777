use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

const DB_FILE_NAME: &str = "shoplist.db";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub data_dir: PathBuf,
    /// Directory served verbatim under `/static/`.
    pub static_dir: PathBuf,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| Error::Config(format!("invalid listen address: {e}")))
    }

    #[must_use]
    pub fn db_path(&self) -> PathBuf {
        db_path(&self.data_dir)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            data_dir: PathBuf::from("./data"),
            static_dir: PathBuf::from("./static"),
        }
    }
}

#[must_use]
pub fn db_path(data_dir: &Path) -> PathBuf {
    data_dir.join(DB_FILE_NAME)
}

/// Partial settings. Both the TOML config file and the CLI flags are read
/// into a layer; layers are merged and then filled with defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub data_dir: Option<PathBuf>,
    pub static_dir: Option<PathBuf>,
}

impl ConfigLayer {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))
    }

    /// Layers `overrides` on top of `self`; set fields in `overrides` win.
    #[must_use]
    pub fn merge(self, overrides: ConfigLayer) -> Self {
        Self {
            host: overrides.host.or(self.host),
            port: overrides.port.or(self.port),
            data_dir: overrides.data_dir.or(self.data_dir),
            static_dir: overrides.static_dir.or(self.static_dir),
        }
    }

    #[must_use]
    pub fn into_config(self) -> ServerConfig {
        let defaults = ServerConfig::default();
        ServerConfig {
            host: self.host.unwrap_or(defaults.host),
            port: self.port.unwrap_or(defaults.port),
            data_dir: self.data_dir.unwrap_or(defaults.data_dir),
            static_dir: self.static_dir.unwrap_or(defaults.static_dir),
        }
    }
}
