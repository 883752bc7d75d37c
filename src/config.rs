use std::path::PathBuf;

use anyhow::Context;
use serde::Deserialize;

/// Server configuration.
///
/// Every field has a default matching the historical fixed constants, so an
/// empty config file (or none at all) yields a working server.
#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    /// Address the listening socket binds to.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Directory all servable files live under.
    #[serde(default = "default_server_root")]
    pub server_root: PathBuf,

    /// Maximum number of simultaneously tracked client connections.
    #[serde(default = "default_max_clients")]
    pub max_clients: usize,

    /// Maximum bytes read from a client in one request.
    #[serde(default = "default_read_buffer_size")]
    pub read_buffer_size: usize,
}

fn default_listen_addr() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_server_root() -> PathBuf {
    PathBuf::from("webroot")
}

fn default_max_clients() -> usize {
    30
}

fn default_read_buffer_size() -> usize {
    20000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            server_root: default_server_root(),
            max_clients: default_max_clients(),
            read_buffer_size: default_read_buffer_size(),
        }
    }
}

impl Config {
    /// Loads configuration from the YAML file named by `MINIHTTPD_CONFIG`,
    /// falling back to defaults when the variable is unset. The `LISTEN`
    /// environment variable overrides the listen address either way.
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match std::env::var("MINIHTTPD_CONFIG") {
            Ok(path) => {
                let raw = std::fs::read_to_string(&path)
                    .with_context(|| format!("reading config file {path}"))?;
                serde_yaml::from_str(&raw)
                    .with_context(|| format!("parsing config file {path}"))?
            }
            Err(_) => Self::default(),
        };

        if let Ok(addr) = std::env::var("LISTEN") {
            cfg.listen_addr = addr;
        }

        Ok(cfg)
    }
}
