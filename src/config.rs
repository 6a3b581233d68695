//! Server configuration
//!
//! Loaded once at startup from an optional YAML file (path in
//! `PLAINHTTP_CONFIG`), with the listen address overridable through `LISTEN`.
//! Every key has a default, so an empty document is a valid configuration.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::http::mime::MimeTypes;

pub const CONFIG_ENV: &str = "PLAINHTTP_CONFIG";
pub const LISTEN_ENV: &str = "LISTEN";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticFilesConfig,
    /// Extension to content-type entries added to the built-in table
    pub mime_types: HashMap<String, String>,
    /// File that receives the raw bytes of each request before parsing
    pub request_dump: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_addr: String,
    pub backlog: u32,
    pub read_buffer_size: usize,
    /// Value of the `Host` response header
    pub server_name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StaticFilesConfig {
    pub root: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_string(),
            backlog: 10,
            read_buffer_size: 4096,
            server_name: "PlainHttp/0.1".to_string(),
        }
    }
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("static"),
        }
    }
}

impl Config {
    /// Reads the file named by `PLAINHTTP_CONFIG` if set, otherwise starts
    /// from defaults, then applies `LISTEN`.
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };

        if let Ok(listen_addr) = std::env::var(LISTEN_ENV) {
            cfg.server.listen_addr = listen_addr;
        }

        Ok(cfg)
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_yaml_str(&raw)
            .with_context(|| format!("parsing config file {}", path.display()))
    }

    pub fn from_yaml_str(raw: &str) -> anyhow::Result<Self> {
        // serde_yaml rejects an empty document; treat it as all defaults.
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }

        let cfg: Self = serde_yaml::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.server.read_buffer_size == 0 {
            anyhow::bail!("server.read_buffer_size must be greater than zero");
        }
        if self.server.backlog == 0 {
            anyhow::bail!("server.backlog must be greater than zero");
        }
        Ok(())
    }

    pub fn mime_types(&self) -> MimeTypes {
        MimeTypes::with_extra(self.mime_types.iter().map(|(ext, ty)| (ext, ty.clone())))
    }
}
