use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Deserialize;

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Service configuration. The backend proxy switch lives here and is
/// injected into the handler state at construction, never read from
/// process-wide environment at request time.
#[derive(Clone, Debug, Deserialize)]
pub struct ServiceConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// When set, simulation requests are relayed to this deployment
    /// instead of being computed locally.
    #[serde(default)]
    pub backend_url: Option<String>,
    /// Optional YAML species catalog replacing the built-in table.
    #[serde(default)]
    pub species_file: Option<PathBuf>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            backend_url: None,
            species_file: None,
        }
    }
}

/// Optional per-field overrides layered on top of a loaded config;
/// unset fields leave the underlying value alone. The binary fills this
/// from its command line, so flags win over the file, which wins over
/// defaults.
#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub backend_url: Option<String>,
    pub species_file: Option<PathBuf>,
}

impl ServiceConfig {
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(host) = overrides.host {
            self.host = host;
        }
        if let Some(port) = overrides.port {
            self.port = port;
        }
        if let Some(backend_url) = overrides.backend_url {
            self.backend_url = Some(backend_url);
        }
        if let Some(species_file) = overrides.species_file {
            self.species_file = Some(species_file);
        }
        self
    }
}

pub struct ConfigLoader {
    base_dir: PathBuf,
}

impl ConfigLoader {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self, file: impl AsRef<Path>) -> Result<ServiceConfig> {
        let path = self.base_dir.join(file);
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: ServiceConfig = serde_yaml::from_str(&data)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }
}
