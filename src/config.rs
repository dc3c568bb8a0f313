use serde::Deserialize;
use std::path::PathBuf;

/// Top-level server configuration.
///
/// Loaded once at startup from the YAML file named by `STATICD_CONFIG`,
/// or from the `LISTEN` / `DOCUMENT_ROOT` environment variables when no
/// file is given. Never reloaded at runtime.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticFilesConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the acceptor binds to, e.g. "127.0.0.1:8080".
    pub listen_addr: String,
    /// Listen backlog for pending, unaccepted connections.
    pub backlog: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StaticFilesConfig {
    /// Document root that request paths are resolved against.
    pub root: PathBuf,
    /// File served when the request path is exactly "/".
    pub index: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            static_files: StaticFilesConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_string(),
            backlog: 10,
        }
    }
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            index: "index.html".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        match std::env::var("STATICD_CONFIG") {
            Ok(path) => Self::from_file(&path),
            Err(_) => Ok(Self::from_env()),
        }
    }

    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let cfg = serde_yaml::from_str(&contents)?;
        Ok(cfg)
    }

    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(addr) = std::env::var("LISTEN") {
            cfg.server.listen_addr = addr;
        }
        if let Ok(root) = std::env::var("DOCUMENT_ROOT") {
            cfg.static_files.root = PathBuf::from(root);
        }
        cfg
    }
}
