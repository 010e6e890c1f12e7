use anyhow::Context;
use serde::Deserialize;
use std::path::PathBuf;

/// Environment variable naming the config file to load.
const CONFIG_ENV: &str = "SPINDLE_CONFIG";

/// Server configuration, loaded once at startup and never mutated.
///
/// All fields have defaults, so an absent config file yields a working
/// server (port 9898, `www` document root, `/etc/mime.types` rules).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub content: ContentConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind and listen on
    pub listen_addr: String,

    /// Concurrency mode for the accept loop
    pub mode: ServerMode,
}

/// How the accept loop turns connections into completed responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServerMode {
    /// One connection fully processed before the next accept
    Single,
    /// One task per connection, never awaited
    Spawning,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Document root; canonicalized during load
    pub root: PathBuf,

    /// Mime rules file, `<mimetype> <ext1> <ext2> ...` per line
    pub mime_types: PathBuf,

    /// Content type used when no rule matches
    pub default_mime_type: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:9898".to_string(),
            mode: ServerMode::Single,
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("www"),
            mime_types: PathBuf::from("/etc/mime.types"),
            default_mime_type: "text/plain".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the file named by `SPINDLE_CONFIG`
    /// (default `spindle.yaml`). A missing file yields the defaults; a
    /// file that exists but fails to parse is an error. The document
    /// root must exist: it is canonicalized here so every later
    /// containment check runs against a stable absolute path.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| "spindle.yaml".to_string());

        let mut cfg = match std::fs::read_to_string(&path) {
            Ok(text) => Self::from_yaml(&text)
                .with_context(|| format!("Failed to parse config file {path}"))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => return Err(e).with_context(|| format!("Failed to read config file {path}")),
        };

        cfg.content.root = std::fs::canonicalize(&cfg.content.root).with_context(|| {
            format!(
                "Document root {} does not exist",
                cfg.content.root.display()
            )
        })?;

        Ok(cfg)
    }

    /// Parse a YAML config document. Does not touch the filesystem.
    pub fn from_yaml(text: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }
}
