//! Persistent application configuration
//!
//! Stores the statistics data directory and default ranking size in a JSON
//! file at `<config_dir>/quizzie/config.json`.

use anyhow::Context;
use quizzie_core::DEFAULT_TOP_LIMIT;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "quizzie";
const CONFIG_FILE: &str = "config.json";

fn default_top_limit() -> usize {
    DEFAULT_TOP_LIMIT
}

/// Persistent application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory holding the statistics file (None = platform data dir)
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    /// Number of categories shown by `top` when no limit is given
    #[serde(default = "default_top_limit")]
    pub top_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            top_limit: default_top_limit(),
        }
    }
}

impl AppConfig {
    /// Config file path: `<config_dir>/quizzie/config.json`
    pub fn path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
            .join(CONFIG_FILE)
    }

    /// Load config from `path`. A missing file or a broken one yields defaults.
    pub fn load(path: &Path) -> Self {
        match Self::read_from(path) {
            Ok(Some(config)) => config,
            Ok(None) => Self::default(),
            Err(e) => {
                tracing::warn!(error = %format!("{e:#}"), "Ignoring config file");
                Self::default()
            }
        }
    }

    fn read_from(path: &Path) -> anyhow::Result<Option<Self>> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("reading {}", path.display()));
            }
        };
        let config = serde_json::from_str(&contents)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(Some(config))
    }

    /// Write config to `path` as pretty JSON, creating its directory
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let dir = path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating config directory {}", dir.display()))?;

        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        tracing::debug!(path = %path.display(), "Saved config");
        Ok(())
    }

    /// Directory where statistics are stored
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APP_DIR)
        })
    }

    /// Ranking size to use when the caller gives none. Zero falls back to the default.
    pub fn top_limit(&self) -> usize {
        if self.top_limit == 0 {
            DEFAULT_TOP_LIMIT
        } else {
            self.top_limit
        }
    }
}
