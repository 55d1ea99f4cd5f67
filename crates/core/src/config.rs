//! Shell configuration
//!
//! Settings come from, in increasing precedence:
//!
//! 1. built-in defaults
//! 2. a TOML file (`--config`, or `<config dir>/qpos/config.toml` when present)
//! 3. environment overrides (`QPOS_HISTORY_CAP`, `QPOS_GRAPH_MS`)
//! 4. command-line flags, applied by the binary
//!
//! ```toml
//! history_cap = 500
//! graph_overlay_ms = 1200
//! boot_line_ms = 320
//! boot_hold_ms = 1500
//! session_file = "/tmp/qp_os_state.json"
//! ```

use crate::history::DEFAULT_HISTORY_CAP;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Directory name used under the platform config/data dirs
pub const APP_DIR: &str = "qpos";

/// Name of the durable session record
pub const SESSION_RECORD: &str = "qp_os_state";

/// Environment override for the history retention cap
pub const ENV_HISTORY_CAP: &str = "QPOS_HISTORY_CAP";

/// Environment override for the graph overlay lifetime in milliseconds
pub const ENV_GRAPH_MS: &str = "QPOS_GRAPH_MS";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShellConfig {
    /// Maximum number of command history entries kept (and persisted)
    pub history_cap: usize,
    /// How long the skills graph overlay stays up after `graph`
    pub graph_overlay_ms: u64,
    /// Delay between boot script lines
    pub boot_line_ms: u64,
    /// Extra time the finished boot screen stays up before the HUD opens
    pub boot_hold_ms: u64,
    /// Session snapshot location (defaults to the platform data dir)
    pub session_file: Option<PathBuf>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            history_cap: DEFAULT_HISTORY_CAP,
            graph_overlay_ms: 1200,
            boot_line_ms: 320,
            boot_hold_ms: 1500,
            session_file: None,
        }
    }
}

impl ShellConfig {
    /// Parse configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse config: {}", e))
    }

    /// Load configuration from `path`, or from the default location if it exists.
    ///
    /// An explicit path that cannot be read is an error; a missing default
    /// file just means defaults. Environment overrides are applied and the
    /// result is validated.
    pub fn load(path: Option<&Path>) -> Result<Self, String> {
        let mut config = match path {
            Some(p) => {
                let content = fs::read_to_string(p)
                    .map_err(|e| format!("Failed to read config '{}': {}", p.display(), e))?;
                Self::from_toml(&content)?
            }
            None => match default_config_path().filter(|p| p.exists()) {
                Some(p) => {
                    let content = fs::read_to_string(&p)
                        .map_err(|e| format!("Failed to read config '{}': {}", p.display(), e))?;
                    Self::from_toml(&content)?
                }
                None => Self::default(),
            },
        };
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Apply `QPOS_*` environment overrides. Unparseable values are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Some(cap) = env_number(ENV_HISTORY_CAP) {
            self.history_cap = cap as usize;
        }
        if let Some(ms) = env_number(ENV_GRAPH_MS) {
            self.graph_overlay_ms = ms;
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.history_cap == 0 {
            return Err("history_cap must be at least 1".to_string());
        }
        if self.graph_overlay_ms == 0 {
            return Err("graph_overlay_ms must be greater than 0".to_string());
        }
        Ok(())
    }

    pub fn graph_overlay(&self) -> Duration {
        Duration::from_millis(self.graph_overlay_ms)
    }

    pub fn boot_line(&self) -> Duration {
        Duration::from_millis(self.boot_line_ms)
    }

    pub fn boot_hold(&self) -> Duration {
        Duration::from_millis(self.boot_hold_ms)
    }

    /// Where the session snapshot lives, if anywhere
    pub fn session_path(&self) -> Option<PathBuf> {
        self.session_file.clone().or_else(default_session_path)
    }
}

fn env_number(key: &str) -> Option<u64> {
    std::env::var(key).ok().and_then(|s| s.trim().parse().ok())
}

/// `<config dir>/qpos/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
}

/// `<local data dir>/qpos`
pub fn default_data_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join(APP_DIR))
}

/// `<local data dir>/qpos/qp_os_state.json`
pub fn default_session_path() -> Option<PathBuf> {
    default_data_dir().map(|d| d.join(format!("{}.json", SESSION_RECORD)))
}
