//! Client configuration.
use std::path::PathBuf;

use anyhow::Result;
use meal_runtime::RuntimeConfig;

/// Runtime settings plus the client-only knobs.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub runtime: RuntimeConfig,
    /// Directory receiving `meal-max.log`
    pub log_dir: PathBuf,
}

impl ClientConfig {
    /// Environment variables (in addition to those read by [`RuntimeConfig::from_env`]):
    /// - `MEAL_LOG_DIR` - Log directory (default: platform cache dir)
    pub fn from_env() -> Result<Self> {
        let runtime = RuntimeConfig::from_env()?;
        let log_dir = std::env::var_os("MEAL_LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_log_dir);

        Ok(Self { runtime, log_dir })
    }
}

/// Get the platform-specific log directory
///
/// - macOS: `~/Library/Caches/meal-max/logs`
/// - Linux: `~/.cache/meal-max/logs` (or `$XDG_CACHE_HOME/meal-max/logs`)
/// - Windows: `%LOCALAPPDATA%\meal-max\logs`
/// - Fallback: `/tmp/meal-max/logs`
pub fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "meal-max")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/meal-max"))
        .join("logs")
}
