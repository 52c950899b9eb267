//! Runtime configuration structures and loaders.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{Result, RuntimeError};
use crate::oracle::{DEFAULT_TIMEOUT, RANDOM_ORG_URL};

/// Where the catalog lives.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CatalogBackend {
    /// Process-local, discarded on exit
    Memory,
    /// JSON document in the data directory
    #[default]
    File,
}

/// Where battle draws come from.
#[derive(Clone, Debug, PartialEq)]
pub enum RandomSource {
    /// HTTP endpoint returning one number as plain text
    Remote { url: String, timeout: Duration },
    /// Scripted draws, consumed in order
    Fixed(Vec<f64>),
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::Remote {
            url: RANDOM_ORG_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Configuration required to assemble an [`Arena`](crate::Arena).
#[derive(Clone, Debug, Default)]
pub struct RuntimeConfig {
    pub catalog: CatalogBackend,
    /// Directory holding `catalog.json` (default: platform data dir)
    pub data_dir: Option<PathBuf>,
    pub random: RandomSource,
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `MEAL_CATALOG` - `memory` or `file` (default: file)
    /// - `MEAL_DATA_DIR` - Directory for the catalog file (default: platform-specific)
    /// - `RANDOM_ORG_URL` - Draw endpoint (default: random.org decimal fractions)
    /// - `RANDOM_TIMEOUT_SECS` - Draw request timeout (default: 5)
    /// - `RANDOM_DRAWS` - Comma-separated scripted draws; disables the remote source
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(raw) = env::var("MEAL_CATALOG") {
            config.catalog = raw
                .parse()
                .map_err(|_| RuntimeError::Config(format!("unknown MEAL_CATALOG '{raw}'")))?;
        }

        config.data_dir = env::var("MEAL_DATA_DIR").ok().map(PathBuf::from);

        if let Ok(raw) = env::var("RANDOM_DRAWS") {
            config.random = RandomSource::Fixed(parse_draws(&raw)?);
        } else {
            let url = env::var("RANDOM_ORG_URL").unwrap_or_else(|_| RANDOM_ORG_URL.to_string());
            let timeout = read_env::<u64>("RANDOM_TIMEOUT_SECS")
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_TIMEOUT);
            config.random = RandomSource::Remote { url, timeout };
        }

        Ok(config)
    }

    /// Data directory, falling back to the platform default.
    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(default_data_dir)
    }
}

/// Get the platform-specific data directory
///
/// - macOS: `~/Library/Application Support/meal-max`
/// - Linux: `~/.local/share/meal-max` (or `$XDG_DATA_HOME/meal-max`)
/// - Windows: `%APPDATA%\meal-max`
/// - Fallback: `./meal_data`
pub fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "meal-max")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./meal_data"))
}

/// Parse `"0.1, 0.5,0.9"` into draws.
///
/// Draws must be finite numbers, the same rule applied to random.org bodies.
pub fn parse_draws(raw: &str) -> Result<Vec<f64>> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| match part.parse::<f64>() {
            Ok(draw) if draw.is_finite() => Ok(draw),
            _ => Err(RuntimeError::Config(format!("invalid random draw '{part}'"))),
        })
        .collect()
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_parse_with_whitespace() {
        assert_eq!(parse_draws("0.1, 0.5,0.9").unwrap(), vec![0.1, 0.5, 0.9]);
        assert_eq!(parse_draws("").unwrap(), Vec::<f64>::new());
        assert!(matches!(
            parse_draws("0.1,abc"),
            Err(RuntimeError::Config(_))
        ));
    }

    #[test]
    fn draws_must_be_finite() {
        for raw in ["NaN", "0.5,inf", "-inf"] {
            assert!(
                matches!(parse_draws(raw), Err(RuntimeError::Config(_))),
                "{raw} was accepted"
            );
        }
    }

    #[test]
    fn backend_names() {
        assert_eq!("memory".parse::<CatalogBackend>().unwrap(), CatalogBackend::Memory);
        assert_eq!("FILE".parse::<CatalogBackend>().unwrap(), CatalogBackend::File);
        assert!("sqlite".parse::<CatalogBackend>().is_err());
    }

    #[test]
    fn explicit_data_dir_wins() {
        let config = RuntimeConfig {
            data_dir: Some(PathBuf::from("/tmp/meals")),
            ..RuntimeConfig::default()
        };
        assert_eq!(config.resolved_data_dir(), PathBuf::from("/tmp/meals"));
    }
}
