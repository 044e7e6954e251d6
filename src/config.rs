//! Configuration loading.
//!
//! Settings come from a TOML file. Without an explicit path the file is
//! looked up at `$XDG_CONFIG_HOME/zcalc/config.toml` (or the platform
//! equivalent); a missing file there just means defaults.
//!
//! ```toml
//! history_limit = 50
//!
//! [messages]
//! divide_by_zero = "0으로 나눌 수 없습니다"
//! ```

use crate::calculator::{Calculator, ErrorMessages};
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

const APP_DIR: &str = "zcalc";
const CONFIG_FILE: &str = "config.toml";

/// Errors loading the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// User settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Messages shown for each error kind.
    pub messages: ErrorMessages,
    /// Maximum number of history entries kept; unbounded when unset.
    pub history_limit: Option<usize>,
}

impl Config {
    /// Load configuration from `path`, or from the default location when
    /// no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => match default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => {
                    debug!("no config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Create a calculator using these settings.
    pub fn build_calculator(&self) -> Calculator {
        Calculator::with_settings(self.messages.clone(), self.history_limit)
    }
}

/// Default config file location, if the platform has a config directory.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{Action, Function};

    #[test]
    fn test_empty_config_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.history_limit, None);
    }

    #[test]
    fn test_partial_messages() {
        let config: Config = toml::from_str(
            r#"
            history_limit = 3

            [messages]
            divide_by_zero = "Division durch Null"
            "#,
        )
        .unwrap();
        assert_eq!(config.history_limit, Some(3));
        assert_eq!(config.messages.divide_by_zero, "Division durch Null");
        assert_eq!(config.messages.unknown, ErrorMessages::default().unknown);
    }

    #[test]
    fn test_build_calculator() {
        let config: Config = toml::from_str("[messages]\ndivide_by_zero = \"nope\"").unwrap();
        let mut calc = config.build_calculator();
        calc.apply(Action::Function(Function::Reciprocal)).unwrap();
        assert_eq!(calc.display_text(), "nope");
    }

    #[test]
    fn test_missing_explicit_file() {
        let path = std::env::temp_dir().join("zcalc-missing-config-for-test.toml");
        assert!(matches!(
            Config::load(Some(&path)),
            Err(ConfigError::Read { .. })
        ));
    }

    #[test]
    fn test_malformed_file() {
        let path = std::env::temp_dir().join(format!("zcalc-bad-config-{}.toml", std::process::id()));
        fs::write(&path, "history_limit = \"many\"").unwrap();
        let result = Config::from_file(&path);
        fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }
}
