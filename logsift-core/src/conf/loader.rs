use crate::conf::error::ConfigError;
use crate::conf::types::Config;

use std::fs;
use std::path::Path;

/// Loads the analyzer configuration.
///
/// Without a path the built-in defaults are returned as-is. With a path the
/// file must exist and parse; keys absent from the file keep their defaults.
///
/// # Errors
///
/// Returns `ConfigError::ReadFile` when the file cannot be read,
/// `ConfigError::Parse` for malformed TOML or unknown keys, and
/// `ConfigError::RatioOutOfRange` when `error_max_ratio` falls outside
/// `[0, 1]`.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let config = match path {
        None => Config::default(),
        Some(path) => {
            let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
                path: path.to_path_buf(),
                source: e,
            })?;

            toml::from_str(&contents).map_err(|e| ConfigError::Parse {
                path: path.to_path_buf(),
                source: e,
            })?
        }
    };

    validate(config)
}

fn validate(config: Config) -> Result<Config, ConfigError> {
    // NaN fails the range check as well.
    if !(0.0..=1.0).contains(&config.error_max_ratio) {
        return Err(ConfigError::RatioOutOfRange {
            value: config.error_max_ratio,
        });
    }

    Ok(config)
}
