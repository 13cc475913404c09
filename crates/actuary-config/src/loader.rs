//! Loading configurations from JSON and TOML.

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ConfigResult, Validate};

/// Parses and validates a configuration from JSON.
pub fn from_json_str<T>(input: &str) -> ConfigResult<T>
where
    T: DeserializeOwned + Validate,
{
    let config: T = serde_json::from_str(input)?;
    checked(config, "JSON")
}

/// Parses and validates a configuration from TOML.
pub fn from_toml_str<T>(input: &str) -> ConfigResult<T>
where
    T: DeserializeOwned + Validate,
{
    let config: T = toml::from_str(input)?;
    checked(config, "TOML")
}

/// Serializes a configuration to pretty-printed JSON.
pub fn to_json_string<T: Serialize>(config: &T) -> ConfigResult<String> {
    Ok(serde_json::to_string_pretty(config)?)
}

/// Serializes a configuration to TOML.
pub fn to_toml_string<T: Serialize>(config: &T) -> ConfigResult<String> {
    Ok(toml::to_string(config)?)
}

fn checked<T: Validate>(config: T, format: &str) -> ConfigResult<T> {
    if let Err(err) = config.validate_or_error() {
        warn!("Rejected {format} configuration: {err}");
        return Err(err);
    }
    debug!("Loaded {format} configuration");
    Ok(config)
}
