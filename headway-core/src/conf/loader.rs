use crate::conf::error::ConfigError;
use crate::conf::types::HeadwayConfig;
use crate::conf::validate::validate_config;
use std::fs;
use std::path::Path;

/// Read, parse, and validate a config file.
pub fn load_config(path: &Path) -> Result<HeadwayConfig, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    let config = parse_config(&raw)?;
    validate_config(&config)?;

    Ok(config)
}

/// Parse a config from TOML text without validating it.
pub fn parse_config(raw: &str) -> Result<HeadwayConfig, ConfigError> {
    toml::from_str(raw).map_err(|e| ConfigError::Parse { source: e })
}
