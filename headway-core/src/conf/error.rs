use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    //-------------------------------------------------------------------------
    // IO / Parsing
    //-------------------------------------------------------------------------
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {source}")]
    Parse {
        #[source]
        source: toml::de::Error,
    },

    //-------------------------------------------------------------------------
    // Addresses
    //-------------------------------------------------------------------------
    #[error("invalid listen address '{listen}': {reason}")]
    InvalidListenAddr { listen: String, reason: String },

    #[error("invalid upstream address '{addr}': {reason}")]
    InvalidUpstreamAddr { addr: String, reason: String },

    //-------------------------------------------------------------------------
    // TLS
    //-------------------------------------------------------------------------
    #[error("tls listener requires non-empty cert and key paths")]
    IncompleteTls,

    //-------------------------------------------------------------------------
    // Transforms
    //-------------------------------------------------------------------------
    #[error("invalid header name '{name}' in [transforms]")]
    InvalidHeaderName { name: String },

    #[error("invalid header value for '{name}' in [transforms]")]
    InvalidHeaderValue { name: String },
}
