mod error;
mod loader;
#[cfg(test)]
mod tests;
mod types;
mod validate;

pub use error::ConfigError;
pub use loader::{load_config, parse_config};
pub use types::{
    HeadwayConfig, RemoveHeaderEntry, ServerConfig, SetHeaderEntry, TlsConfig, TransformsConfig,
    UpstreamConfig,
};
pub use validate::validate_config;
