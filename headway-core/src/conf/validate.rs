use crate::conf::error::ConfigError;
use crate::conf::types::HeadwayConfig;
use http::{HeaderName, HeaderValue};
use std::net::SocketAddr;

/// Semantic validation of a parsed config.
///
/// Everything that can be rejected before the server starts is rejected
/// here, so the transform registry and the gateway never see unparseable
/// addresses or header names at request time.
pub fn validate_config(cfg: &HeadwayConfig) -> Result<(), ConfigError> {
    cfg.server
        .listen
        .parse::<SocketAddr>()
        .map_err(|e| ConfigError::InvalidListenAddr {
            listen: cfg.server.listen.clone(),
            reason: e.to_string(),
        })?;

    cfg.upstream
        .addr
        .parse::<SocketAddr>()
        .map_err(|e| ConfigError::InvalidUpstreamAddr {
            addr: cfg.upstream.addr.clone(),
            reason: e.to_string(),
        })?;

    if let Some(tls) = &cfg.server.tls
        && (tls.cert.is_empty() || tls.key.is_empty())
    {
        return Err(ConfigError::IncompleteTls);
    }

    for entry in &cfg.transforms.set_header {
        validate_header_name(&entry.name)?;
        if HeaderValue::from_str(&entry.value).is_err() {
            return Err(ConfigError::InvalidHeaderValue {
                name: entry.name.clone(),
            });
        }
    }

    for entry in &cfg.transforms.remove_header {
        validate_header_name(&entry.name)?;
    }

    Ok(())
}

fn validate_header_name(name: &str) -> Result<(), ConfigError> {
    HeaderName::from_bytes(name.as_bytes()).map_err(|_| ConfigError::InvalidHeaderName {
        name: name.to_owned(),
    })?;
    Ok(())
}
