use serde::Deserialize;

/// Top-level Headway configuration, loaded from a TOML file.
#[derive(Debug, Clone, Deserialize)]
pub struct HeadwayConfig {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,

    #[serde(default)]
    pub transforms: TransformsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// e.g. "0.0.0.0:8080"
    pub listen: String,

    /// Optional override for pingora worker threads.
    pub threads: Option<usize>,

    /// Terminate TLS on the listener when present.
    pub tls: Option<TlsConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TlsConfig {
    pub cert: String,
    pub key: String,
}

/// The single backend destination requests are forwarded to.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    /// e.g. "127.0.0.1:3000"
    pub addr: String,

    #[serde(default)]
    pub tls: bool,

    /// SNI to present when `tls` is set.
    pub sni: Option<String>,
}

/// The outbound request-transform chain.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransformsConfig {
    /// True forwards the client's Host to the backend; false (the default)
    /// suppresses it so the transport derives one from the destination.
    #[serde(default)]
    pub use_original_host: bool,

    #[serde(default)]
    pub set_header: Vec<SetHeaderEntry>,

    #[serde(default)]
    pub remove_header: Vec<RemoveHeaderEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SetHeaderEntry {
    pub name: String,
    pub value: String,

    /// Append to existing values instead of replacing them.
    #[serde(default)]
    pub append: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RemoveHeaderEntry {
    pub name: String,
}
