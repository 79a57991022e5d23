use crate::conf::TransformsConfig;
use crate::transform::{
    HostPolicy, OriginalHostTransform, RemoveHeaderTransform, RequestTransform,
    SetHeaderTransform,
};
use anyhow::{Context, Result};
use http::{HeaderName, HeaderValue};
use std::sync::Arc;

/// The ordered transform chain built from config.
///
/// Built once per config load and shared across all concurrent requests.
/// Order matters: set directives first, then remove directives, then the
/// Host policy last, so explicit directives count as "a custom value set by
/// a prior transform" for the Host policy's precedence rules.
pub struct TransformRegistry {
    transforms: Vec<Arc<dyn RequestTransform>>,
}

impl TransformRegistry {
    pub fn from_config(cfg: &TransformsConfig) -> Result<Self> {
        let mut transforms: Vec<Arc<dyn RequestTransform>> = Vec::new();

        for entry in &cfg.set_header {
            let name = HeaderName::from_bytes(entry.name.as_bytes())
                .with_context(|| format!("invalid header name '{}'", entry.name))?;
            let value = HeaderValue::from_str(&entry.value)
                .with_context(|| format!("invalid header value for '{}'", entry.name))?;

            transforms.push(Arc::new(SetHeaderTransform::new(name, value, entry.append)));
        }

        for entry in &cfg.remove_header {
            let name = HeaderName::from_bytes(entry.name.as_bytes())
                .with_context(|| format!("invalid header name '{}'", entry.name))?;

            transforms.push(Arc::new(RemoveHeaderTransform::new(name)));
        }

        let policy = if cfg.use_original_host {
            HostPolicy::UseOriginal
        } else {
            HostPolicy::Suppress
        };
        transforms.push(Arc::new(OriginalHostTransform::new(policy)));

        Ok(Self { transforms })
    }

    pub fn all(&self) -> &[Arc<dyn RequestTransform>] {
        &self.transforms
    }
}
