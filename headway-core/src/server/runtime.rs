use crate::conf::{HeadwayConfig, UpstreamConfig, load_config};
use crate::transform::TransformRegistry;
use anyhow::Result;
use arc_swap::ArcSwap;
use std::path::Path;
use std::sync::Arc;

/// Everything the gateway needs per request, swapped atomically on reload.
pub struct RuntimeState {
    pub upstream: UpstreamConfig,
    pub transforms: TransformRegistry,
}

pub fn build_runtime_state(cfg: &HeadwayConfig) -> Result<RuntimeState> {
    let transforms = TransformRegistry::from_config(&cfg.transforms)?;

    Ok(RuntimeState {
        upstream: cfg.upstream.clone(),
        transforms,
    })
}

/// Re-load the config file and swap the runtime state. On failure the
/// previous state stays in place and the error is returned to the caller.
pub async fn reload_runtime_state(config_path: &Path, state: &ArcSwap<RuntimeState>) -> Result<()> {
    let cfg = load_config(config_path)?;
    let new_state = build_runtime_state(&cfg)?;

    let old = state.load();
    tracing::info!(
        old_transforms = old.transforms.all().len(),
        new_transforms = new_state.transforms.all().len(),
        upstream = %new_state.upstream.addr,
        "runtime state reloaded"
    );

    state.store(Arc::new(new_state));

    Ok(())
}
