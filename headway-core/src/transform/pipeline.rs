use super::RequestTransform;
use crate::ctx::UpstreamCtx;
use std::sync::Arc;

/// Drives the configured transforms over one request context.
///
/// Transforms run in configured order, exactly once each, sequentially on
/// the single `&mut` context. No transform for the same request ever runs
/// concurrently with another; the pipeline itself never touches a header.
pub struct TransformPipeline;

impl TransformPipeline {
    pub fn run(transforms: &[Arc<dyn RequestTransform>], ctx: &mut UpstreamCtx) {
        for transform in transforms {
            transform.apply(ctx);
        }
    }
}
