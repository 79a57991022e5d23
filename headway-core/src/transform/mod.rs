mod host;
mod pipeline;
mod registry;
mod static_headers;

pub use host::{HostPolicy, OriginalHostTransform};
pub use pipeline::TransformPipeline;
pub use registry::TransformRegistry;
pub use static_headers::{RemoveHeaderTransform, SetHeaderTransform};

use crate::ctx::UpstreamCtx;

/// A single policy unit in the outbound request pipeline.
///
/// Transforms inspect and may mutate the request headed upstream, through
/// the shared per-request [`UpstreamCtx`]. They are built once at
/// configuration time, carry no per-request state, and are shared across
/// all concurrent requests, so implementations must be `Send + Sync` and
/// immutable after construction.
///
/// `apply` is synchronous and infallible: anything that can fail (header
/// name or value parsing) happens when the transform is built, never per
/// request.
pub trait RequestTransform: Send + Sync {
    fn apply(&self, ctx: &mut UpstreamCtx);
}
