use crate::ctx::UpstreamCtx;
use crate::transform::RequestTransform;
use http::{HeaderName, HeaderValue};

/// Sets (or appends) a statically configured header on the outgoing
/// request.
///
/// Name and value are parsed when the transform is built from config, so
/// `apply` only clones pre-validated values. Runs regardless of whether the
/// bulk copy happened: it expresses operator intent about the outgoing
/// request, not about copied state.
#[derive(Debug)]
pub struct SetHeaderTransform {
    name: HeaderName,
    value: HeaderValue,
    append: bool,
}

impl SetHeaderTransform {
    pub fn new(name: HeaderName, value: HeaderValue, append: bool) -> Self {
        Self {
            name,
            value,
            append,
        }
    }
}

impl RequestTransform for SetHeaderTransform {
    fn apply(&self, ctx: &mut UpstreamCtx) {
        if self.append {
            ctx.append(self.name.clone(), self.value.clone());
        } else {
            ctx.insert(self.name.clone(), self.value.clone());
        }
    }
}

/// Removes a statically configured header from the outgoing request.
#[derive(Debug)]
pub struct RemoveHeaderTransform {
    name: HeaderName,
}

impl RemoveHeaderTransform {
    pub fn new(name: HeaderName) -> Self {
        Self { name }
    }
}

impl RequestTransform for RemoveHeaderTransform {
    fn apply(&self, ctx: &mut UpstreamCtx) {
        ctx.remove(&self.name);
    }
}
