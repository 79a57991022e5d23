use crate::ctx::UpstreamCtx;
use crate::transform::RequestTransform;
use http::header::HOST;

/// Whether the upstream request carries the client's original Host value or
/// falls back to the destination's own default.
///
/// Selected once at configuration time and shared unchanged across all
/// concurrent requests for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostPolicy {
    /// Forward the Host the client sent, unless something else in the
    /// pipeline already chose a custom value.
    UseOriginal,

    /// Drop the client's Host so the transport derives one from the
    /// destination address. Custom values are left alone.
    Suppress,
}

/// Applies the configured [`HostPolicy`] to the outgoing request.
///
/// Both variants act only after the bulk header copy has run: acting
/// earlier would either be clobbered by the copy or remove a value the copy
/// is about to re-add. Getting this wrong silently breaks virtual hosting
/// on the backend, hence the deliberately narrow conditions below.
#[derive(Debug)]
pub struct OriginalHostTransform {
    policy: HostPolicy,
}

impl OriginalHostTransform {
    pub fn new(policy: HostPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> HostPolicy {
        self.policy
    }
}

impl RequestTransform for OriginalHostTransform {
    fn apply(&self, ctx: &mut UpstreamCtx) {
        if !ctx.headers_copied() {
            // The copy step owns the initial Host state.
            return;
        }

        match self.policy {
            HostPolicy::UseOriginal => {
                // Don't override a custom host.
                if !ctx.contains(&HOST) {
                    let original = ctx.original_host().clone();
                    ctx.append(HOST, original);
                }
            }

            HostPolicy::Suppress => {
                // Don't remove a custom host, only the original. The
                // comparison is byte-exact: case or whitespace differences
                // mean someone chose that value on purpose.
                if let Some(current) = ctx.single_value(&HOST)
                    && current.as_bytes() == ctx.original_host().as_bytes()
                {
                    ctx.remove(&HOST);
                }
            }
        }
    }
}
