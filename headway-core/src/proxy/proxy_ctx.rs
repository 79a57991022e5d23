use crate::ctx::RequestId;
use std::time::Instant;

/// Per-request gateway state, allocated in `new_ctx` and carried through
/// every pingora hook until the final logging hook.
#[derive(Debug)]
pub struct ProxyCtx {
    pub request_id: RequestId,

    /// When the request entered the gateway; the access log derives the
    /// request duration from it.
    pub received_at: Instant,
}

impl ProxyCtx {
    pub fn empty() -> Self {
        Self {
            request_id: RequestId::default(),
            received_at: Instant::now(),
        }
    }
}

impl Default for ProxyCtx {
    fn default() -> Self {
        Self::empty()
    }
}
