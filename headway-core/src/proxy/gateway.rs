use crate::ctx::UpstreamCtx;
use crate::proxy::ProxyCtx;
use crate::proxy::sync_upstream_headers;
use crate::server::RuntimeState;
use crate::transform::TransformPipeline;
use arc_swap::ArcSwap;
use async_trait::async_trait;
use pingora::prelude::*;
use pingora_http::RequestHeader;
use std::sync::Arc;

/// ForwardGateway is the orchestration core of Headway. It wraps the
/// pingora hooks and drives the outbound transform pipeline against each
/// proxied request.
pub struct ForwardGateway {
    state: Arc<ArcSwap<RuntimeState>>,
}

impl ForwardGateway {
    pub fn new(state: Arc<ArcSwap<RuntimeState>>) -> Self {
        Self { state }
    }
}

/// Pingora hook execution order...
///
/// 1. new_ctx()
///    - Allocate the per-request ProxyCtx (request id, start instant)
///
/// 2. request_filter()
///    - Log receipt; never terminates the request itself
///
/// 3. upstream_peer()
///    - Build the HttpPeer for the single configured upstream
///
/// 4. upstream_request_filter()
///    - The transform pipeline driver. Pingora has already derived the
///      upstream request from the downstream one, which is the bulk header
///      copy; the context therefore starts with headers_copied = true.
///
/// 5. [pingora upstream I/O]
///
/// 6. logging()   /// ALWAYS LAST
///    - Final access-log line, including transport errors
#[async_trait]
impl ProxyHttp for ForwardGateway {
    type CTX = ProxyCtx;

    fn new_ctx(&self) -> Self::CTX {
        ProxyCtx::empty()
    }

    async fn request_filter(&self, session: &mut Session, ctx: &mut Self::CTX) -> Result<bool> {
        let req = session.req_header();
        tracing::debug!(
            request_id = %ctx.request_id,
            method = %req.method,
            path = req.uri.path(),
            "request received"
        );

        Ok(false)
    }

    async fn upstream_peer(
        &self,
        _session: &mut Session,
        _ctx: &mut Self::CTX,
    ) -> Result<Box<HttpPeer>> {
        let state = self.state.load();
        let upstream = &state.upstream;

        let peer = HttpPeer::new(
            upstream.addr.as_str(),
            upstream.tls,
            upstream.sni.clone().unwrap_or_default(),
        );

        Ok(Box::new(peer))
    }

    /// MUTATE UPSTREAM HEADERS
    ///
    /// The one place the transform pipeline runs.
    async fn upstream_request_filter(
        &self,
        session: &mut Session,
        upstream: &mut RequestHeader,
        _ctx: &mut Self::CTX,
    ) -> Result<()> {
        let state = self.state.load();

        let original = session.req_header().headers.clone();
        let before = upstream.headers.clone();

        let mut transform_ctx = UpstreamCtx::from_copied(original, before.clone());
        TransformPipeline::run(state.transforms.all(), &mut transform_ctx);

        sync_upstream_headers(upstream, &before, transform_ctx.headers())?;

        Ok(())
    }

    async fn logging(&self, session: &mut Session, e: Option<&Error>, ctx: &mut Self::CTX)
    where
        Self::CTX: Send + Sync,
    {
        let req = session.req_header();
        let status = session
            .response_written()
            .map_or(0, |resp| resp.status.as_u16());
        let duration_ms = ctx.received_at.elapsed().as_millis() as u64;

        match e {
            Some(err) => tracing::warn!(
                request_id = %ctx.request_id,
                method = %req.method,
                path = req.uri.path(),
                status,
                duration_ms,
                error = %err,
                "request failed"
            ),
            None => tracing::info!(
                request_id = %ctx.request_id,
                method = %req.method,
                path = req.uri.path(),
                status,
                duration_ms,
                "request completed"
            ),
        }
    }
}
