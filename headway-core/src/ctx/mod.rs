mod request_id;
mod upstream_ctx;

pub use request_id::RequestId;
pub use upstream_ctx::UpstreamCtx;
