use http::HeaderMap;
use pingora::prelude::*;
use pingora_http::RequestHeader;

/// Reconcile the transform pipeline's view of the outgoing headers back
/// onto the pingora upstream request.
///
/// `before` is the header map as it was when the pipeline started, `after`
/// the map the pipeline produced. Names that vanished are removed from the
/// upstream request; names whose value set changed are rewritten in full.
/// Untouched names are left to pingora, which preserves whatever casing the
/// client sent.
pub(crate) fn sync_upstream_headers(
    upstream: &mut RequestHeader,
    before: &HeaderMap,
    after: &HeaderMap,
) -> Result<()> {
    for name in before.keys() {
        if !after.contains_key(name) {
            upstream.remove_header(name.as_str());
        }
    }

    for name in after.keys() {
        let unchanged = before
            .get_all(name)
            .iter()
            .eq(after.get_all(name).iter());
        if unchanged {
            continue;
        }

        upstream.remove_header(name.as_str());
        for value in after.get_all(name) {
            upstream.append_header(name.clone(), value.clone())?;
        }
    }

    Ok(())
}
