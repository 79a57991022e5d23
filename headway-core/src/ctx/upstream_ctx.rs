use http::header::HOST;
use http::{HeaderMap, HeaderName, HeaderValue};

/// Canonical per-request context passed through the outbound transform
/// pipeline.
///
/// One `UpstreamCtx` exists per forwarded request. The driver constructs it,
/// hands it to each transform in order by mutable reference, and drops it
/// when the request completes. It is never shared across requests.
#[derive(Debug)]
pub struct UpstreamCtx {
    /// Full header set of the incoming client request, untouched.
    original_headers: HeaderMap,

    /// Host value as presented by the client. Possibly empty, never absent.
    ///
    /// Captured once at construction from the already-parsed incoming
    /// request, so re-inserting it downstream needs no re-validation.
    original_host: HeaderValue,

    /// The request headers about to be sent upstream.
    headers: HeaderMap,

    /// True once the bulk copy of original headers into `headers` has run.
    /// Monotonic: never reverts to false for the lifetime of the request.
    headers_copied: bool,
}

/// Construction API
impl UpstreamCtx {
    /// Context for a driver that has not copied any original headers yet.
    pub fn new(original_headers: HeaderMap) -> Self {
        let original_host = single_value(&original_headers, &HOST);
        Self {
            original_headers,
            original_host,
            headers: HeaderMap::new(),
            headers_copied: false,
        }
    }

    /// Context for a driver whose outgoing request already started from a
    /// bulk copy of the original headers (pingora derives the upstream
    /// request from the downstream one, so this is the gateway path).
    pub fn from_copied(original_headers: HeaderMap, outgoing: HeaderMap) -> Self {
        let original_host = single_value(&original_headers, &HOST);
        Self {
            original_headers,
            original_host,
            headers: outgoing,
            headers_copied: true,
        }
    }

    /// Copy every original header (Host included) into the outgoing map and
    /// mark the copy as done. A second call is a no-op; the flag never
    /// reverts.
    pub fn copy_original_headers(&mut self) {
        if self.headers_copied {
            return;
        }

        for (name, value) in self.original_headers.iter() {
            self.headers.append(name.clone(), value.clone());
        }

        self.headers_copied = true;
    }
}

/// Read API
impl UpstreamCtx {
    pub fn original_headers(&self) -> &HeaderMap {
        &self.original_headers
    }

    pub fn original_host(&self) -> &HeaderValue {
        &self.original_host
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn headers_copied(&self) -> bool {
        self.headers_copied
    }

    pub fn contains(&self, name: &HeaderName) -> bool {
        self.headers.contains_key(name)
    }

    /// All outgoing values for `name` collapsed into the single string the
    /// transport would compare against: absent names yield `None`, multiple
    /// values are joined with `", "`.
    pub fn single_value(&self, name: &HeaderName) -> Option<HeaderValue> {
        if !self.headers.contains_key(name) {
            return None;
        }
        Some(single_value(&self.headers, name))
    }
}

/// Mutation API
///
/// Values are `HeaderValue`s, i.e. already validated by whoever produced
/// them (the HTTP parser for copied values, config loading for configured
/// ones). Nothing here re-validates or escapes.
impl UpstreamCtx {
    /// Add a value for `name`, keeping any existing values.
    pub fn append(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers.append(name, value);
    }

    /// Replace all values for `name` with a single value.
    pub fn insert(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers.insert(name, value);
    }

    /// Remove the entry for `name` entirely, all values included.
    pub fn remove(&mut self, name: &HeaderName) {
        self.headers.remove(name);
    }
}

/// Collapse all values for `name` into one value, joining with `", "`.
/// Absent names collapse to the empty value.
fn single_value(headers: &HeaderMap, name: &HeaderName) -> HeaderValue {
    let mut iter = headers.get_all(name).iter();

    let Some(first) = iter.next() else {
        return HeaderValue::from_static("");
    };

    let Some(second) = iter.next() else {
        return first.clone();
    };

    let mut joined = first.as_bytes().to_vec();
    for value in [second].into_iter().chain(iter) {
        joined.extend_from_slice(b", ");
        joined.extend_from_slice(value.as_bytes());
    }

    // Joining valid header values with ", " cannot produce an invalid one.
    HeaderValue::from_bytes(&joined).unwrap_or_else(|_| HeaderValue::from_static(""))
}
