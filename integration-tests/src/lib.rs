//! Shared helpers for Headway integration tests.

use http::{HeaderMap, HeaderName, HeaderValue};

/// Build a header map from name/value pairs, keeping duplicates.
pub fn request_headers(pairs: &[(&str, &str)]) -> HeaderMap {
    let mut headers = HeaderMap::new();
    for (name, value) in pairs {
        headers.append(
            HeaderName::from_bytes(name.as_bytes()).unwrap(),
            HeaderValue::from_str(value).unwrap(),
        );
    }
    headers
}
