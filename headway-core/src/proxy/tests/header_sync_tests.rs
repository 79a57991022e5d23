use crate::proxy::sync_upstream_headers;
use http::HeaderValue;
use http::header::HOST;
use pingora_http::RequestHeader;
use pretty_assertions::assert_eq;

fn upstream_request(pairs: &[(&str, &str)]) -> RequestHeader {
    let mut req = RequestHeader::build("GET", b"/", None).unwrap();
    for (name, value) in pairs {
        req.append_header(name.to_string(), *value).unwrap();
    }
    req
}

#[test]
fn removes_names_that_vanished() {
    // Arrange
    let mut upstream = upstream_request(&[("host", "example.com"), ("accept", "*/*")]);
    let before = upstream.headers.clone();
    let mut after = before.clone();
    after.remove(&HOST);

    // Act
    sync_upstream_headers(&mut upstream, &before, &after).unwrap();

    // Assert
    assert!(upstream.headers.get("host").is_none());
    assert_eq!(upstream.headers.get("accept").unwrap(), "*/*");
}

#[test]
fn rewrites_changed_values() {
    let mut upstream = upstream_request(&[("host", "example.com")]);
    let before = upstream.headers.clone();
    let mut after = before.clone();
    after.insert(HOST, HeaderValue::from_static("custom.internal"));

    sync_upstream_headers(&mut upstream, &before, &after).unwrap();

    assert_eq!(upstream.headers.get("host").unwrap(), "custom.internal");
    assert_eq!(upstream.headers.get_all("host").iter().count(), 1);
}

#[test]
fn adds_new_names() {
    let mut upstream = upstream_request(&[("host", "example.com")]);
    let before = upstream.headers.clone();
    let mut after = before.clone();
    after.insert("x-sent-by", HeaderValue::from_static("headway"));

    sync_upstream_headers(&mut upstream, &before, &after).unwrap();

    assert_eq!(upstream.headers.get("x-sent-by").unwrap(), "headway");
}

#[test]
fn keeps_multi_values_in_order() {
    let mut upstream = upstream_request(&[("host", "example.com")]);
    let before = upstream.headers.clone();
    let mut after = before.clone();
    after.append("x-trace", HeaderValue::from_static("client"));
    after.append("x-trace", HeaderValue::from_static("edge"));

    sync_upstream_headers(&mut upstream, &before, &after).unwrap();

    let values: Vec<&[u8]> = upstream
        .headers
        .get_all("x-trace")
        .iter()
        .map(|v| v.as_bytes())
        .collect();
    assert_eq!(values, vec![b"client".as_slice(), b"edge".as_slice()]);
}

#[test]
fn untouched_headers_are_left_alone() {
    let mut upstream = upstream_request(&[("host", "example.com"), ("accept", "*/*")]);
    let before = upstream.headers.clone();
    let after = before.clone();

    sync_upstream_headers(&mut upstream, &before, &after).unwrap();

    assert_eq!(upstream.headers.len(), 2);
    assert_eq!(upstream.headers.get("host").unwrap(), "example.com");
}
