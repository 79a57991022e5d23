use crate::conf::{ConfigError, parse_config};
use pretty_assertions::assert_eq;

#[test]
fn parses_minimal_config() {
    let cfg = parse_config(
        r#"
        [server]
        listen = "0.0.0.0:8080"

        [upstream]
        addr = "127.0.0.1:3000"
        "#,
    )
    .unwrap();

    assert_eq!(cfg.server.listen, "0.0.0.0:8080");
    assert_eq!(cfg.server.threads, None);
    assert_eq!(cfg.upstream.addr, "127.0.0.1:3000");
    assert!(!cfg.upstream.tls);

    // [transforms] is optional and defaults to suppress-only.
    assert!(!cfg.transforms.use_original_host);
    assert!(cfg.transforms.set_header.is_empty());
    assert!(cfg.transforms.remove_header.is_empty());
}

#[test]
fn parses_full_transform_section() {
    let cfg = parse_config(
        r#"
        [server]
        listen = "0.0.0.0:8080"
        threads = 4

        [upstream]
        addr = "10.0.0.5:443"
        tls = true
        sni = "backend.internal"

        [transforms]
        use_original_host = true

        [[transforms.set_header]]
        name = "x-sent-by"
        value = "headway"

        [[transforms.set_header]]
        name = "x-trace"
        value = "edge"
        append = true

        [[transforms.remove_header]]
        name = "x-internal-debug"
        "#,
    )
    .unwrap();

    assert_eq!(cfg.server.threads, Some(4));
    assert_eq!(cfg.upstream.sni.as_deref(), Some("backend.internal"));
    assert!(cfg.transforms.use_original_host);
    assert_eq!(cfg.transforms.set_header.len(), 2);
    assert!(!cfg.transforms.set_header[0].append);
    assert!(cfg.transforms.set_header[1].append);
    assert_eq!(cfg.transforms.remove_header.len(), 1);
}

#[test]
fn parses_tls_listener() {
    let cfg = parse_config(
        r#"
        [server]
        listen = "0.0.0.0:8443"

        [server.tls]
        cert = "/etc/headway/cert.pem"
        key = "/etc/headway/key.pem"

        [upstream]
        addr = "127.0.0.1:3000"
        "#,
    )
    .unwrap();

    let tls = cfg.server.tls.unwrap();
    assert_eq!(tls.cert, "/etc/headway/cert.pem");
    assert_eq!(tls.key, "/etc/headway/key.pem");
}

#[test]
fn missing_upstream_section_is_a_parse_error() {
    let err = parse_config(
        r#"
        [server]
        listen = "0.0.0.0:8080"
        "#,
    )
    .unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
}
