//! Config-to-pipeline flow: parse a TOML config, build the transform
//! registry, run the pipeline over a synthetic request context, and check
//! the final outgoing header state.

use headway_core::conf::{load_config, parse_config, validate_config};
use headway_core::ctx::UpstreamCtx;
use headway_core::transform::{TransformPipeline, TransformRegistry};
use integration_tests::request_headers;
use pretty_assertions::assert_eq;

fn run_pipeline(config: &str, incoming: &[(&str, &str)]) -> UpstreamCtx {
    let cfg = parse_config(config).unwrap();
    validate_config(&cfg).unwrap();
    let registry = TransformRegistry::from_config(&cfg.transforms).unwrap();

    let mut ctx = UpstreamCtx::new(request_headers(incoming));
    ctx.copy_original_headers();
    TransformPipeline::run(registry.all(), &mut ctx);
    ctx
}

const BASE: &str = r#"
    [server]
    listen = "0.0.0.0:8080"

    [upstream]
    addr = "127.0.0.1:3000"
"#;

#[test]
fn default_config_suppresses_the_copied_host() {
    let ctx = run_pipeline(
        BASE,
        &[("host", "example.com"), ("user-agent", "curl/8.0")],
    );

    assert_eq!(ctx.headers().get("host"), None);
    assert_eq!(ctx.headers().get("user-agent").unwrap(), "curl/8.0");
}

#[test]
fn original_host_survives_when_configured() {
    let config = format!(
        "{BASE}
        [transforms]
        use_original_host = true
        "
    );

    let ctx = run_pipeline(&config, &[("host", "example.com")]);

    assert_eq!(ctx.headers().get("host").unwrap(), "example.com");
}

#[test]
fn directives_apply_before_the_host_policy() {
    let config = format!(
        "{BASE}
        [[transforms.set_header]]
        name = \"x-sent-by\"
        value = \"headway\"

        [[transforms.set_header]]
        name = \"host\"
        value = \"custom.internal\"

        [[transforms.remove_header]]
        name = \"x-internal-debug\"
        "
    );

    let ctx = run_pipeline(
        &config,
        &[
            ("host", "example.com"),
            ("x-internal-debug", "1"),
            ("accept", "*/*"),
        ],
    );

    // The configured Host is a custom value, so the default suppress
    // policy leaves it alone.
    assert_eq!(ctx.headers().get("host").unwrap(), "custom.internal");
    assert_eq!(ctx.headers().get("x-sent-by").unwrap(), "headway");
    assert_eq!(ctx.headers().get("x-internal-debug"), None);
    assert_eq!(ctx.headers().get("accept").unwrap(), "*/*");
}

#[test]
fn pipeline_without_copy_leaves_headers_untouched() {
    let cfg = parse_config(BASE).unwrap();
    let registry = TransformRegistry::from_config(&cfg.transforms).unwrap();

    let mut ctx = UpstreamCtx::new(request_headers(&[("host", "example.com")]));
    TransformPipeline::run(registry.all(), &mut ctx);

    assert!(ctx.headers().is_empty());
    assert!(!ctx.headers_copied());
}

#[test]
fn load_config_rejects_missing_file() {
    let err = load_config(std::path::Path::new("/nonexistent/headway.toml")).unwrap_err();

    assert!(err.to_string().contains("failed to read config file"));
}
