use crate::conf::HeadwayConfig;
use crate::proxy::ForwardGateway;
use crate::server::reload::ReloadHandle;
use crate::server::runtime::{RuntimeState, build_runtime_state, reload_runtime_state};
use anyhow::{Error, Result};
use arc_swap::ArcSwap;
use pingora::prelude::*;
use pingora::server::Server;
use pingora::server::configuration::ServerConf;
use std::path::PathBuf;
use std::sync::Arc;

/// Run the pingora server with the given configuration.
pub fn run(config_path: PathBuf, config: HeadwayConfig) -> Result<()> {
    use tokio::runtime::Builder;

    // Build initial runtime state (reloadable)
    let initial_state = build_runtime_state(&config)?;
    let state = Arc::new(ArcSwap::from_pointee(initial_state));

    // Control-plane runtime (signals + reload only)
    let control_rt = Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .expect("failed to build control-plane Tokio runtime");

    // Reload wiring
    let reload = ReloadHandle::new();

    // Spawn signal handler
    control_rt.spawn({
        let reload = reload.clone();
        async move {
            let _ = reload.install_signal_handler().await;
        }
    });

    // Spawn reload loop
    control_rt.spawn({
        let mut reload_rx = reload.subscribe();
        let state = state.clone();
        let config_path = config_path.clone();

        async move {
            tracing::info!("reload loop started");

            loop {
                if reload_rx.changed().await.is_err() {
                    break;
                }

                match reload_runtime_state(&config_path, &state).await {
                    Ok(()) => tracing::info!("reload successful"),
                    Err(e) => tracing::error!(error = %e, "reload failed; keeping previous state"),
                }
            }
        }
    });

    // Build the pingora server (pingora owns its own runtimes)
    let server = build_server(&config, state)?;

    tracing::info!(
        listen = %config.server.listen,
        upstream = %config.upstream.addr,
        "headway starting"
    );

    // IMPORTANT:
    // - control_rt must stay in scope so its worker thread lives
    // - run_forever blocks the main thread as intended
    server.run_forever();
}

/// Build the pingora server with the gateway service attached.
pub fn build_server(
    config: &HeadwayConfig,
    state: Arc<ArcSwap<RuntimeState>>,
) -> Result<Server, Error> {
    let mut server = if let Some(threads) = config.server.threads {
        tracing::debug!(threads, "creating pingora server with worker override");
        let mut conf = ServerConf::new().expect("could not construct pingora server configuration");
        conf.threads = threads;
        Server::new_with_opt_and_conf(None, conf)
    } else {
        // "None" is required here to truly tell pingora to use its defaults.
        Server::new(None)?
    };

    server.bootstrap();

    let gateway = ForwardGateway::new(state);

    let mut svc = http_proxy_service(&server.configuration, gateway);
    if let Some(tls) = &config.server.tls {
        svc.add_tls(&config.server.listen, &tls.cert, &tls.key)?;
    } else {
        svc.add_tcp(&config.server.listen);
    }

    server.add_service(svc);

    Ok(server)
}
