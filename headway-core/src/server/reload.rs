use tokio::signal::unix::{SignalKind, signal};
use tokio::sync::watch;

/// Fans config-reload requests out to the control loop.
///
/// Each notification bumps an epoch so subscribers can never miss a reload
/// that raced their last read.
#[derive(Clone)]
pub struct ReloadHandle {
    tx: watch::Sender<u64>,
}

impl Default for ReloadHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl ReloadHandle {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(0);
        Self { tx }
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.tx.subscribe()
    }

    pub fn notify_reload(&self) {
        self.tx.send_modify(|epoch| *epoch += 1);
        tracing::info!("reload signaled");
    }

    /// Turn every SIGHUP into a reload notification. Runs until the signal
    /// stream closes.
    pub async fn install_signal_handler(&self) -> anyhow::Result<()> {
        let mut hup = signal(SignalKind::hangup())?;

        while hup.recv().await.is_some() {
            tracing::info!("SIGHUP received");
            self.notify_reload();
        }

        Ok(())
    }
}
