use tokio::sync::watch;

/// Lets a task wait for the shutdown signal
#[derive(Debug)]
pub struct ShutdownGuard {
    shutdown_rx: watch::Receiver<bool>,
}

impl ShutdownGuard {
    pub(crate) fn new(shutdown_rx: watch::Receiver<bool>) -> Self {
        Self { shutdown_rx }
    }

    /// Resolves once shutdown has been triggered or the coordinator is gone
    pub async fn wait(&mut self) {
        let _ = self.shutdown_rx.wait_for(|stopped| *stopped).await;
    }

    /// Non-blocking check
    pub fn is_shutdown(&self) -> bool {
        *self.shutdown_rx.borrow()
    }
}
