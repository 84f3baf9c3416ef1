//! Shutdown coordination.

use tokio::sync::broadcast;

/// Broadcasts a single shutdown event to every subscriber.
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves once a shutdown event arrives or the sender is dropped.
pub async fn wait(mut rx: broadcast::Receiver<()>) {
    let _ = rx.recv().await;
}
