//! Shutdown coordination for the gateway.

use tokio::sync::broadcast;

/// Coordinator for stopping the server task.
///
/// The serve loop subscribes before it starts; [`Shutdown::trigger`] wakes
/// every subscriber once. Dropping the coordinator also wakes them, since the
/// receivers then observe a closed channel.
#[derive(Debug)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Trigger the shutdown signal. Returns false if nobody was listening.
    pub fn trigger(&self) -> bool {
        self.tx.send(()).is_ok()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
