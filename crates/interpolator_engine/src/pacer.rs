use std::time::Duration;

use tokio::sync::{mpsc, Mutex};

use crate::Checkpoint;

/// Delay between checkpoints used by the desktop app unless configured.
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(1500);

/// Decides when the next checkpoint may be reported.
///
/// The pipeline driver only knows the checkpoint order; pacing is either a
/// fixed sleep or progress reported by something outside the driver.
#[async_trait::async_trait]
pub trait Pacer: Send + Sync {
    async fn wait_for(&self, index: usize, checkpoint: &Checkpoint);
}

#[derive(Debug, Clone, Copy)]
pub struct FixedDelayPacer {
    delay: Duration,
}

impl FixedDelayPacer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for FixedDelayPacer {
    fn default() -> Self {
        Self::new(DEFAULT_STEP_DELAY)
    }
}

#[async_trait::async_trait]
impl Pacer for FixedDelayPacer {
    async fn wait_for(&self, _index: usize, _checkpoint: &Checkpoint) {
        tokio::time::sleep(self.delay).await;
    }
}

/// Advances one checkpoint per trigger.
pub struct ExternalPacer {
    rx: Mutex<mpsc::UnboundedReceiver<()>>,
}

#[derive(Debug, Clone)]
pub struct PacerTrigger {
    tx: mpsc::UnboundedSender<()>,
}

impl ExternalPacer {
    pub fn channel() -> (Self, PacerTrigger) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { rx: Mutex::new(rx) }, PacerTrigger { tx })
    }
}

#[async_trait::async_trait]
impl Pacer for ExternalPacer {
    async fn wait_for(&self, _index: usize, _checkpoint: &Checkpoint) {
        let mut rx = self.rx.lock().await;
        if rx.recv().await.is_none() {
            // Every trigger is gone; only cancellation can end the run now.
            std::future::pending::<()>().await;
        }
    }
}

impl PacerTrigger {
    /// Releases the next checkpoint. Returns `false` once the pacer is dropped.
    pub fn advance(&self) -> bool {
        self.tx.send(()).is_ok()
    }
}
