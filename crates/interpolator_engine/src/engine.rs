use std::io;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use interp_logging::{interp_debug, interp_info, interp_warn};
use interpolator_core::RunId;
use thiserror::Error;
use tokio::runtime::Runtime;
use tokio_util::sync::CancellationToken;

use crate::pipeline::{run_pipeline, ChannelProgressSink};
use crate::{standard_checkpoints, Checkpoint, FixedDelayPacer, Pacer, PipelineEvent};

#[derive(Debug, Clone)]
pub struct EngineSettings {
    pub checkpoints: Vec<Checkpoint>,
    pub step_delay: Duration,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            checkpoints: standard_checkpoints(),
            step_delay: crate::DEFAULT_STEP_DELAY,
        }
    }
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to build pipeline runtime: {0}")]
    Runtime(#[source] io::Error),
    #[error("failed to spawn engine thread: {0}")]
    Thread(#[source] io::Error),
}

enum EngineCommand {
    Start { run_id: RunId },
    Cancel { run_id: RunId },
}

/// Handle to the engine thread. Dropping it cancels the active run and stops
/// the thread.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<PipelineEvent>,
}

impl EngineHandle {
    pub fn new(settings: EngineSettings) -> Result<Self, EngineError> {
        let pacer = Arc::new(FixedDelayPacer::new(settings.step_delay));
        Self::with_pacer(settings.checkpoints, pacer)
    }

    pub fn with_pacer(
        checkpoints: Vec<Checkpoint>,
        pacer: Arc<dyn Pacer>,
    ) -> Result<Self, EngineError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("interp-pipeline")
            .enable_time()
            .build()
            .map_err(EngineError::Runtime)?;
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let checkpoints: Arc<[Checkpoint]> = checkpoints.into();

        thread::Builder::new()
            .name("interp-engine".to_string())
            .spawn(move || command_loop(runtime, cmd_rx, event_tx, checkpoints, pacer))
            .map_err(EngineError::Thread)?;

        Ok(Self { cmd_tx, event_rx })
    }

    /// Starts `run_id`, cancelling whatever run was active before.
    pub fn start(&self, run_id: RunId) {
        let _ = self.cmd_tx.send(EngineCommand::Start { run_id });
    }

    /// Cancels `run_id` if it is the active run.
    pub fn cancel(&self, run_id: RunId) {
        let _ = self.cmd_tx.send(EngineCommand::Cancel { run_id });
    }

    pub fn try_recv(&self) -> Option<PipelineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<PipelineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

fn command_loop(
    runtime: Runtime,
    cmd_rx: mpsc::Receiver<EngineCommand>,
    event_tx: mpsc::Sender<PipelineEvent>,
    checkpoints: Arc<[Checkpoint]>,
    pacer: Arc<dyn Pacer>,
) {
    let mut active: Option<(RunId, CancellationToken)> = None;

    while let Ok(command) = cmd_rx.recv() {
        match command {
            EngineCommand::Start { run_id } => {
                if let Some((previous, token)) = active.take() {
                    if !token.is_cancelled() {
                        interp_warn!("Run {} replaced by run {}", previous, run_id);
                    }
                    token.cancel();
                }
                let token = CancellationToken::new();
                active = Some((run_id, token.clone()));

                let checkpoints = checkpoints.clone();
                let pacer = pacer.clone();
                let sink = ChannelProgressSink::new(event_tx.clone());
                runtime.spawn(async move {
                    run_pipeline(run_id, &checkpoints, pacer.as_ref(), &sink, &token).await;
                });
            }
            EngineCommand::Cancel { run_id } => match &active {
                Some((active_id, token)) if *active_id == run_id => {
                    interp_info!("Cancelling run {}", run_id);
                    token.cancel();
                }
                _ => interp_debug!("Ignoring cancel for inactive run {}", run_id),
            },
        }
    }

    if let Some((_, token)) = active {
        token.cancel();
    }
    interp_debug!("Engine command loop stopped");
}
