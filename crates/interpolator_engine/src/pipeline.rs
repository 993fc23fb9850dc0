use std::sync::mpsc;

use interp_logging::{interp_debug, interp_info};
use interpolator_core::RunId;
use tokio_util::sync::CancellationToken;

use crate::{Checkpoint, Pacer, PipelineEvent, RunOutcome};

pub trait ProgressSink: Send + Sync {
    fn emit(&self, event: PipelineEvent);
}

pub struct ChannelProgressSink {
    tx: mpsc::Sender<PipelineEvent>,
}

impl ChannelProgressSink {
    pub fn new(tx: mpsc::Sender<PipelineEvent>) -> Self {
        Self { tx }
    }
}

impl ProgressSink for ChannelProgressSink {
    fn emit(&self, event: PipelineEvent) {
        let _ = self.tx.send(event);
    }
}

/// Walks `checkpoints` in order, waiting on `pacer` before each one.
///
/// Always ends with a `Finished` event. Cancellation is observed while
/// waiting, so no checkpoint is reported after `cancel` fires.
pub async fn run_pipeline(
    run_id: RunId,
    checkpoints: &[Checkpoint],
    pacer: &dyn Pacer,
    sink: &dyn ProgressSink,
    cancel: &CancellationToken,
) -> RunOutcome {
    interp_info!(
        "Pipeline run {} started with {} checkpoints",
        run_id,
        checkpoints.len()
    );

    for (index, checkpoint) in checkpoints.iter().enumerate() {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                return finish(run_id, sink, RunOutcome::Cancelled);
            }
            _ = pacer.wait_for(index, checkpoint) => {}
        }

        interp_debug!(
            "Pipeline run {} checkpoint {} at {}%: {}",
            run_id,
            index,
            checkpoint.progress,
            checkpoint.message
        );
        sink.emit(PipelineEvent::Checkpoint {
            run_id,
            index,
            progress: checkpoint.progress,
            message: checkpoint.message.clone(),
        });
    }

    finish(run_id, sink, RunOutcome::Completed)
}

fn finish(run_id: RunId, sink: &dyn ProgressSink, outcome: RunOutcome) -> RunOutcome {
    interp_info!("Pipeline run {} finished: {:?}", run_id, outcome);
    sink.emit(PipelineEvent::Finished { run_id, outcome });
    outcome
}
