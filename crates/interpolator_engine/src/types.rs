use interpolator_core::RunId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineEvent {
    Checkpoint {
        run_id: RunId,
        index: usize,
        progress: u8,
        message: String,
    },
    Finished {
        run_id: RunId,
        outcome: RunOutcome,
    },
}

impl PipelineEvent {
    pub fn run_id(&self) -> RunId {
        match self {
            PipelineEvent::Checkpoint { run_id, .. } | PipelineEvent::Finished { run_id, .. } => {
                *run_id
            }
        }
    }
}
