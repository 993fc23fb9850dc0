/// A fixed (progress, message) pair in the simulated sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkpoint {
    pub progress: u8,
    pub message: String,
}

impl Checkpoint {
    pub fn new(progress: u8, message: impl Into<String>) -> Self {
        Self {
            progress,
            message: message.into(),
        }
    }
}

/// The seven checkpoints, in order. The last one is always 100.
pub fn standard_checkpoints() -> Vec<Checkpoint> {
    [
        (10, "Loading video frames..."),
        (25, "Analyzing motion vectors..."),
        (40, "Generating intermediate frames..."),
        (60, "Applying temporal smoothing..."),
        (80, "Encoding output video..."),
        (95, "Finalizing..."),
        (100, "Processing complete!"),
    ]
    .into_iter()
    .map(|(progress, message)| Checkpoint::new(progress, message))
    .collect()
}
