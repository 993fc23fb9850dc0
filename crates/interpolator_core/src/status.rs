//! Status display projection. Purely cosmetic: none of this affects when a
//! run actually completes.

use crate::state::{Phase, PipelineState};
use crate::view_model::{StatusView, StepView};

/// Named steps highlighted once progress reaches their threshold.
pub const STEP_THRESHOLDS: [(&str, u8); 4] = [
    ("Load", 10),
    ("Analyze", 25),
    ("Generate", 60),
    ("Encode", 95),
];

pub const COMPLETION_BANNER: &str = "Your video has been successfully interpolated! The frame rate has been increased while maintaining smooth motion.";

/// `max(1, ceil((100 - progress) / 10))`
pub fn estimated_minutes_remaining(progress: u8) -> u32 {
    let remaining = 100u32.saturating_sub(u32::from(progress));
    remaining.div_ceil(10).max(1)
}

pub fn phase_title(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle => "Ready to Process",
        Phase::Running => "Processing Video",
        Phase::Completed => "Processing Complete",
        Phase::Failed => "Processing Error",
    }
}

pub fn steps(progress: u8) -> Vec<StepView> {
    STEP_THRESHOLDS
        .iter()
        .map(|&(label, threshold)| StepView {
            label,
            threshold,
            reached: progress >= threshold,
        })
        .collect()
}

pub fn project(pipeline: &PipelineState) -> StatusView {
    let running = pipeline.phase == Phase::Running;
    StatusView {
        phase: pipeline.phase,
        title: phase_title(pipeline.phase),
        progress: pipeline.progress,
        message: pipeline.message.clone(),
        eta_minutes: running.then(|| estimated_minutes_remaining(pipeline.progress)),
        steps: if running {
            steps(pipeline.progress)
        } else {
            Vec::new()
        },
        banner: (pipeline.phase == Phase::Completed).then_some(COMPLETION_BANNER),
    }
}
