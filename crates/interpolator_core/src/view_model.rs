use crate::config::InterpolationConfig;
use crate::state::{Phase, PlaybackState, ResourceLocator};
use crate::upload::UploadSurface;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub media: Option<MediaInfoView>,
    pub source_preview: Option<PreviewView>,
    pub output_preview: Option<PreviewView>,
    pub config: InterpolationConfig,
    pub show_settings: bool,
    pub status: StatusView,
    pub upload: UploadSurface,
    pub actions: ActionsView,
    pub notice: Option<String>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaInfoView {
    pub name: String,
    pub size: String,
    pub media_type: String,
    pub interpolation: String,
    pub model: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewView {
    pub locator: ResourceLocator,
    pub playback: PlaybackState,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusView {
    pub phase: Phase,
    pub title: &'static str,
    pub progress: u8,
    pub message: String,
    /// Only while running.
    pub eta_minutes: Option<u32>,
    /// Only while running.
    pub steps: Vec<StepView>,
    pub banner: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepView {
    pub label: &'static str,
    pub threshold: u8,
    pub reached: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActionsView {
    pub can_start: bool,
    pub can_cancel: bool,
    pub can_download: bool,
}
