//! Interpolator core: pure state machine and view-model helpers.
mod config;
mod effect;
mod msg;
mod state;
pub mod status;
mod update;
mod upload;
mod view_model;

/// Identifies one start of the processing pipeline.
pub type RunId = u64;
/// Identifies one accepted upload while its bytes are being read.
pub type UploadId = u64;

pub use config::{
    InterpolationConfig, InterpolationMode, RifeModel, Scale, DEFAULT_MULTIPLIER,
    DEFAULT_TARGET_FPS, MULTIPLIER_CHOICES, PROCESSING_TIPS, TARGET_FPS_CHOICES,
};
pub use effect::Effect;
pub use msg::Msg;
pub use state::{
    download_file_name, AppState, Phase, PipelineState, PlaybackAction, PlaybackState,
    PreviewSurface, ResourceLocator, SelectedMedia, INITIALIZING_MESSAGE,
};
pub use update::update;
pub use upload::{
    validate_upload, InvalidUpload, MediaFile, UploadSurface, ALLOWED_MEDIA_TYPES,
    MAX_UPLOAD_BYTES,
};
pub use view_model::{ActionsView, AppViewModel, MediaInfoView, PreviewView, StatusView, StepView};
