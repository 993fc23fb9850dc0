use std::path::PathBuf;

use crate::{
    InterpolationConfig, MediaFile, PlaybackAction, PreviewSurface, ResourceLocator, RunId, UploadId,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Files are being dragged over the window (or left it).
    DragHoverChanged(bool),
    /// User picked or dropped a file.
    FilePicked(PathBuf),
    /// Platform described the picked file; not yet validated.
    FileOffered(MediaFile),
    /// Platform could not describe the picked file.
    FileProbeFailed { path: PathBuf, reason: String },
    /// Media bytes are held by the blob store under `source`.
    MediaLoaded {
        upload_id: UploadId,
        file: MediaFile,
        source: ResourceLocator,
    },
    /// Reading the media bytes failed.
    MediaLoadFailed {
        upload_id: UploadId,
        name: String,
        reason: String,
    },
    /// Configuration panel produced a new snapshot.
    ConfigReplaced(InterpolationConfig),
    /// User clicked Show/Hide Settings.
    SettingsToggled,
    /// User clicked Start Interpolation.
    StartClicked,
    /// User clicked Cancel while a run is active.
    CancelClicked,
    /// Engine reached a checkpoint.
    PipelineProgress {
        run_id: RunId,
        progress: u8,
        message: String,
    },
    /// Engine passed the last checkpoint.
    PipelineCompleted { run_id: RunId },
    /// Engine aborted the checkpoint sequence.
    PipelineCancelled { run_id: RunId },
    /// User clicked Download Result.
    DownloadClicked,
    /// Output bytes were written.
    DownloadFinished { path: PathBuf, saved_at: String },
    /// Output bytes could not be written.
    DownloadFailed { reason: String },
    /// User clicked Upload New Video.
    ResetClicked,
    /// Playback controls on a preview surface.
    Playback {
        surface: PreviewSurface,
        action: PlaybackAction,
    },
}
