use std::fmt;

use url::Url;

use crate::config::InterpolationConfig;
use crate::upload::{MediaFile, UploadSurface};
use crate::view_model::{ActionsView, AppViewModel, MediaInfoView, PreviewView};
use crate::{status, RunId, UploadId};

pub const INITIALIZING_MESSAGE: &str = "Initializing RIFE model...";

/// In-memory reference to media bytes held by the platform's blob store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceLocator(Url);

impl ResourceLocator {
    pub const BLOB_ORIGIN: &'static str = "interpolator";

    pub fn parse(raw: &str) -> Result<Self, url::ParseError> {
        Url::parse(raw).map(Self)
    }

    /// `blob:interpolator/<id>`
    pub fn for_blob(id: u64) -> Result<Self, url::ParseError> {
        Self::parse(&format!("blob:{}/{id}", Self::BLOB_ORIGIN))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_blob(&self) -> bool {
        self.0.scheme() == "blob"
    }
}

impl fmt::Display for ResourceLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Running,
    Completed,
    /// Nothing in the simulated pipeline can fail; kept for rendering.
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PipelineState {
    pub phase: Phase,
    pub progress: u8,
    pub message: String,
    pub output: Option<ResourceLocator>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedMedia {
    pub file: MediaFile,
    pub source: ResourceLocator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewSurface {
    Source,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackAction {
    Play,
    Pause,
    Stop,
}

impl PlaybackState {
    pub(crate) fn apply(self, action: PlaybackAction) -> Self {
        match (self, action) {
            (_, PlaybackAction::Play) => PlaybackState::Playing,
            (PlaybackState::Playing, PlaybackAction::Pause) => PlaybackState::Paused,
            (state, PlaybackAction::Pause) => state,
            (_, PlaybackAction::Stop) => PlaybackState::Stopped,
        }
    }
}

/// Single owner of all session state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    media: Option<SelectedMedia>,
    config: InterpolationConfig,
    pipeline: PipelineState,
    active_run: Option<RunId>,
    last_run_id: RunId,
    pending_upload: Option<UploadId>,
    last_upload_id: UploadId,
    upload: UploadSurface,
    show_settings: bool,
    source_playback: PlaybackState,
    output_playback: PlaybackState,
    notice: Option<String>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn media(&self) -> Option<&SelectedMedia> {
        self.media.as_ref()
    }

    pub fn config(&self) -> &InterpolationConfig {
        &self.config
    }

    pub fn pipeline(&self) -> &PipelineState {
        &self.pipeline
    }

    pub fn upload(&self) -> &UploadSurface {
        &self.upload
    }

    pub fn active_run(&self) -> Option<RunId> {
        self.active_run
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn view(&self) -> AppViewModel {
        let running = self.pipeline.phase == Phase::Running;
        let output = match self.pipeline.phase {
            Phase::Completed => self.pipeline.output.clone(),
            _ => None,
        };
        AppViewModel {
            media: self.media.as_ref().map(|media| MediaInfoView {
                name: media.file.name.clone(),
                size: media.file.size_megabytes(),
                media_type: media.file.media_type.clone(),
                interpolation: self.config.summary(),
                model: self.config.model.id().to_string(),
            }),
            source_preview: self.media.as_ref().map(|media| PreviewView {
                locator: media.source.clone(),
                playback: self.source_playback,
            }),
            output_preview: output.map(|locator| PreviewView {
                locator,
                playback: self.output_playback,
            }),
            config: self.config,
            show_settings: self.show_settings,
            status: status::project(&self.pipeline),
            upload: self.upload.clone(),
            actions: ActionsView {
                can_start: self.media.is_some()
                    && matches!(self.pipeline.phase, Phase::Idle | Phase::Failed),
                can_cancel: running,
                can_download: self.pipeline.phase == Phase::Completed
                    && self.pipeline.output.is_some(),
            },
            notice: self.notice.clone(),
            dirty: self.dirty,
        }
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_drag_hover(&mut self, hover: bool) {
        if self.upload.drag_hover != hover {
            self.upload.drag_hover = hover;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_upload_error(&mut self, message: String) {
        self.upload.error = Some(message);
        self.mark_dirty();
    }

    pub(crate) fn fail_loading(&mut self, message: String) {
        self.pending_upload = None;
        self.upload.loading = None;
        self.set_upload_error(message);
    }

    /// Starts a read for `name`. Any read still in flight is superseded.
    pub(crate) fn begin_loading(&mut self, name: &str) -> UploadId {
        self.last_upload_id += 1;
        let upload_id = self.last_upload_id;
        self.pending_upload = Some(upload_id);
        self.upload.error = None;
        self.upload.loading = Some(name.to_string());
        self.mark_dirty();
        upload_id
    }

    pub(crate) fn is_pending_upload(&self, upload_id: UploadId) -> bool {
        self.pending_upload == Some(upload_id)
    }

    /// Replaces the selected media and returns the locator it displaced.
    /// Callers reset the pipeline first so the active run can be cancelled.
    pub(crate) fn replace_media(&mut self, media: SelectedMedia) -> Option<ResourceLocator> {
        let previous = self.media.replace(media).map(|old| old.source);
        self.pending_upload = None;
        self.upload = UploadSurface::default();
        self.notice = None;
        self.mark_dirty();
        previous
    }

    pub(crate) fn take_media(&mut self) -> Option<SelectedMedia> {
        let media = self.media.take();
        self.pending_upload = None;
        self.upload = UploadSurface::default();
        self.notice = None;
        self.mark_dirty();
        media
    }

    pub(crate) fn set_config(&mut self, config: InterpolationConfig) {
        if self.config != config {
            self.config = config;
            self.mark_dirty();
        }
    }

    pub(crate) fn toggle_settings(&mut self) {
        self.show_settings = !self.show_settings;
        self.mark_dirty();
    }

    pub(crate) fn start_run(&mut self) -> RunId {
        self.last_run_id += 1;
        let run_id = self.last_run_id;
        self.active_run = Some(run_id);
        self.pipeline = PipelineState {
            phase: Phase::Running,
            progress: 0,
            message: INITIALIZING_MESSAGE.to_string(),
            output: None,
        };
        self.output_playback = PlaybackState::Stopped;
        self.notice = None;
        self.mark_dirty();
        run_id
    }

    /// Clears the active run and pipeline, returning the run that was active.
    pub(crate) fn reset_pipeline(&mut self) -> Option<RunId> {
        let run = self.active_run.take();
        self.pipeline = PipelineState::default();
        self.source_playback = PlaybackState::Stopped;
        self.output_playback = PlaybackState::Stopped;
        self.mark_dirty();
        run
    }

    pub(crate) fn is_active_run(&self, run_id: RunId) -> bool {
        self.active_run == Some(run_id) && self.pipeline.phase == Phase::Running
    }

    pub(crate) fn apply_progress(&mut self, progress: u8, message: String) -> bool {
        let progress = progress.min(100);
        if progress < self.pipeline.progress {
            return false;
        }
        self.pipeline.progress = progress;
        self.pipeline.message = message;
        self.mark_dirty();
        true
    }

    pub(crate) fn complete_run(&mut self) {
        self.active_run = None;
        self.pipeline.phase = Phase::Completed;
        self.pipeline.progress = 100;
        self.pipeline.output = self.media.as_ref().map(|media| media.source.clone());
        self.mark_dirty();
    }

    pub(crate) fn apply_playback(&mut self, surface: PreviewSurface, action: PlaybackAction) {
        let has_surface = match surface {
            PreviewSurface::Source => self.media.is_some(),
            PreviewSurface::Output => {
                self.pipeline.phase == Phase::Completed && self.pipeline.output.is_some()
            }
        };
        if !has_surface {
            return;
        }
        let slot = match surface {
            PreviewSurface::Source => &mut self.source_playback,
            PreviewSurface::Output => &mut self.output_playback,
        };
        let next = slot.apply(action);
        if *slot != next {
            *slot = next;
            self.mark_dirty();
        }
    }

    pub(crate) fn download_target(&self) -> Option<(ResourceLocator, String)> {
        if self.pipeline.phase != Phase::Completed {
            return None;
        }
        let output = self.pipeline.output.clone()?;
        let name = self.media.as_ref().map(|media| media.file.name.as_str());
        Some((output, download_file_name(name)))
    }

    pub(crate) fn set_notice(&mut self, notice: String) {
        self.notice = Some(notice);
        self.mark_dirty();
    }
}

/// `interpolated_<original>`, falling back to `interpolated_video.mp4`.
pub fn download_file_name(original: Option<&str>) -> String {
    match original.map(str::trim).filter(|name| !name.is_empty()) {
        Some(name) => format!("interpolated_{name}"),
        None => "interpolated_video.mp4".to_string(),
    }
}
