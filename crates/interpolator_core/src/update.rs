use crate::upload::validate_upload;
use crate::{AppState, Effect, Msg, Phase, SelectedMedia};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::DragHoverChanged(hover) => {
            state.set_drag_hover(hover);
            Vec::new()
        }
        Msg::FilePicked(path) => {
            state.set_drag_hover(false);
            vec![Effect::ProbeFile { path }]
        }
        Msg::FileOffered(file) => match validate_upload(&file) {
            Ok(()) => {
                let upload_id = state.begin_loading(&file.name);
                vec![Effect::LoadMedia { upload_id, file }]
            }
            Err(invalid) => {
                state.set_upload_error(invalid.to_string());
                Vec::new()
            }
        },
        Msg::FileProbeFailed { path, reason } => {
            state.set_upload_error(format!("Could not open {}: {reason}", path.display()));
            Vec::new()
        }
        Msg::MediaLoaded {
            upload_id,
            file,
            source,
        } => {
            // A superseded or reset read already holds a blob; hand it back.
            if !state.is_pending_upload(upload_id) {
                return (state, vec![Effect::ReleaseSource { locator: source }]);
            }
            let mut effects = Vec::new();
            if let Some(run_id) = state.reset_pipeline() {
                effects.push(Effect::CancelPipeline { run_id });
            }
            let fresh = source.clone();
            if let Some(previous) = state.replace_media(SelectedMedia { file, source }) {
                if previous != fresh {
                    effects.push(Effect::ReleaseSource { locator: previous });
                }
            }
            effects
        }
        Msg::MediaLoadFailed {
            upload_id,
            name,
            reason,
        } => {
            if state.is_pending_upload(upload_id) {
                state.fail_loading(format!("Could not read {name}: {reason}"));
            }
            Vec::new()
        }
        Msg::ConfigReplaced(config) => {
            state.set_config(config);
            Vec::new()
        }
        Msg::SettingsToggled => {
            state.toggle_settings();
            Vec::new()
        }
        Msg::StartClicked => {
            // A second start while running would overlap checkpoint sequences.
            let can_start = state.media().is_some()
                && matches!(state.pipeline().phase, Phase::Idle | Phase::Failed);
            if can_start {
                let run_id = state.start_run();
                vec![Effect::StartPipeline { run_id }]
            } else {
                Vec::new()
            }
        }
        Msg::CancelClicked => {
            if state.pipeline().phase == Phase::Running {
                match state.reset_pipeline() {
                    Some(run_id) => vec![Effect::CancelPipeline { run_id }],
                    None => Vec::new(),
                }
            } else {
                Vec::new()
            }
        }
        Msg::PipelineProgress {
            run_id,
            progress,
            message,
        } => {
            if state.is_active_run(run_id) {
                state.apply_progress(progress, message);
            }
            Vec::new()
        }
        Msg::PipelineCompleted { run_id } => {
            if state.is_active_run(run_id) {
                state.complete_run();
            }
            Vec::new()
        }
        Msg::PipelineCancelled { run_id } => {
            if state.is_active_run(run_id) {
                state.reset_pipeline();
            }
            Vec::new()
        }
        Msg::DownloadClicked => match state.download_target() {
            Some((source, file_name)) => vec![Effect::SaveDownload { source, file_name }],
            None => Vec::new(),
        },
        Msg::DownloadFinished { path, saved_at } => {
            state.set_notice(format!("Saved {} at {saved_at}", path.display()));
            Vec::new()
        }
        Msg::DownloadFailed { reason } => {
            state.set_notice(format!("Download failed: {reason}"));
            Vec::new()
        }
        Msg::ResetClicked => {
            let mut effects = Vec::new();
            if let Some(run_id) = state.reset_pipeline() {
                effects.push(Effect::CancelPipeline { run_id });
            }
            if let Some(media) = state.take_media() {
                effects.push(Effect::ReleaseSource {
                    locator: media.source,
                });
            }
            effects
        }
        Msg::Playback { surface, action } => {
            state.apply_playback(surface, action);
            Vec::new()
        }
    };

    (state, effects)
}
