mod support;

use interpolator_core::{
    update, AppState, Effect, Msg, Phase, PipelineState, INITIALIZING_MESSAGE, MAX_UPLOAD_BYTES,
};
use pretty_assertions::assert_eq;
use support::*;

#[test]
fn mp4_upload_process_download_reset_scenario() {
    init_logging();
    let source = locator(1);
    let (state, effects) = upload(
        AppState::new(),
        media_file("clip.mp4", "video/mp4", TEN_MB),
        source.clone(),
    );
    assert!(effects.is_empty());
    assert_eq!(state.pipeline(), &PipelineState::default());
    assert_eq!(state.media().unwrap().source, source);

    let (state, run_id) = start(state);
    assert_eq!(state.pipeline().phase, Phase::Running);
    assert_eq!(state.pipeline().progress, 0);
    assert_eq!(state.pipeline().message, INITIALIZING_MESSAGE);

    let mut seen = Vec::new();
    let mut state = state;
    for (progress, message) in CHECKPOINTS {
        let (next, _) = update(
            state,
            Msg::PipelineProgress {
                run_id,
                progress,
                message: message.to_string(),
            },
        );
        assert_eq!(next.pipeline().phase, Phase::Running);
        seen.push((next.pipeline().progress, next.pipeline().message.clone()));
        state = next;
    }
    let expected: Vec<_> = CHECKPOINTS
        .iter()
        .map(|(p, m)| (*p, m.to_string()))
        .collect();
    assert_eq!(seen, expected);

    let (state, _) = update(state, Msg::PipelineCompleted { run_id });
    assert_eq!(state.pipeline().phase, Phase::Completed);
    assert_eq!(state.pipeline().progress, 100);
    assert_eq!(state.pipeline().output, Some(source.clone()));

    let (state, effects) = update(state, Msg::DownloadClicked);
    assert_eq!(
        effects,
        vec![Effect::SaveDownload {
            source: source.clone(),
            file_name: "interpolated_clip.mp4".to_string(),
        }]
    );

    let (state, effects) = update(state, Msg::ResetClicked);
    assert_eq!(effects, vec![Effect::ReleaseSource { locator: source }]);
    assert!(state.media().is_none());
    assert_eq!(state.pipeline(), &PipelineState::default());
}

#[test]
fn text_upload_is_rejected_without_touching_pipeline() {
    init_logging();
    let state = uploaded_mp4();
    let (state, run_id) = start(state);
    let (state, _) = update(
        state,
        Msg::PipelineProgress {
            run_id,
            progress: 25,
            message: "Analyzing motion vectors...".to_string(),
        },
    );
    let pipeline_before = state.pipeline().clone();
    let media_before = state.media().cloned();

    let (state, effects) = update(
        state,
        Msg::FileOffered(media_file("notes.txt", "text/plain", 512)),
    );

    assert!(effects.is_empty());
    assert_eq!(state.pipeline(), &pipeline_before);
    assert_eq!(state.media().cloned(), media_before);
    let error = state.upload().error.clone().unwrap();
    assert!(error.contains("MP4, AVI, MOV, MKV, WebM"));
}

#[test]
fn rejection_changes_only_the_error_message() {
    init_logging();
    let before = AppState::new();
    let (after, effects) = update(
        before.clone(),
        Msg::FileOffered(media_file("song.mp3", "audio/mpeg", 1024)),
    );

    assert!(effects.is_empty());
    let mut expected = before.view();
    expected.upload.error =
        Some("Please upload a valid video file (MP4, AVI, MOV, MKV, WebM)".to_string());
    expected.dirty = true;
    assert_eq!(after.view(), expected);
}

#[test]
fn oversized_upload_gets_size_message() {
    init_logging();
    let (state, effects) = update(
        AppState::new(),
        Msg::FileOffered(media_file("big.webm", "video/webm", MAX_UPLOAD_BYTES + 1)),
    );

    assert!(effects.is_empty());
    assert_eq!(
        state.upload().error.as_deref(),
        Some("File size must be less than 100MB")
    );
    assert!(state.media().is_none());
}

#[test]
fn every_allowed_type_is_accepted() {
    init_logging();
    for media_type in interpolator_core::ALLOWED_MEDIA_TYPES {
        let file = media_file("clip", media_type, TEN_MB);
        let (state, _upload_id) = offer(AppState::new(), file);
        assert_eq!(state.upload().error, None);
        assert_eq!(state.upload().loading.as_deref(), Some("clip"));
    }
}

#[test]
fn valid_upload_after_error_clears_the_error() {
    init_logging();
    let (state, _) = update(
        AppState::new(),
        Msg::FileOffered(media_file("notes.txt", "text/plain", 10)),
    );
    let (state, _) = upload(state, media_file("clip.mov", "video/mov", 10), locator(4));

    assert_eq!(state.upload().error, None);
    assert_eq!(state.upload().loading, None);
}

#[test]
fn start_without_media_is_noop() {
    init_logging();
    let state = AppState::new();
    let (next, effects) = update(state.clone(), Msg::StartClicked);

    assert!(effects.is_empty());
    assert_eq!(next, state);
}

#[test]
fn second_start_while_running_is_blocked() {
    init_logging();
    let (state, run_id) = start(uploaded_mp4());
    let (state, effects) = update(state, Msg::StartClicked);

    assert!(effects.is_empty());
    assert_eq!(state.active_run(), Some(run_id));
    assert_eq!(state.pipeline().phase, Phase::Running);
}

#[test]
fn start_after_completion_is_noop() {
    init_logging();
    let (state, run_id) = start(uploaded_mp4());
    let state = run_to_completion(state, run_id);
    let (state, effects) = update(state, Msg::StartClicked);

    assert!(effects.is_empty());
    assert_eq!(state.pipeline().phase, Phase::Completed);
}

#[test]
fn cancel_returns_to_idle_and_emits_effect() {
    init_logging();
    let (state, run_id) = start(uploaded_mp4());
    let (state, _) = update(
        state,
        Msg::PipelineProgress {
            run_id,
            progress: 40,
            message: "Generating intermediate frames...".to_string(),
        },
    );
    let (state, effects) = update(state, Msg::CancelClicked);

    assert_eq!(effects, vec![Effect::CancelPipeline { run_id }]);
    assert_eq!(state.pipeline(), &PipelineState::default());
    assert!(state.media().is_some());
    assert!(state.view().actions.can_start);
}

#[test]
fn cancel_while_idle_is_noop() {
    init_logging();
    let state = uploaded_mp4();
    let (next, effects) = update(state.clone(), Msg::CancelClicked);

    assert!(effects.is_empty());
    assert_eq!(next, state);
}

#[test]
fn events_from_a_cancelled_run_are_ignored() {
    init_logging();
    let (state, first_run) = start(uploaded_mp4());
    let (state, _) = update(state, Msg::CancelClicked);
    let (state, second_run) = start(state);
    assert_ne!(first_run, second_run);

    let (state, _) = update(
        state,
        Msg::PipelineProgress {
            run_id: first_run,
            progress: 80,
            message: "Encoding output video...".to_string(),
        },
    );
    let (state, _) = update(state, Msg::PipelineCompleted { run_id: first_run });

    assert_eq!(state.pipeline().phase, Phase::Running);
    assert_eq!(state.pipeline().progress, 0);
    assert_eq!(state.active_run(), Some(second_run));
}

#[test]
fn progress_never_moves_backwards() {
    init_logging();
    let (state, run_id) = start(uploaded_mp4());
    let (state, _) = update(
        state,
        Msg::PipelineProgress {
            run_id,
            progress: 60,
            message: "Applying temporal smoothing...".to_string(),
        },
    );
    let (state, _) = update(
        state,
        Msg::PipelineProgress {
            run_id,
            progress: 25,
            message: "Analyzing motion vectors...".to_string(),
        },
    );

    assert_eq!(state.pipeline().progress, 60);
    assert_eq!(state.pipeline().message, "Applying temporal smoothing...");
}

#[test]
fn engine_side_cancellation_resets_active_run() {
    init_logging();
    let (state, run_id) = start(uploaded_mp4());
    let (state, effects) = update(state, Msg::PipelineCancelled { run_id });

    assert!(effects.is_empty());
    assert_eq!(state.pipeline(), &PipelineState::default());
    assert_eq!(state.active_run(), None);
}

#[test]
fn reset_while_running_cancels_and_releases_once() {
    init_logging();
    let (state, run_id) = start(uploaded_mp4());
    let (state, effects) = update(state, Msg::ResetClicked);

    assert_eq!(
        effects,
        vec![
            Effect::CancelPipeline { run_id },
            Effect::ReleaseSource {
                locator: locator(1)
            },
        ]
    );

    let (state, effects) = update(state, Msg::ResetClicked);
    assert!(effects.is_empty());
    assert!(state.media().is_none());
}

#[test]
fn replacing_media_releases_previous_locator() {
    init_logging();
    let (state, run_id) = start(uploaded_mp4());
    let (state, effects) = upload(
        state,
        media_file("other.webm", "video/webm", TEN_MB),
        locator(2),
    );

    assert_eq!(
        effects,
        vec![
            Effect::CancelPipeline { run_id },
            Effect::ReleaseSource {
                locator: locator(1)
            },
        ]
    );
    assert_eq!(state.pipeline(), &PipelineState::default());
    assert_eq!(state.media().unwrap().file.name, "other.webm");
}

#[test]
fn download_before_completion_is_noop() {
    init_logging();
    let (state, _run_id) = start(uploaded_mp4());
    let (_state, effects) = update(state, Msg::DownloadClicked);

    assert!(effects.is_empty());
}

#[test]
fn download_results_become_notices() {
    init_logging();
    let (state, run_id) = start(uploaded_mp4());
    let state = run_to_completion(state, run_id);
    let (state, _) = update(
        state,
        Msg::DownloadFinished {
            path: "/out/interpolated_clip.mp4".into(),
            saved_at: "2026-10-19T10:00:00+00:00".to_string(),
        },
    );
    assert_eq!(
        state.view().notice.as_deref(),
        Some("Saved /out/interpolated_clip.mp4 at 2026-10-19T10:00:00+00:00")
    );

    let (state, _) = update(
        state,
        Msg::DownloadFailed {
            reason: "disk full".to_string(),
        },
    );
    assert_eq!(state.view().notice.as_deref(), Some("Download failed: disk full"));
}

#[test]
fn probe_and_read_failures_surface_as_upload_errors() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::FilePicked("/videos/gone.mp4".into()));
    assert_eq!(
        effects,
        vec![Effect::ProbeFile {
            path: "/videos/gone.mp4".into()
        }]
    );

    let (state, _) = update(
        state,
        Msg::FileProbeFailed {
            path: "/videos/gone.mp4".into(),
            reason: "not found".to_string(),
        },
    );
    assert_eq!(
        state.upload().error.as_deref(),
        Some("Could not open /videos/gone.mp4: not found")
    );

    let file = media_file("clip.mp4", "video/mp4", TEN_MB);
    let (state, upload_id) = offer(state, file);
    let (state, _) = update(
        state,
        Msg::MediaLoadFailed {
            upload_id,
            name: "clip.mp4".to_string(),
            reason: "permission denied".to_string(),
        },
    );
    assert_eq!(state.upload().loading, None);
    assert_eq!(
        state.upload().error.as_deref(),
        Some("Could not read clip.mp4: permission denied")
    );
}

#[test]
fn dirty_flag_is_consumed_once() {
    init_logging();
    let (mut state, _) = update(AppState::new(), Msg::SettingsToggled);
    assert!(state.consume_dirty());
    assert!(!state.consume_dirty());

    let (mut state, _) = update(state, Msg::DragHoverChanged(false));
    assert!(!state.consume_dirty());
}

#[test]
fn read_finishing_after_reset_is_released_not_installed() {
    init_logging();
    let (state, upload_id) = offer(uploaded_mp4(), media_file("second.mp4", "video/mp4", TEN_MB));
    let (state, effects) = update(state, Msg::ResetClicked);
    assert_eq!(
        effects,
        vec![Effect::ReleaseSource {
            locator: locator(1)
        }]
    );
    assert_eq!(state.upload().loading, None);

    let (state, effects) = update(
        state,
        Msg::MediaLoaded {
            upload_id,
            file: media_file("second.mp4", "video/mp4", TEN_MB),
            source: locator(2),
        },
    );

    assert!(state.media().is_none());
    assert_eq!(
        effects,
        vec![Effect::ReleaseSource {
            locator: locator(2)
        }]
    );
}

#[test]
fn superseded_read_never_replaces_the_latest_pick() {
    init_logging();
    let first = media_file("a.mp4", "video/mp4", TEN_MB);
    let second = media_file("b.mp4", "video/mp4", TEN_MB);
    let (state, first_id) = offer(AppState::new(), first.clone());
    let (state, second_id) = offer(state, second.clone());
    assert_ne!(first_id, second_id);

    let (state, effects) = update(
        state,
        Msg::MediaLoaded {
            upload_id: second_id,
            file: second,
            source: locator(2),
        },
    );
    assert!(effects.is_empty());

    let (state, effects) = update(
        state,
        Msg::MediaLoaded {
            upload_id: first_id,
            file: first,
            source: locator(1),
        },
    );

    assert_eq!(state.media().unwrap().file.name, "b.mp4");
    assert_eq!(state.media().unwrap().source, locator(2));
    assert_eq!(
        effects,
        vec![Effect::ReleaseSource {
            locator: locator(1)
        }]
    );
}

#[test]
fn failure_of_a_superseded_read_is_ignored() {
    init_logging();
    let (state, first_id) = offer(AppState::new(), media_file("a.mp4", "video/mp4", TEN_MB));
    let (state, _second_id) = offer(state, media_file("b.mp4", "video/mp4", TEN_MB));

    let (state, effects) = update(
        state,
        Msg::MediaLoadFailed {
            upload_id: first_id,
            name: "a.mp4".to_string(),
            reason: "permission denied".to_string(),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.upload().error, None);
    assert_eq!(state.upload().loading.as_deref(), Some("b.mp4"));
}
