#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Once;

use interpolator_core::{
    update, AppState, Effect, MediaFile, Msg, ResourceLocator, RunId, UploadId,
};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(interp_logging::initialize_for_tests);
}

pub const TEN_MB: u64 = 10 * 1024 * 1024;

pub fn media_file(name: &str, media_type: &str, size_bytes: u64) -> MediaFile {
    MediaFile {
        name: name.to_string(),
        media_type: media_type.to_string(),
        size_bytes,
        path: PathBuf::from("/videos").join(name),
    }
}

pub fn locator(id: u64) -> ResourceLocator {
    ResourceLocator::for_blob(id).unwrap()
}

/// Offers a valid `file` and returns the id of the read it started.
pub fn offer(state: AppState, file: MediaFile) -> (AppState, UploadId) {
    let (state, effects) = update(state, Msg::FileOffered(file.clone()));
    match effects.as_slice() {
        [Effect::LoadMedia {
            upload_id,
            file: loading,
        }] if *loading == file => (state, *upload_id),
        other => panic!("expected LoadMedia for {}, got {other:?}", file.name),
    }
}

/// Offers and loads `file`, returning the state after `MediaLoaded`.
pub fn upload(state: AppState, file: MediaFile, source: ResourceLocator) -> (AppState, Vec<Effect>) {
    let (state, upload_id) = offer(state, file.clone());
    update(
        state,
        Msg::MediaLoaded {
            upload_id,
            file,
            source,
        },
    )
}

pub fn uploaded_mp4() -> AppState {
    let (state, _) = upload(
        AppState::new(),
        media_file("clip.mp4", "video/mp4", TEN_MB),
        locator(1),
    );
    state
}

pub fn start(state: AppState) -> (AppState, RunId) {
    let (state, effects) = update(state, Msg::StartClicked);
    match effects.as_slice() {
        [Effect::StartPipeline { run_id }] => (state, *run_id),
        other => panic!("expected StartPipeline, got {other:?}"),
    }
}

pub const CHECKPOINTS: [(u8, &str); 7] = [
    (10, "Loading video frames..."),
    (25, "Analyzing motion vectors..."),
    (40, "Generating intermediate frames..."),
    (60, "Applying temporal smoothing..."),
    (80, "Encoding output video..."),
    (95, "Finalizing..."),
    (100, "Processing complete!"),
];

pub fn run_to_completion(mut state: AppState, run_id: RunId) -> AppState {
    for (progress, message) in CHECKPOINTS {
        let (next, effects) = update(
            state,
            Msg::PipelineProgress {
                run_id,
                progress,
                message: message.to_string(),
            },
        );
        assert!(effects.is_empty());
        state = next;
    }
    let (state, effects) = update(state, Msg::PipelineCompleted { run_id });
    assert!(effects.is_empty());
    state
}
