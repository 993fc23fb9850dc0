use std::fs;

use interpolator_core::{update, validate_upload, AppState, Effect, Msg};
use interpolator_engine::{describe_file, read_media, ProbeError};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn describes_without_reading_contents() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("holiday.MP4");
    fs::write(&path, vec![0u8; 4096]).unwrap();

    let file = describe_file(&path).unwrap();

    assert_eq!(file.name, "holiday.MP4");
    assert_eq!(file.media_type, "video/mp4");
    assert_eq!(file.size_bytes, 4096);
    assert_eq!(file.path, path);
    assert_eq!(validate_upload(&file), Ok(()));
}

#[test]
fn text_file_is_described_then_rejected_by_validation() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("notes.txt");
    fs::write(&path, "hello").unwrap();

    let file = describe_file(&path).unwrap();
    assert_eq!(file.media_type, "text/plain");

    let (state, effects) = update(AppState::new(), Msg::FileOffered(file));
    assert!(effects.is_empty());
    assert!(state
        .upload()
        .error
        .as_deref()
        .unwrap()
        .contains("MP4, AVI, MOV, MKV, WebM"));
}

#[test]
fn accepted_file_flows_into_load_effect() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("clip.webm");
    fs::write(&path, b"webm").unwrap();

    let file = describe_file(&path).unwrap();
    let (_, effects) = update(AppState::new(), Msg::FileOffered(file.clone()));

    assert!(matches!(
        effects.as_slice(),
        [Effect::LoadMedia { file: loading, .. }] if *loading == file
    ));
    assert_eq!(read_media(&path).unwrap().as_ref(), b"webm");
}

#[test]
fn directories_and_missing_paths_are_errors() {
    let temp = TempDir::new().unwrap();

    assert!(matches!(
        describe_file(temp.path()),
        Err(ProbeError::NotAFile(_))
    ));
    assert!(matches!(
        describe_file(&temp.path().join("missing.mp4")),
        Err(ProbeError::Io(_))
    ));
    assert!(matches!(
        read_media(&temp.path().join("missing.mp4")),
        Err(ProbeError::Io(_))
    ));
}
