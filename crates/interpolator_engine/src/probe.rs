use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use bytes::Bytes;
use interpolator_core::MediaFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("not a regular file: {0}")]
    NotAFile(PathBuf),
    #[error("path has no file name: {0}")]
    NoFileName(PathBuf),
}

/// Declared media type for `path`, derived from its extension only.
pub fn media_type_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "mp4" => "video/mp4",
        "avi" => "video/avi",
        "mov" => "video/mov",
        "mkv" => "video/mkv",
        "webm" => "video/webm",
        "m4v" => "video/x-m4v",
        "mpg" | "mpeg" => "video/mpeg",
        "ogv" => "video/ogg",
        "gif" => "image/gif",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "txt" => "text/plain",
        "json" => "application/json",
        _ => "application/octet-stream",
    }
}

/// Describes the file at `path` without reading its contents.
pub fn describe_file(path: &Path) -> Result<MediaFile, ProbeError> {
    let metadata = fs::metadata(path)?;
    if !metadata.is_file() {
        return Err(ProbeError::NotAFile(path.to_path_buf()));
    }
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| ProbeError::NoFileName(path.to_path_buf()))?;

    Ok(MediaFile {
        name,
        media_type: media_type_for_path(path).to_string(),
        size_bytes: metadata.len(),
        path: path.to_path_buf(),
    })
}

pub fn read_media(path: &Path) -> Result<Bytes, ProbeError> {
    Ok(Bytes::from(fs::read(path)?))
}
