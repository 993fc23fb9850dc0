use std::path::PathBuf;

use thiserror::Error;

pub const ALLOWED_MEDIA_TYPES: [&str; 5] = [
    "video/mp4",
    "video/avi",
    "video/mov",
    "video/mkv",
    "video/webm",
];

/// 100 MiB. A file of exactly this size is accepted.
pub const MAX_UPLOAD_BYTES: u64 = 100 * 1024 * 1024;

/// Declared description of a picked file. Nothing here comes from the bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFile {
    pub name: String,
    pub media_type: String,
    pub size_bytes: u64,
    pub path: PathBuf,
}

impl MediaFile {
    pub fn size_megabytes(&self) -> String {
        format!("{:.2} MB", self.size_bytes as f64 / (1024.0 * 1024.0))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidUpload {
    #[error("Please upload a valid video file (MP4, AVI, MOV, MKV, WebM)")]
    UnsupportedType { media_type: String },
    #[error("File size must be less than 100MB")]
    TooLarge { size_bytes: u64, max_bytes: u64 },
}

/// Type is checked before size, so an oversized text file reports the type.
pub fn validate_upload(file: &MediaFile) -> Result<(), InvalidUpload> {
    if !ALLOWED_MEDIA_TYPES.contains(&file.media_type.as_str()) {
        return Err(InvalidUpload::UnsupportedType {
            media_type: file.media_type.clone(),
        });
    }
    if file.size_bytes > MAX_UPLOAD_BYTES {
        return Err(InvalidUpload::TooLarge {
            size_bytes: file.size_bytes,
            max_bytes: MAX_UPLOAD_BYTES,
        });
    }
    Ok(())
}

/// Upload surface state owned by the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UploadSurface {
    pub drag_hover: bool,
    pub error: Option<String>,
    pub loading: Option<String>,
}
