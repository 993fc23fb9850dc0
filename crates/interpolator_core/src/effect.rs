use std::path::PathBuf;

use crate::{MediaFile, ResourceLocator, RunId, UploadId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Describe the file at `path` (name, declared type, size) without reading it.
    ProbeFile { path: PathBuf },
    /// Read an accepted file into the blob store.
    LoadMedia { upload_id: UploadId, file: MediaFile },
    /// Release a locator. Emitted at most once per locator.
    ReleaseSource { locator: ResourceLocator },
    StartPipeline { run_id: RunId },
    CancelPipeline { run_id: RunId },
    /// Offer the bytes behind `source` under `file_name`.
    SaveDownload {
        source: ResourceLocator,
        file_name: String,
    },
}
