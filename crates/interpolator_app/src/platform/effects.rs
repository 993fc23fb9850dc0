use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;

use bytes::Bytes;
use chrono::Local;
use interp_logging::{interp_debug, interp_error, interp_info, interp_warn};
use interpolator_core::{Effect, MediaFile, Msg, ResourceLocator, UploadId};
use interpolator_engine::{
    describe_file, read_media, AtomicFileWriter, BlobStore, EngineHandle, PipelineEvent,
    ProbeError, RunOutcome,
};

struct LoadResult {
    upload_id: UploadId,
    file: MediaFile,
    bytes: Result<Bytes, ProbeError>,
}

/// Executes effects from `update` and turns their outcomes back into messages.
///
/// The blob store lives on the UI thread; worker threads only read files and
/// write downloads.
pub struct EffectRunner {
    engine: EngineHandle,
    blobs: BlobStore,
    download_dir: PathBuf,
    msg_tx: mpsc::Sender<Msg>,
    load_tx: mpsc::Sender<LoadResult>,
    load_rx: mpsc::Receiver<LoadResult>,
    pending: Arc<AtomicUsize>,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle, download_dir: PathBuf, msg_tx: mpsc::Sender<Msg>) -> Self {
        let (load_tx, load_rx) = mpsc::channel();
        Self {
            engine,
            blobs: BlobStore::new(),
            download_dir,
            msg_tx,
            load_tx,
            load_rx,
            pending: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn enqueue(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ProbeFile { path } => {
                    let msg = match describe_file(&path) {
                        Ok(file) => Msg::FileOffered(file),
                        Err(err) => {
                            interp_warn!("Probe failed for {:?}: {}", path, err);
                            Msg::FileProbeFailed {
                                path,
                                reason: err.to_string(),
                            }
                        }
                    };
                    self.send(msg);
                }
                Effect::LoadMedia { upload_id, file } => self.spawn_load(upload_id, file),
                Effect::ReleaseSource { locator } => {
                    self.blobs.revoke(&locator);
                }
                Effect::StartPipeline { run_id } => {
                    interp_info!("StartPipeline run_id={}", run_id);
                    self.engine.start(run_id);
                }
                Effect::CancelPipeline { run_id } => {
                    interp_info!("CancelPipeline run_id={}", run_id);
                    self.engine.cancel(run_id);
                }
                Effect::SaveDownload { source, file_name } => {
                    self.spawn_save(&source, file_name);
                }
            }
        }
    }

    /// Moves finished loads into the blob store and forwards engine events.
    pub fn poll(&mut self) {
        while let Ok(LoadResult {
            upload_id,
            file,
            bytes,
        }) = self.load_rx.try_recv()
        {
            let msg = match bytes {
                Ok(bytes) => match self.blobs.register(bytes, file.media_type.clone()) {
                    Ok(source) => Msg::MediaLoaded {
                        upload_id,
                        file,
                        source,
                    },
                    Err(err) => Msg::MediaLoadFailed {
                        upload_id,
                        name: file.name,
                        reason: err.to_string(),
                    },
                },
                Err(err) => {
                    interp_warn!("Reading {} failed: {}", file.name, err);
                    Msg::MediaLoadFailed {
                        upload_id,
                        name: file.name,
                        reason: err.to_string(),
                    }
                }
            };
            self.send(msg);
        }

        while let Some(event) = self.engine.try_recv() {
            self.send(map_event(event));
        }
    }

    /// True while a file read or download write is outstanding.
    pub fn is_busy(&self) -> bool {
        self.pending.load(Ordering::SeqCst) > 0
    }

    pub fn shutdown(&mut self) {
        let released = self.blobs.release_all();
        interp_info!("Released {} media locator(s) on exit", released);
    }

    fn spawn_load(&self, upload_id: UploadId, file: MediaFile) {
        let load_tx = self.load_tx.clone();
        let pending = self.pending.clone();
        pending.fetch_add(1, Ordering::SeqCst);
        thread::spawn(move || {
            interp_debug!("Reading {} ({} bytes)", file.name, file.size_bytes);
            let bytes = read_media(&file.path);
            let _ = load_tx.send(LoadResult {
                upload_id,
                file,
                bytes,
            });
            pending.fetch_sub(1, Ordering::SeqCst);
        });
    }

    fn spawn_save(&self, source: &ResourceLocator, file_name: String) {
        let Some(blob) = self.blobs.resolve(source) else {
            interp_error!("Download requested for released locator {}", source);
            self.send(Msg::DownloadFailed {
                reason: format!("{source} is no longer available"),
            });
            return;
        };
        let bytes = blob.bytes.clone();
        let writer = AtomicFileWriter::new(self.download_dir.clone());
        let msg_tx = self.msg_tx.clone();
        let pending = self.pending.clone();
        pending.fetch_add(1, Ordering::SeqCst);
        thread::spawn(move || {
            let msg = match writer.write(&file_name, &bytes) {
                Ok(path) => {
                    interp_info!("Saved download to {:?}", path);
                    Msg::DownloadFinished {
                        path,
                        saved_at: Local::now().to_rfc3339(),
                    }
                }
                Err(err) => {
                    interp_error!("Saving {} failed: {}", file_name, err);
                    Msg::DownloadFailed {
                        reason: err.to_string(),
                    }
                }
            };
            let _ = msg_tx.send(msg);
            pending.fetch_sub(1, Ordering::SeqCst);
        });
    }

    fn send(&self, msg: Msg) {
        let _ = self.msg_tx.send(msg);
    }
}

fn map_event(event: PipelineEvent) -> Msg {
    match event {
        PipelineEvent::Checkpoint {
            run_id,
            progress,
            message,
            ..
        } => Msg::PipelineProgress {
            run_id,
            progress,
            message,
        },
        PipelineEvent::Finished {
            run_id,
            outcome: RunOutcome::Completed,
        } => Msg::PipelineCompleted { run_id },
        PipelineEvent::Finished {
            run_id,
            outcome: RunOutcome::Cancelled,
        } => Msg::PipelineCancelled { run_id },
    }
}
