//! Interpolator engine: simulated pipeline, blob store and file IO.
mod blob;
mod checkpoint;
mod engine;
mod pacer;
mod persist;
mod pipeline;
mod probe;
mod types;

pub use blob::{Blob, BlobError, BlobStore};
pub use checkpoint::{standard_checkpoints, Checkpoint};
pub use engine::{EngineError, EngineHandle, EngineSettings};
pub use pacer::{ExternalPacer, FixedDelayPacer, Pacer, PacerTrigger, DEFAULT_STEP_DELAY};
pub use persist::{prepare_download_dir, AtomicFileWriter, PersistError};
pub use pipeline::{run_pipeline, ChannelProgressSink, ProgressSink};
pub use probe::{describe_file, media_type_for_path, read_media, ProbeError};
pub use types::{PipelineEvent, RunOutcome};
