//! Optional `interpolator.ron` in the working directory.
//!
//! Every field has a default, so a partial file is fine. A missing file means
//! defaults; a malformed one is reported to the caller.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use interp_logging::LogDestination;
use log::LevelFilter;
use serde::{Deserialize, Serialize};

pub const SETTINGS_FILENAME: &str = "interpolator.ron";
pub const LOG_FILENAME: &str = "interpolator.log";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LogTarget {
    File,
    #[default]
    Terminal,
    Both,
}

impl From<LogTarget> for LogDestination {
    fn from(target: LogTarget) -> Self {
        match target {
            LogTarget::File => LogDestination::File,
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::Both => LogDestination::Both,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Delay between simulated checkpoints.
    pub step_delay_ms: u64,
    /// Where downloads are written.
    pub download_dir: PathBuf,
    pub log_target: LogTarget,
    pub log_level: LogLevel,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            step_delay_ms: interpolator_engine::DEFAULT_STEP_DELAY.as_millis() as u64,
            download_dir: PathBuf::from("output"),
            log_target: LogTarget::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl AppSettings {
    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }

    /// `Ok(None)` when the file does not exist.
    pub fn load(path: &Path) -> anyhow::Result<Option<Self>> {
        let content = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err).with_context(|| format!("failed to read settings {:?}", path))
            }
        };
        let settings = ron::from_str(&content)
            .with_context(|| format!("failed to parse settings {:?}", path))?;
        Ok(Some(settings))
    }

    /// Relative download directories resolve against `base`.
    pub fn resolve_download_dir(&self, base: &Path) -> PathBuf {
        if self.download_dir.is_absolute() {
            self.download_dir.clone()
        } else {
            base.join(&self.download_dir)
        }
    }
}
