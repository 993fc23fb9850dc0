use std::collections::HashMap;

use bytes::Bytes;
use interp_logging::{interp_debug, interp_warn};
use interpolator_core::ResourceLocator;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    pub bytes: Bytes,
    pub media_type: String,
}

#[derive(Debug, Error)]
pub enum BlobError {
    #[error("could not build blob locator: {0}")]
    Locator(#[from] url::ParseError),
}

/// Owns media bytes addressed by `blob:` locators.
///
/// A locator is live from `register` until the first `revoke` (or
/// `release_all`); later revokes report `false`.
#[derive(Debug, Default)]
pub struct BlobStore {
    last_id: u64,
    blobs: HashMap<ResourceLocator, Blob>,
}

impl BlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        bytes: Bytes,
        media_type: impl Into<String>,
    ) -> Result<ResourceLocator, BlobError> {
        let locator = ResourceLocator::for_blob(self.last_id + 1)?;
        self.last_id += 1;
        interp_debug!("Registered {} ({} bytes)", locator, bytes.len());
        self.blobs.insert(
            locator.clone(),
            Blob {
                bytes,
                media_type: media_type.into(),
            },
        );
        Ok(locator)
    }

    pub fn resolve(&self, locator: &ResourceLocator) -> Option<&Blob> {
        self.blobs.get(locator)
    }

    pub fn revoke(&mut self, locator: &ResourceLocator) -> bool {
        match self.blobs.remove(locator) {
            Some(_) => {
                interp_debug!("Revoked {}", locator);
                true
            }
            None => {
                interp_warn!("Revoke of unknown or already released locator {}", locator);
                false
            }
        }
    }

    /// Releases every live locator. Returns how many were released.
    pub fn release_all(&mut self) -> usize {
        let released = self.blobs.len();
        self.blobs.clear();
        released
    }

    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }
}
