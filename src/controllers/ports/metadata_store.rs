use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::data::metadata::PersistedMetadata;

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("{} is not a usable source image: {reason}", .path.display())]
    InvalidSourceFile { path: PathBuf, reason: String },
    #[error("no parameters are stored for {}", .path.display())]
    MissingMetadata { path: PathBuf },
    #[error("parameters stored for {} are malformed: {reason}", .path.display())]
    MalformedMetadata { path: PathBuf, reason: String },
    #[error("metadata storage failed for {}", .path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Keeps the parameters of an exported image alongside it.
pub trait MetadataStorePort {
    fn save(&self, image_path: &Path, metadata: &PersistedMetadata) -> Result<(), MetadataError>;

    fn load(&self, image_path: &Path) -> Result<PersistedMetadata, MetadataError>;
}
