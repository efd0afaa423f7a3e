use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use log::info;

use crate::controllers::ports::metadata_store::{MetadataError, MetadataStorePort};
use crate::core::data::metadata::PersistedMetadata;

const SOURCE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Stores parameters as JSON in `<image>.json` next to the image.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonSidecarStore {}

impl JsonSidecarStore {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    #[must_use]
    pub fn sidecar_path(image_path: &Path) -> PathBuf {
        image_path.with_extension("json")
    }
}

fn has_source_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SOURCE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// Images in `dir` that could carry stored parameters, sorted by name.
pub fn list_source_images(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut images = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && has_source_extension(&path) {
            images.push(path);
        }
    }

    images.sort();
    Ok(images)
}

fn check_source_image(image_path: &Path) -> Result<(), MetadataError> {
    if !has_source_extension(image_path) {
        return Err(MetadataError::InvalidSourceFile {
            path: image_path.to_path_buf(),
            reason: format!("expected one of {}", SOURCE_EXTENSIONS.join(", ")),
        });
    }

    if !image_path.is_file() {
        return Err(MetadataError::InvalidSourceFile {
            path: image_path.to_path_buf(),
            reason: "file does not exist".to_string(),
        });
    }

    Ok(())
}

impl MetadataStorePort for JsonSidecarStore {
    fn save(&self, image_path: &Path, metadata: &PersistedMetadata) -> Result<(), MetadataError> {
        let sidecar = Self::sidecar_path(image_path);
        let json = serde_json::to_string_pretty(metadata).map_err(|err| {
            MetadataError::MalformedMetadata {
                path: sidecar.clone(),
                reason: err.to_string(),
            }
        })?;

        fs::write(&sidecar, json).map_err(|source| MetadataError::Storage {
            path: sidecar.clone(),
            source,
        })?;

        info!("Parameters saved to {}", sidecar.display());
        Ok(())
    }

    fn load(&self, image_path: &Path) -> Result<PersistedMetadata, MetadataError> {
        check_source_image(image_path)?;

        let sidecar = Self::sidecar_path(image_path);
        let json = match fs::read_to_string(&sidecar) {
            Ok(json) => json,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(MetadataError::MissingMetadata {
                    path: image_path.to_path_buf(),
                });
            }
            Err(source) => {
                return Err(MetadataError::Storage {
                    path: sidecar,
                    source,
                });
            }
        };

        serde_json::from_str(&json).map_err(|err| MetadataError::MalformedMetadata {
            path: sidecar,
            reason: err.to_string(),
        })
    }
}
