use std::error::Error;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::data::raster::Raster;

#[derive(Debug, Error)]
#[error("failed to write image {}", .path.display())]
pub struct PresentError {
    pub path: PathBuf,
    #[source]
    pub source: Box<dyn Error + Send + Sync>,
}

pub trait FilePresenterPort {
    fn present(&self, raster: &Raster, filepath: &Path) -> Result<(), PresentError>;
}
