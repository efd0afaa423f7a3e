use std::path::Path;

use image::RgbImage;

use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
use crate::core::data::raster::Raster;

/// Converts a raster into an `image` buffer.
pub fn raster_to_rgb_image(raster: &Raster) -> Option<RgbImage> {
    RgbImage::from_raw(
        raster.size().width(),
        raster.size().height(),
        raster.buffer().to_vec(),
    )
}

/// Writes rasters through the `image` crate; the format follows the file
/// extension (`.png`, `.jpg`).
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageFilePresenter {}

impl ImageFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

impl FilePresenterPort for ImageFilePresenter {
    fn present(&self, raster: &Raster, filepath: &Path) -> Result<(), PresentError> {
        let image = raster_to_rgb_image(raster).ok_or_else(|| PresentError {
            path: filepath.to_path_buf(),
            source: "raster buffer does not match its size".into(),
        })?;

        image.save(filepath).map_err(|err| PresentError {
            path: filepath.to_path_buf(),
            source: Box::new(err),
        })
    }
}
