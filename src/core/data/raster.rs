use thiserror::Error;

use crate::core::data::colour::Colour;
use crate::core::data::image_size::ImageSize;
use crate::core::data::point::Point;

pub const BYTES_PER_PIXEL: usize = 3;

fn image_size_to_buffer_size(size: ImageSize) -> usize {
    size.size() as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RasterError {
    #[error("pixel at x:{}, y:{} outside of {}x{} raster", .pixel.x, .pixel.y, .size.width(), .size.height())]
    PixelOutsideBounds { pixel: Point, size: ImageSize },
    #[error("image size needs {expected} bytes but buffer has {actual}")]
    BoundsMismatch { expected: usize, actual: usize },
}

pub type RasterData = Vec<u8>;

/// Row-major RGB8 pixels with the origin at the top-left. Alpha is
/// implicitly opaque.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    size: ImageSize,
    buffer: RasterData,
}

impl Raster {
    #[must_use]
    pub fn new(size: ImageSize) -> Self {
        Self {
            size,
            buffer: vec![0; image_size_to_buffer_size(size)],
        }
    }

    pub fn from_data(size: ImageSize, buffer: RasterData) -> Result<Self, RasterError> {
        let expected = image_size_to_buffer_size(size);

        if expected != buffer.len() {
            return Err(RasterError::BoundsMismatch {
                expected,
                actual: buffer.len(),
            });
        }

        Ok(Self { size, buffer })
    }

    #[must_use]
    pub fn size(&self) -> ImageSize {
        self.size
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    fn index_of(&self, pixel: Point) -> Result<usize, RasterError> {
        if !self.size.contains_point(pixel) {
            return Err(RasterError::PixelOutsideBounds {
                pixel,
                size: self.size,
            });
        }

        let row = pixel.y as usize * self.size.width() as usize;
        Ok((row + pixel.x as usize) * BYTES_PER_PIXEL)
    }

    pub fn pixel(&self, pixel: Point) -> Result<Colour, RasterError> {
        let index = self.index_of(pixel)?;

        Ok(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }
}

/// Copies RGB pixel data into an RGBA destination, setting alpha to 255.
///
/// Copies as many whole pixels as both slices hold.
pub fn copy_rgb_to_rgba(src: &[u8], dst: &mut [u8]) {
    for (src_pixel, dst_pixel) in src
        .chunks_exact(BYTES_PER_PIXEL)
        .zip(dst.chunks_exact_mut(4))
    {
        dst_pixel[..3].copy_from_slice(src_pixel);
        dst_pixel[3] = 255;
    }
}
