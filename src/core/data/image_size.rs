use thiserror::Error;

use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum ImageSizeError {
    #[error("image size must be positive: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ImageSize {
    width: u32,
    height: u32,
}

impl ImageSize {
    /// 3840x2160, the size of exported stills.
    pub const UHD: Self = Self {
        width: 3840,
        height: 2160,
    };

    pub fn new(width: u32, height: u32) -> Result<Self, ImageSizeError> {
        if width == 0 || height == 0 {
            return Err(ImageSizeError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn aspect(&self) -> f64 {
        f64::from(self.height) / f64::from(self.width)
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_size_new_valid() {
        let size = ImageSize::new(800, 600).unwrap();

        assert_eq!(size.width(), 800);
        assert_eq!(size.height(), 600);
        assert_eq!(size.size(), 480_000);
        assert_eq!(size.aspect(), 0.75);
    }

    #[test]
    fn test_single_pixel_is_valid() {
        assert!(ImageSize::new(1, 1).is_ok());
    }

    #[test]
    fn test_image_size_dimensions_must_be_positive() {
        assert_eq!(
            ImageSize::new(0, 10),
            Err(ImageSizeError::InvalidSize { width: 0, height: 10 })
        );
        assert_eq!(
            ImageSize::new(10, 0),
            Err(ImageSizeError::InvalidSize { width: 10, height: 0 })
        );
        assert_eq!(
            ImageSize::new(0, 0),
            Err(ImageSizeError::InvalidSize { width: 0, height: 0 })
        );
    }

    #[test]
    fn test_image_size_contains_point() {
        let size = ImageSize::new(100, 50).unwrap();

        assert!(size.contains_point(Point { x: 0, y: 0 }));
        assert!(size.contains_point(Point { x: 99, y: 49 }));
        assert!(!size.contains_point(Point { x: 100, y: 0 }));
        assert!(!size.contains_point(Point { x: 0, y: 50 }));
    }
}
