use thiserror::Error;

use crate::core::data::complex::Complex;
use crate::core::data::fractal_params::FractalParameters;
use crate::core::data::image_size::ImageSize;
use crate::core::data::point::Point;

/// Width, in plane units, of the unzoomed view.
pub const UNZOOMED_VIEW_WIDTH: f64 = 3.5;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum PixelToComplexCoordsError {
    #[error(
        "point (x: {}, y: {}) is outside the {}x{} image",
        .point.x, .point.y, .size.width(), .size.height()
    )]
    PointOutsideImage { point: Point, size: ImageSize },
}

/// Maps a pixel onto the complex plane.
///
/// Both axes are normalised by the image width so the set keeps its shape;
/// the vertical field of view therefore follows the aspect ratio.
pub fn pixel_to_complex_coords(
    pixel_position: Point,
    size: ImageSize,
    params: &FractalParameters,
) -> Result<Complex, PixelToComplexCoordsError> {
    if !size.contains_point(pixel_position) {
        return Err(PixelToComplexCoordsError::PointOutsideImage {
            point: pixel_position,
            size,
        });
    }

    let draw_scale = UNZOOMED_VIEW_WIDTH * params.scale();
    let width = f64::from(size.width());
    let px = f64::from(pixel_position.x);
    let py = f64::from(pixel_position.y);

    let real = ((px / width) - 0.5) * draw_scale + params.center_x();
    let imag = ((py / width) - 0.5 * size.aspect()) * draw_scale - params.center_y();

    Ok(Complex { real, imag })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(scale: f64, center_x: f64, center_y: f64) -> FractalParameters {
        FractalParameters::new(scale, center_x, center_y, 100).unwrap()
    }

    #[test]
    fn test_top_left_of_unzoomed_view() {
        let size = ImageSize::new(100, 100).unwrap();

        let result = pixel_to_complex_coords(Point { x: 0, y: 0 }, size, &params(1.0, 0.0, 0.0));

        assert_eq!(
            result,
            Ok(Complex {
                real: -1.75,
                imag: -1.75
            })
        );
    }

    #[test]
    fn test_image_centre_maps_to_view_centre() {
        let size = ImageSize::new(200, 100).unwrap();

        let result =
            pixel_to_complex_coords(Point { x: 100, y: 50 }, size, &params(1.0, -0.75, 0.0))
                .unwrap();

        assert_eq!(result.real, -0.75);
        assert_eq!(result.imag, 0.0);
    }

    #[test]
    fn test_center_y_is_subtracted() {
        let size = ImageSize::new(100, 100).unwrap();

        let result =
            pixel_to_complex_coords(Point { x: 50, y: 50 }, size, &params(1.0, 0.0, 0.5)).unwrap();

        assert_eq!(result.imag, -0.5);
    }

    #[test]
    fn test_vertical_extent_follows_aspect() {
        // 400x100: the width spans 3.5 units, the height a quarter of that
        let size = ImageSize::new(400, 100).unwrap();
        let p = params(1.0, 0.0, 0.0);

        let top = pixel_to_complex_coords(Point { x: 0, y: 0 }, size, &p).unwrap();

        assert_eq!(top.real, -1.75);
        assert_eq!(top.imag, -0.4375);
    }

    #[test]
    fn test_scale_shrinks_the_window() {
        let size = ImageSize::new(100, 100).unwrap();

        let result =
            pixel_to_complex_coords(Point { x: 0, y: 0 }, size, &params(0.5, 0.0, 0.0)).unwrap();

        assert_eq!(result.real, -0.875);
        assert_eq!(result.imag, -0.875);
    }

    #[test]
    fn test_is_deterministic() {
        let size = ImageSize::new(37, 23).unwrap();
        let p = params(0.0123, -1.2411110166880112, 0.0868955541831086);

        for y in 0..23 {
            for x in 0..37 {
                let first = pixel_to_complex_coords(Point { x, y }, size, &p);
                let second = pixel_to_complex_coords(Point { x, y }, size, &p);
                assert_eq!(first, second);
            }
        }
    }

    #[test]
    fn test_pixel_outside_image_fails() {
        let size = ImageSize::new(100, 100).unwrap();
        let point = Point { x: 100, y: 10 };

        assert_eq!(
            pixel_to_complex_coords(point, size, &params(1.0, 0.0, 0.0)),
            Err(PixelToComplexCoordsError::PointOutsideImage { point, size })
        );
    }
}
