use thiserror::Error;

use crate::core::actions::generate_pixel_buffer::ports::colour_map::{ColourMap, ColourMapError};
use crate::core::data::colour::Colour;
use crate::core::data::image_size::ImageSize;
use crate::core::data::raster::{BYTES_PER_PIXEL, Raster, RasterData, RasterError};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeneratePixelBufferError {
    #[error("colour map error: {0}")]
    ColourMap(#[from] ColourMapError),
    #[error("raster error: {0}")]
    Raster(#[from] RasterError),
}

/// Maps each value through `mapper` and packs the colours into a raster of
/// `size`. `input` must be in row-major order.
pub fn generate_pixel_buffer<T, CMap: ColourMap<T>>(
    input: Vec<T>,
    mapper: &CMap,
    size: ImageSize,
) -> Result<Raster, GeneratePixelBufferError> {
    let mut buffer: RasterData = Vec::with_capacity(input.len() * BYTES_PER_PIXEL);

    for value in input {
        let Colour { r, g, b } = mapper.map(value)?;

        buffer.push(r);
        buffer.push(g);
        buffer.push(b);
    }

    Ok(Raster::from_data(size, buffer)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct StubColourMapSuccess {}

    impl ColourMap<u8> for StubColourMapSuccess {
        fn map(&self, value: u8) -> Result<Colour, ColourMapError> {
            Ok(Colour {
                r: value,
                g: value,
                b: value,
            })
        }

        fn display_name(&self) -> &str {
            "Stub Success"
        }
    }

    #[derive(Debug)]
    struct StubColourMapFailure {}

    impl ColourMap<u8> for StubColourMapFailure {
        fn map(&self, _: u8) -> Result<Colour, ColourMapError> {
            Err(ColourMapError::InvalidColorInput {
                hue: 400.0,
                saturation: 1.0,
                value: 1.0,
            })
        }

        fn display_name(&self) -> &str {
            "Stub Failure"
        }
    }

    #[test]
    fn test_generates_pixel_buffer_correctly() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let size = ImageSize::new(3, 2).unwrap();
        let expected_buffer: RasterData =
            vec![1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4, 5, 5, 5, 6, 6, 6];

        let results = generate_pixel_buffer(input, &StubColourMapSuccess {}, size).unwrap();

        assert_eq!(results.buffer(), expected_buffer.as_slice());
        assert_eq!(results.size(), size);
    }

    #[test]
    fn test_propagates_colour_map_failure() {
        let input: Vec<u8> = vec![1, 2, 3, 4];
        let size = ImageSize::new(2, 2).unwrap();

        let results = generate_pixel_buffer(input, &StubColourMapFailure {}, size);

        assert!(matches!(
            results,
            Err(GeneratePixelBufferError::ColourMap(
                ColourMapError::InvalidColorInput { .. }
            ))
        ));
    }

    #[test]
    fn test_size_input_mismatch_returns_err() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let size = ImageSize::new(2, 2).unwrap();

        let results = generate_pixel_buffer(input, &StubColourMapSuccess {}, size);

        assert_eq!(
            results,
            Err(GeneratePixelBufferError::Raster(RasterError::BoundsMismatch {
                expected: 12,
                actual: 18
            }))
        );
    }
}
