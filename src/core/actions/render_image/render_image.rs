use thiserror::Error;

use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::escape_result::EscapeResult;
use crate::core::data::fractal_params::FractalParameters;
use crate::core::data::image_size::ImageSize;
use crate::core::data::raster::Raster;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::util::pixel_to_complex_coords::PixelToComplexCoordsError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SweepMode {
    Sequential,
    #[default]
    Parallel,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderImageError {
    #[error("coordinate mapping failed: {0}")]
    Coordinates(#[from] PixelToComplexCoordsError),
    #[error(transparent)]
    PixelBuffer(#[from] GeneratePixelBufferError),
}

/// Renders one Mandelbrot frame: evaluates every pixel, then colours it.
///
/// Both sweep modes produce identical rasters.
pub fn render_image<CMap: ColourMap<EscapeResult>>(
    size: ImageSize,
    params: &FractalParameters,
    colour_map: &CMap,
    mode: SweepMode,
) -> Result<Raster, RenderImageError> {
    let algorithm = MandelbrotAlgorithm::new(size, *params);

    let escape_results = match mode {
        SweepMode::Sequential => generate_fractal(size, &algorithm)?,
        SweepMode::Parallel => generate_fractal_parallel_rayon(size, &algorithm)?,
    };

    Ok(generate_pixel_buffer(escape_results, colour_map, size)?)
}
