use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::escape_result::EscapeResult;
use crate::core::data::fractal_params::FractalParameters;
use crate::core::data::image_size::ImageSize;
use crate::core::data::point::Point;
use crate::core::fractals::mandelbrot::escape_time::evaluate;
use crate::core::util::pixel_to_complex_coords::{
    PixelToComplexCoordsError, pixel_to_complex_coords,
};

#[derive(Debug, Clone, Copy)]
pub struct MandelbrotAlgorithm {
    size: ImageSize,
    params: FractalParameters,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = EscapeResult;
    type Failure = PixelToComplexCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let c = pixel_to_complex_coords(pixel, self.size, &self.params)?;

        Ok(evaluate(c, self.params.iteration_budget()))
    }
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(size: ImageSize, params: FractalParameters) -> Self {
        Self { size, params }
    }
}
