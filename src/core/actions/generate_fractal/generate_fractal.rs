use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::image_size::ImageSize;
use crate::core::data::point::Point;

/// Runs `algorithm` over every pixel of `size`, row by row from the top-left.
pub fn generate_fractal<Alg: FractalAlgorithm>(
    size: ImageSize,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    (0..size.height())
        .flat_map(|y| (0..size.width()).map(move |x| Point { x, y }))
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}
