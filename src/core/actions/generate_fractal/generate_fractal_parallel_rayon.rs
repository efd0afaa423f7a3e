use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::image_size::ImageSize;
use crate::core::data::point::Point;

/// Parallel counterpart of [`generate_fractal`](super::generate_fractal::generate_fractal).
///
/// Rows are computed on rayon's pool and collected back in order, so the
/// output matches the serial sweep element for element.
pub fn generate_fractal_parallel_rayon<Alg>(
    size: ImageSize,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
{
    let row_width = size.width() as usize;

    let rows: Result<Vec<Vec<Alg::Success>>, Alg::Failure> = (0..size.height())
        .into_par_iter()
        .map(|y| {
            let mut row = Vec::with_capacity(row_width);

            for x in 0..size.width() {
                row.push(algorithm.compute(Point { x, y })?);
            }

            Ok(row)
        })
        .collect();

    rows.map(|r| r.into_iter().flatten().collect())
}
