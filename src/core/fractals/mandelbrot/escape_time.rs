use crate::core::data::complex::Complex;
use crate::core::data::escape_result::EscapeResult;

/// Squared escape radius. Once `|z|^2` passes this the orbit diverges.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Runs `z -> z^2 + c` from `z = 0` for at most `iteration_budget` steps.
///
/// The squares of both components are carried between steps so each
/// iteration costs three multiplications.
#[must_use]
pub fn evaluate(c: Complex, iteration_budget: u32) -> EscapeResult {
    let mut x = 0.0_f64;
    let mut y = 0.0_f64;
    let mut xsq = 0.0_f64;
    let mut ysq = 0.0_f64;
    let mut steps = 0_u32;

    while steps < iteration_budget && xsq + ysq <= ESCAPE_RADIUS_SQUARED {
        let x_next = xsq - ysq + c.real;
        y = 2.0 * x * y + c.imag;
        x = x_next;
        xsq = x * x;
        ysq = y * y;
        steps += 1;
    }

    if steps == iteration_budget {
        EscapeResult::BoundedForever
    } else {
        EscapeResult::Escaped {
            steps,
            magnitude_squared: xsq + ysq,
        }
    }
}
