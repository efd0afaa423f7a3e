use crate::core::actions::generate_pixel_buffer::ports::colour_map::{ColourMap, ColourMapError};
use crate::core::data::colour::Colour;
use crate::core::data::escape_result::EscapeResult;
use crate::core::fractals::mandelbrot::colour_mapping::hsv::hsv_to_rgb;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourSchemeKind;
use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;

pub const INSIDE_COLOUR: Colour = Colour::new(255, 99, 0);

/// Continuous hue ramp driven by the renormalised escape count.
#[derive(Debug)]
pub struct SmoothHsv {
    iteration_budget: u32,
}

impl ColourMap<EscapeResult> for SmoothHsv {
    fn map(&self, value: EscapeResult) -> Result<Colour, ColourMapError> {
        match value {
            EscapeResult::BoundedForever => Ok(INSIDE_COLOUR),
            EscapeResult::Escaped {
                steps,
                magnitude_squared,
            } => {
                let adjusted =
                    f64::from(steps) + 1.0 - magnitude_squared.sqrt().log2().ln();
                let fraction = (adjusted / f64::from(self.iteration_budget)).clamp(0.0, 1.0);

                hsv_to_rgb(360.0 * fraction, 1.0, 1.0)
            }
        }
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for SmoothHsv {
    fn kind(&self) -> ColourSchemeKind {
        ColourSchemeKind::SmoothHsv
    }
}

impl SmoothHsv {
    #[must_use]
    pub fn new(iteration_budget: u32) -> Self {
        Self { iteration_budget }
    }
}
