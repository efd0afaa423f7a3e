use std::f64::consts::PI;

use crate::core::actions::generate_pixel_buffer::ports::colour_map::{ColourMap, ColourMapError};
use crate::core::data::colour::Colour;
use crate::core::data::escape_result::EscapeResult;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourSchemeKind;
use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;
use crate::core::fractals::mandelbrot::colour_mapping::theme::Theme;

/// Eases from the theme's primary colour to its foreground colour as the
/// escape count approaches the budget.
#[derive(Debug)]
pub struct ThemeInterpolated {
    iteration_budget: u32,
    theme: Theme,
}

impl ColourMap<EscapeResult> for ThemeInterpolated {
    fn map(&self, value: EscapeResult) -> Result<Colour, ColourMapError> {
        let steps = match value {
            EscapeResult::BoundedForever => return Ok(self.theme.background),
            EscapeResult::Escaped { steps, .. } => steps,
        };

        let fraction = f64::from(steps) / f64::from(self.iteration_budget);
        let t = (fraction / 2.0 * PI).sin();
        let start = self.theme.primary;
        let end = self.theme.foreground;

        Ok(Colour {
            r: interpolate_channel(start.r, end.r, t),
            g: interpolate_channel(start.g, end.g, t),
            b: interpolate_channel(start.b, end.b, t),
        })
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for ThemeInterpolated {
    fn kind(&self) -> ColourSchemeKind {
        ColourSchemeKind::ThemeInterpolated
    }
}

impl ThemeInterpolated {
    #[must_use]
    pub fn new(iteration_budget: u32, theme: Theme) -> Self {
        Self {
            iteration_budget,
            theme,
        }
    }
}

// Truncates towards the lower of the two channels.
fn interpolate_channel(start: u8, end: u8, t: f64) -> u8 {
    if end >= start {
        (t * f64::from(end - start)) as u8 + start
    } else {
        ((1.0 - t) * f64::from(start - end)) as u8 + end
    }
}
