use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourSchemeKind;
use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;
use crate::core::fractals::mandelbrot::colour_mapping::maps::smooth_hsv::SmoothHsv;
use crate::core::fractals::mandelbrot::colour_mapping::maps::theme_interpolated::ThemeInterpolated;
use crate::core::fractals::mandelbrot::colour_mapping::theme::Theme;

/// Builds the colour map for `kind`. `theme` is only read by
/// [`ColourSchemeKind::ThemeInterpolated`].
#[must_use]
pub fn colour_scheme_factory(
    kind: ColourSchemeKind,
    iteration_budget: u32,
    theme: Theme,
) -> Box<dyn MandelbrotColourMap> {
    match kind {
        ColourSchemeKind::SmoothHsv => Box::new(SmoothHsv::new(iteration_budget)),
        ColourSchemeKind::ThemeInterpolated => {
            Box::new(ThemeInterpolated::new(iteration_budget, theme))
        }
    }
}
