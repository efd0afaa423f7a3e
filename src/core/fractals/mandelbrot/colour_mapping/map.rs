use crate::core::actions::generate_pixel_buffer::ports::colour_map::{ColourMap, ColourMapError};
use crate::core::data::colour::Colour;
use crate::core::data::escape_result::EscapeResult;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourSchemeKind;

pub trait MandelbrotColourMap: ColourMap<EscapeResult> + Send + Sync {
    fn kind(&self) -> ColourSchemeKind;
}

impl ColourMap<EscapeResult> for Box<dyn MandelbrotColourMap> {
    fn map(&self, value: EscapeResult) -> Result<Colour, ColourMapError> {
        (**self).map(value)
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }
}
