use thiserror::Error;

use crate::core::data::colour::Colour;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ColourMapError {
    #[error("invalid HSV input: hue {hue} (0-360), saturation {saturation} (0-1), value {value} (0-1)")]
    InvalidColorInput {
        hue: f64,
        saturation: f64,
        value: f64,
    },
}

pub trait ColourMap<T> {
    fn map(&self, value: T) -> Result<Colour, ColourMapError>;

    fn display_name(&self) -> &str;
}
