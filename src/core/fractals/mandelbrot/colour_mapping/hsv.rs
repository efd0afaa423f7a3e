use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMapError;
use crate::core::data::colour::Colour;

/// Converts hue (degrees, `0..=360`), saturation and value (`0..=1`) to RGB.
///
/// A hue of 360 wraps to 0. Inputs outside their ranges, NaN included, are
/// rejected rather than clamped.
pub fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> Result<Colour, ColourMapError> {
    if !(0.0..=360.0).contains(&hue)
        || !(0.0..=1.0).contains(&saturation)
        || !(0.0..=1.0).contains(&value)
    {
        return Err(ColourMapError::InvalidColorInput {
            hue,
            saturation,
            value,
        });
    }

    let hue = if hue == 360.0 { 0.0 } else { hue };
    let sector = hue / 60.0;

    let chroma = value * saturation;
    let x = chroma * (1.0 - ((sector % 2.0) - 1.0).abs());
    let m = value - chroma;

    let (r, g, b) = match sector as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    Ok(Colour {
        r: to_channel(r + m),
        g: to_channel(g + m),
        b: to_channel(b + m),
    })
}

fn to_channel(component: f64) -> u8 {
    (component * 255.0).round() as u8
}
