use crate::core::data::colour::Colour;

/// Palette for the theme-interpolated scheme.
///
/// Escaped points blend from `primary` to `foreground`; points that never
/// escape take `background`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub primary: Colour,
    pub foreground: Colour,
    pub background: Colour,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Colour::new(41, 111, 246),
            foreground: Colour::new(243, 243, 244),
            background: Colour::new(23, 23, 24),
        }
    }
}
