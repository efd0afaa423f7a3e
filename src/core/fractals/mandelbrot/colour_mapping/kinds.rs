#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColourSchemeKind {
    #[default]
    SmoothHsv,
    ThemeInterpolated,
}

impl ColourSchemeKind {
    pub const ALL: &'static [Self] = &[Self::SmoothHsv, Self::ThemeInterpolated];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::SmoothHsv => "Smooth HSV",
            Self::ThemeInterpolated => "Theme interpolated",
        }
    }
}

impl std::fmt::Display for ColourSchemeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
