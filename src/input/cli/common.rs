use std::io;
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use thiserror::Error;

use crate::core::actions::render_image::render_image::SweepMode;
use crate::core::data::colour::Colour;
use crate::core::data::fractal_params::FractalParamsError;
use crate::core::data::image_size::ImageSizeError;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourSchemeKind;
use crate::core::fractals::mandelbrot::colour_mapping::theme::Theme;

#[derive(Debug, Error)]
pub enum ArgsError {
    #[error(transparent)]
    Size(#[from] ImageSizeError),
    #[error(transparent)]
    Params(#[from] FractalParamsError),
    #[error("frames per second must be greater than zero")]
    ZeroFps,
    #[error("movie length must be a non-negative number of minutes, got {0}")]
    InvalidLength(f64),
    #[error("could not list images in {}", .dir.display())]
    SourceDir {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("no .jpg, .jpeg or .png images in {}", .dir.display())]
    NoSourceImages { dir: PathBuf },
    #[error("image {pick} was picked but only {available} are listed")]
    PickOutOfRange { pick: usize, available: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColourSchemeArg {
    SmoothHsv,
    Theme,
}

impl From<ColourSchemeArg> for ColourSchemeKind {
    fn from(arg: ColourSchemeArg) -> Self {
        match arg {
            ColourSchemeArg::SmoothHsv => ColourSchemeKind::SmoothHsv,
            ColourSchemeArg::Theme => ColourSchemeKind::ThemeInterpolated,
        }
    }
}

/// Overrides for the theme palette, as `#rrggbb`.
#[derive(Debug, Clone, Default, Args)]
pub struct ThemeArgs {
    #[arg(long, value_name = "#RRGGBB")]
    pub primary: Option<Colour>,
    #[arg(long, value_name = "#RRGGBB")]
    pub foreground: Option<Colour>,
    #[arg(long, value_name = "#RRGGBB")]
    pub background: Option<Colour>,
}

impl ThemeArgs {
    #[must_use]
    pub fn theme(&self) -> Theme {
        let default = Theme::default();

        Theme {
            primary: self.primary.unwrap_or(default.primary),
            foreground: self.foreground.unwrap_or(default.foreground),
            background: self.background.unwrap_or(default.background),
        }
    }
}

#[must_use]
pub fn sweep_mode(sequential: bool) -> SweepMode {
    if sequential {
        SweepMode::Sequential
    } else {
        SweepMode::Parallel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_args_fall_back_to_default_palette() {
        assert_eq!(ThemeArgs::default().theme(), Theme::default());
    }

    #[test]
    fn test_theme_args_override_single_colour() {
        let args = ThemeArgs {
            background: Some(Colour::new(1, 2, 3)),
            ..ThemeArgs::default()
        };

        let theme = args.theme();

        assert_eq!(theme.background, Colour::new(1, 2, 3));
        assert_eq!(theme.primary, Theme::default().primary);
    }

    #[test]
    fn test_colour_scheme_arg_maps_to_kind() {
        assert_eq!(
            ColourSchemeKind::from(ColourSchemeArg::Theme),
            ColourSchemeKind::ThemeInterpolated
        );
        assert_eq!(
            ColourSchemeKind::from(ColourSchemeArg::SmoothHsv),
            ColourSchemeKind::SmoothHsv
        );
    }
}
