use std::path::PathBuf;

use clap::Parser;

use crate::controllers::export::ExportRequest;
use crate::core::data::fractal_params::FractalParameters;
use crate::core::data::image_size::ImageSize;
use crate::input::cli::common::{ArgsError, ColourSchemeArg, ThemeArgs, sweep_mode};

/// Render a single Mandelbrot image.
#[derive(Debug, Parser)]
#[command(name = "mandel_explorer", version)]
pub struct ExportArgs {
    #[arg(long, default_value_t = 3840)]
    pub width: u32,
    #[arg(long, default_value_t = 2160)]
    pub height: u32,
    /// Zoom relative to the full view; smaller is deeper
    #[arg(long, default_value_t = 1.0)]
    pub scale: f64,
    #[arg(long, default_value_t = -0.7, allow_negative_numbers = true)]
    pub center_x: f64,
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub center_y: f64,
    #[arg(long, default_value_t = 1000)]
    pub iterations: u32,
    #[arg(long, value_enum, default_value_t = ColourSchemeArg::SmoothHsv)]
    pub colour_scheme: ColourSchemeArg,
    #[command(flatten)]
    pub theme: ThemeArgs,
    /// Render on one thread
    #[arg(long)]
    pub sequential: bool,
    /// Output file; the extension picks the format
    #[arg(short, long, default_value = "./newOut.png")]
    pub output: PathBuf,
    /// Also store the view parameters next to the image
    #[arg(long)]
    pub author: Option<String>,
}

impl ExportArgs {
    pub fn into_request(self) -> Result<ExportRequest, ArgsError> {
        Ok(ExportRequest {
            size: ImageSize::new(self.width, self.height)?,
            params: FractalParameters::new(
                self.scale,
                self.center_x,
                self.center_y,
                self.iterations,
            )?,
            colour_scheme: self.colour_scheme.into(),
            theme: self.theme.theme(),
            mode: sweep_mode(self.sequential),
            output: self.output,
            author: self.author,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::render_image::render_image::SweepMode;
    use crate::core::data::colour::Colour;
    use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourSchemeKind;
    use crate::core::fractals::mandelbrot::colour_mapping::theme::Theme;

    #[test]
    fn test_defaults() {
        let request = ExportArgs::try_parse_from(["mandel_explorer"])
            .unwrap()
            .into_request()
            .unwrap();

        assert_eq!(request.size, ImageSize::UHD);
        assert_eq!(request.params.scale(), 1.0);
        assert_eq!(request.params.center_x(), -0.7);
        assert_eq!(request.params.center_y(), 0.0);
        assert_eq!(request.params.iteration_budget(), 1000);
        assert_eq!(request.colour_scheme, ColourSchemeKind::SmoothHsv);
        assert_eq!(request.theme, Theme::default());
        assert_eq!(request.mode, SweepMode::Parallel);
        assert_eq!(request.output, PathBuf::from("./newOut.png"));
        assert_eq!(request.author, None);
    }

    #[test]
    fn test_overrides() {
        let request = ExportArgs::try_parse_from([
            "mandel_explorer",
            "--width",
            "640",
            "--height",
            "480",
            "--scale",
            "0.01",
            "--center-x=-1.25",
            "--center-y",
            "-0.5",
            "--iterations",
            "250",
            "--colour-scheme",
            "theme",
            "--primary",
            "#ff0000",
            "--sequential",
            "-o",
            "out.jpg",
            "--author",
            "Ada",
        ])
        .unwrap()
        .into_request()
        .unwrap();

        assert_eq!(request.size, ImageSize::new(640, 480).unwrap());
        assert_eq!(request.params.scale(), 0.01);
        assert_eq!(request.params.center_x(), -1.25);
        assert_eq!(request.params.center_y(), -0.5);
        assert_eq!(request.params.iteration_budget(), 250);
        assert_eq!(request.colour_scheme, ColourSchemeKind::ThemeInterpolated);
        assert_eq!(request.theme.primary, Colour::new(255, 0, 0));
        assert_eq!(request.mode, SweepMode::Sequential);
        assert_eq!(request.output, PathBuf::from("out.jpg"));
        assert_eq!(request.author.as_deref(), Some("Ada"));
    }

    #[test]
    fn test_bad_colour_is_a_parse_error() {
        assert!(ExportArgs::try_parse_from(["mandel_explorer", "--primary", "red"]).is_err());
    }

    #[test]
    fn test_zero_width_is_rejected() {
        let args = ExportArgs::try_parse_from(["mandel_explorer", "--width", "0"]).unwrap();

        assert!(matches!(args.into_request(), Err(ArgsError::Size(_))));
    }

    #[test]
    fn test_zero_scale_is_rejected() {
        let args = ExportArgs::try_parse_from(["mandel_explorer", "--scale", "0"]).unwrap();

        assert!(matches!(args.into_request(), Err(ArgsError::Params(_))));
    }
}
