use std::path::{Path, PathBuf};

use clap::Parser;
use log::info;

use crate::controllers::movie::MovieConfig;
use crate::core::data::image_size::ImageSize;
use crate::input::cli::common::{ArgsError, ColourSchemeArg, ThemeArgs, sweep_mode};
use crate::storage::metadata_sidecar::list_source_images;

/// Render a zoom from the full view into the view stored with an image.
#[derive(Debug, Parser)]
#[command(name = "movie", version)]
pub struct MovieArgs {
    /// Exported image (.jpg, .jpeg or .png) with stored view parameters.
    /// Picked from --in-dir when omitted.
    pub source: Option<PathBuf>,
    #[arg(long, default_value = "./pic")]
    pub in_dir: PathBuf,
    /// 1-based position in the sorted --in-dir listing; the last image by default
    #[arg(long)]
    pub pick: Option<usize>,
    #[arg(long, default_value_t = 960)]
    pub width: u32,
    #[arg(long, default_value_t = 560)]
    pub height: u32,
    #[arg(long, default_value_t = 30)]
    pub fps: u32,
    /// Movie length; rounded to whole seconds
    #[arg(long, default_value_t = 0.333)]
    pub length_minutes: f64,
    #[arg(long, default_value_t = 300)]
    pub iterations: u32,
    #[arg(long, default_value_t = 1.0)]
    pub initial_scale: f64,
    #[arg(long, value_enum, default_value_t = ColourSchemeArg::SmoothHsv)]
    pub colour_scheme: ColourSchemeArg,
    #[command(flatten)]
    pub theme: ThemeArgs,
    #[arg(long)]
    pub sequential: bool,
    /// Cleared before rendering
    #[arg(long, default_value = "./mov")]
    pub out_dir: PathBuf,
    /// Write numbered PNG frames instead of piping to ffmpeg
    #[arg(long)]
    pub png_frames: bool,
}

impl MovieArgs {
    pub fn to_config(&self) -> Result<MovieConfig, ArgsError> {
        if self.fps == 0 {
            return Err(ArgsError::ZeroFps);
        }

        if !self.length_minutes.is_finite() || self.length_minutes < 0.0 {
            return Err(ArgsError::InvalidLength(self.length_minutes));
        }

        Ok(MovieConfig {
            source: self.resolve_source()?,
            size: ImageSize::new(self.width, self.height)?,
            fps: self.fps,
            length_minutes: self.length_minutes,
            iteration_budget: self.iterations,
            initial_scale: self.initial_scale,
            colour_scheme: self.colour_scheme.into(),
            theme: self.theme.theme(),
            mode: sweep_mode(self.sequential),
        })
    }

    /// The explicit source, or an image picked from `in_dir`.
    pub fn resolve_source(&self) -> Result<PathBuf, ArgsError> {
        if let Some(source) = &self.source {
            return Ok(source.clone());
        }

        let images = list_source_images(&self.in_dir).map_err(|source| ArgsError::SourceDir {
            dir: self.in_dir.clone(),
            source,
        })?;
        if images.is_empty() {
            return Err(ArgsError::NoSourceImages {
                dir: self.in_dir.clone(),
            });
        }

        for (number, image) in (1_usize..).zip(&images) {
            info!("{}. {}", number, image.display());
        }

        let pick = self.pick.unwrap_or(images.len());
        let chosen = pick
            .checked_sub(1)
            .and_then(|index| images.get(index))
            .ok_or(ArgsError::PickOutOfRange {
                pick,
                available: images.len(),
            })?;

        info!("Using {}", chosen.display());
        Ok(chosen.clone())
    }

    /// `<out_dir>/<source stem>.mp4`
    #[must_use]
    pub fn movie_path(&self, source: &Path) -> PathBuf {
        let stem = source
            .file_stem()
            .map_or_else(|| "movie".into(), |stem| stem.to_string_lossy());

        self.out_dir.join(format!("{stem}.mp4"))
    }
}
