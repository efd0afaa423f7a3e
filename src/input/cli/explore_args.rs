use std::path::PathBuf;

use clap::Parser;

use crate::controllers::explore::ExploreSettings;
use crate::input::cli::common::{ColourSchemeArg, ThemeArgs, sweep_mode};

/// Explore the Mandelbrot set. `+`/`-` zoom, arrows pan, `s` resets,
/// `p` saves a snapshot, Escape quits.
#[derive(Debug, Parser)]
#[command(name = "gui", version)]
pub struct ExploreArgs {
    #[arg(long, value_enum, default_value_t = ColourSchemeArg::Theme)]
    pub colour_scheme: ColourSchemeArg,
    #[command(flatten)]
    pub theme: ThemeArgs,
    #[arg(long)]
    pub sequential: bool,
    #[arg(long, default_value = "./pic")]
    pub snapshot_dir: PathBuf,
    /// Recorded in snapshot metadata
    #[arg(long, default_value = "")]
    pub author: String,
}

impl ExploreArgs {
    #[must_use]
    pub fn into_settings(self) -> ExploreSettings {
        ExploreSettings {
            colour_scheme: self.colour_scheme.into(),
            theme: self.theme.theme(),
            mode: sweep_mode(self.sequential),
            snapshot_dir: self.snapshot_dir,
            author: self.author,
            ..ExploreSettings::default()
        }
    }
}
