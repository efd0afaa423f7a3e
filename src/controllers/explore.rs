use std::fs;
use std::path::PathBuf;

use log::{info, warn};
use thiserror::Error;

use crate::controllers::export::{ExportController, ExportError, ExportRequest};
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::controllers::ports::metadata_store::MetadataStorePort;
use crate::core::actions::render_image::render_image::{RenderImageError, SweepMode};
use crate::core::data::fractal_params::FractalParameters;
use crate::core::data::image_size::ImageSize;
use crate::core::data::raster::Raster;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourSchemeKind;
use crate::core::fractals::mandelbrot::colour_mapping::theme::Theme;
use crate::core::navigation::input_event::InputEvent;
use crate::core::navigation::settings::NavigationSettings;
use crate::core::navigation::transition::apply_input_event;
use crate::storage::output_dir::next_snapshot_path;

#[derive(Debug, Error)]
pub enum ExploreError {
    #[error("could not create snapshot directory {}", .path.display())]
    SnapshotDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("snapshot export failed")]
    Snapshot(#[from] ExportError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExploreSettings {
    pub start: FractalParameters,
    pub navigation: NavigationSettings,
    pub colour_scheme: ColourSchemeKind,
    pub theme: Theme,
    pub mode: SweepMode,
    pub snapshot_size: ImageSize,
    pub snapshot_dir: PathBuf,
    pub snapshot_extension: String,
    pub author: String,
}

impl Default for ExploreSettings {
    fn default() -> Self {
        Self {
            start: FractalParameters::default(),
            navigation: NavigationSettings::default(),
            colour_scheme: ColourSchemeKind::ThemeInterpolated,
            theme: Theme::default(),
            mode: SweepMode::Parallel,
            snapshot_size: ImageSize::UHD,
            snapshot_dir: PathBuf::from("./pic"),
            snapshot_extension: "jpg".to_string(),
            author: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExploreOutcome {
    /// The view moved; the caller should render again.
    Redraw,
    Unchanged,
    SnapshotSaved(PathBuf),
}

/// Interactive session: owns the current view and turns input events into
/// new views or snapshot exports.
pub struct ExploreController<P: FilePresenterPort, M: MetadataStorePort> {
    settings: ExploreSettings,
    current: FractalParameters,
    exporter: ExportController<P, M>,
}

impl<P: FilePresenterPort, M: MetadataStorePort> ExploreController<P, M> {
    pub fn new(settings: ExploreSettings, presenter: P, metadata_store: M) -> Self {
        let mut current = settings.start;
        current.apply_budget_policy();

        Self {
            settings,
            current,
            exporter: ExportController::new(presenter, metadata_store),
        }
    }

    #[must_use]
    pub fn params(&self) -> &FractalParameters {
        &self.current
    }

    #[must_use]
    pub fn settings(&self) -> &ExploreSettings {
        &self.settings
    }

    pub fn handle(&mut self, event: InputEvent) -> Result<ExploreOutcome, ExploreError> {
        if event == InputEvent::Snapshot {
            return self.snapshot().map(ExploreOutcome::SnapshotSaved);
        }

        match apply_input_event(
            &self.current,
            &self.settings.start,
            event,
            &self.settings.navigation,
        ) {
            Ok(next) if next == self.current => Ok(ExploreOutcome::Unchanged),
            Ok(next) => {
                self.current = next;
                info!(
                    "{:?}: scale {} centre ({}, {}) iterations {}",
                    event,
                    next.scale(),
                    next.center_x(),
                    next.center_y(),
                    next.iteration_budget()
                );
                Ok(ExploreOutcome::Redraw)
            }
            Err(err) => {
                warn!("Ignoring {:?}: {}", event, err);
                Ok(ExploreOutcome::Unchanged)
            }
        }
    }

    /// Renders the current view at `size`.
    pub fn render(&self, size: ImageSize) -> Result<Raster, RenderImageError> {
        self.exporter.render(&self.request(size, PathBuf::new(), None))
    }

    fn snapshot(&self) -> Result<PathBuf, ExploreError> {
        let dir = &self.settings.snapshot_dir;
        fs::create_dir_all(dir).map_err(|source| ExploreError::SnapshotDir {
            path: dir.clone(),
            source,
        })?;

        let output = next_snapshot_path(dir, &self.settings.snapshot_extension);
        let request = self.request(
            self.settings.snapshot_size,
            output.clone(),
            Some(self.settings.author.clone()),
        );
        self.exporter.export(&request)?;

        Ok(output)
    }

    fn request(&self, size: ImageSize, output: PathBuf, author: Option<String>) -> ExportRequest {
        ExportRequest {
            size,
            params: self.current,
            colour_scheme: self.settings.colour_scheme,
            theme: self.settings.theme,
            mode: self.settings.mode,
            output,
            author,
        }
    }
}
