use std::path::PathBuf;
use std::time::Instant;

use log::info;
use thiserror::Error;

use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
use crate::controllers::ports::metadata_store::{MetadataError, MetadataStorePort};
use crate::core::actions::render_image::render_image::{RenderImageError, SweepMode, render_image};
use crate::core::data::fractal_params::FractalParameters;
use crate::core::data::image_size::ImageSize;
use crate::core::data::metadata::PersistedMetadata;
use crate::core::data::raster::Raster;
use crate::core::fractals::mandelbrot::colour_mapping::factory::colour_scheme_factory;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourSchemeKind;
use crate::core::fractals::mandelbrot::colour_mapping::theme::Theme;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("render failed")]
    Render(#[from] RenderImageError),
    #[error(transparent)]
    Present(#[from] PresentError),
    #[error(transparent)]
    Metadata(#[from] MetadataError),
}

/// Everything needed to write one still image.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRequest {
    pub size: ImageSize,
    pub params: FractalParameters,
    pub colour_scheme: ColourSchemeKind,
    pub theme: Theme,
    pub mode: SweepMode,
    pub output: PathBuf,
    /// Written next to the image when set, so the view can be resumed.
    pub author: Option<String>,
}

pub struct ExportController<P: FilePresenterPort, M: MetadataStorePort> {
    presenter: P,
    metadata_store: M,
}

impl<P: FilePresenterPort, M: MetadataStorePort> ExportController<P, M> {
    pub fn new(presenter: P, metadata_store: M) -> Self {
        Self {
            presenter,
            metadata_store,
        }
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn metadata_store(&self) -> &M {
        &self.metadata_store
    }

    pub fn render(&self, request: &ExportRequest) -> Result<Raster, RenderImageError> {
        let colour_map = colour_scheme_factory(
            request.colour_scheme,
            request.params.iteration_budget(),
            request.theme,
        );

        info!(
            "Rendering {}x{} at scale {} ({} iterations, {})",
            request.size.width(),
            request.size.height(),
            request.params.scale(),
            request.params.iteration_budget(),
            request.colour_scheme
        );

        let start = Instant::now();
        let raster = render_image(request.size, &request.params, &colour_map, request.mode)?;

        info!("Rendered in {:?}", start.elapsed());
        Ok(raster)
    }

    pub fn export(&self, request: &ExportRequest) -> Result<(), ExportError> {
        let raster = self.render(request)?;

        self.presenter.present(&raster, &request.output)?;
        info!("Saved to {}", request.output.display());

        if let Some(author) = &request.author {
            let metadata = PersistedMetadata::from_params(
                author.as_str(),
                request.output.display().to_string(),
                &request.params,
            );
            self.metadata_store.save(&request.output, &metadata)?;
        }

        Ok(())
    }
}
