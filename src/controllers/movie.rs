use std::path::PathBuf;
use std::time::Instant;

use log::{debug, info};
use thiserror::Error;

use crate::controllers::ports::frame_sink::{FrameSinkError, FrameSinkPort};
use crate::controllers::ports::metadata_store::{MetadataError, MetadataStorePort};
use crate::core::actions::render_image::render_image::{RenderImageError, SweepMode, render_image};
use crate::core::actions::sequence_frames::sequence_frames::sequence_frames;
use crate::core::data::animation_plan::{AnimationPlan, AnimationPlanError};
use crate::core::data::fractal_params::{FractalParameters, FractalParamsError};
use crate::core::data::image_size::ImageSize;
use crate::core::fractals::mandelbrot::colour_mapping::factory::colour_scheme_factory;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourSchemeKind;
use crate::core::fractals::mandelbrot::colour_mapping::theme::Theme;

#[derive(Debug, Error)]
pub enum MovieError {
    #[error(transparent)]
    Metadata(#[from] MetadataError),
    #[error("invalid frame parameters")]
    Params(#[from] FractalParamsError),
    #[error("invalid animation plan")]
    Plan(#[from] AnimationPlanError),
    #[error("frame render failed")]
    Render(#[from] RenderImageError),
    #[error("frame sink failed")]
    Sink(#[from] FrameSinkError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MovieConfig {
    /// Image whose stored parameters give the zoom target.
    pub source: PathBuf,
    pub size: ImageSize,
    pub fps: u32,
    pub length_minutes: f64,
    pub iteration_budget: u32,
    pub initial_scale: f64,
    pub colour_scheme: ColourSchemeKind,
    pub theme: Theme,
    pub mode: SweepMode,
}

impl MovieConfig {
    #[must_use]
    pub fn frame_count(&self) -> u32 {
        AnimationPlan::frame_count_for(self.length_minutes, self.fps)
    }
}

/// A movie whose target and frame plan have been loaded and validated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreparedMovie {
    seed: FractalParameters,
    plan: AnimationPlan,
}

impl PreparedMovie {
    #[must_use]
    pub fn seed(&self) -> &FractalParameters {
        &self.seed
    }

    #[must_use]
    pub fn plan(&self) -> &AnimationPlan {
        &self.plan
    }
}

/// Renders a zoom from `initial_scale` down to a stored view.
pub struct MovieController<M: MetadataStorePort> {
    metadata_store: M,
}

impl<M: MetadataStorePort> MovieController<M> {
    pub fn new(metadata_store: M) -> Self {
        Self { metadata_store }
    }

    /// Loads the stored view and builds the frame plan. Touches no output.
    pub fn prepare(&self, config: &MovieConfig) -> Result<PreparedMovie, MovieError> {
        let metadata = self.metadata_store.load(&config.source)?;
        let seed = metadata.seed(config.iteration_budget)?;
        let plan = AnimationPlan::new(config.frame_count(), config.initial_scale, seed.scale())?;

        Ok(PreparedMovie { seed, plan })
    }

    /// Streams every frame of `movie` into `sink` and closes it. Returns the
    /// number of frames written.
    pub fn render<S: FrameSinkPort + ?Sized>(
        &self,
        movie: &PreparedMovie,
        config: &MovieConfig,
        sink: &mut S,
    ) -> Result<u32, MovieError> {
        let PreparedMovie { seed, plan } = movie;

        info!(
            "Zooming to scale {} at ({}, {}) in {} frames of {}x{}",
            seed.scale(),
            seed.center_x(),
            seed.center_y(),
            plan.frame_count(),
            config.size.width(),
            config.size.height()
        );

        let colour_map =
            colour_scheme_factory(config.colour_scheme, config.iteration_budget, config.theme);
        let start = Instant::now();
        let mut written = 0_u32;

        for (index, frame) in (0_u32..).zip(sequence_frames(plan, seed)) {
            let params = frame?;
            let raster = render_image(config.size, &params, &colour_map, config.mode)?;
            sink.submit(index, &raster)?;
            written += 1;

            debug!("Frame {} scale {}", index + 1, params.scale());
            if config.fps > 0 && written % config.fps == 0 {
                info!(
                    "{}/{} frames ({:?})",
                    written,
                    plan.frame_count(),
                    start.elapsed()
                );
            }
        }

        sink.finish()?;
        info!("Wrote {} frames in {:?}", written, start.elapsed());

        Ok(written)
    }

    pub fn run<S: FrameSinkPort + ?Sized>(
        &self,
        config: &MovieConfig,
        sink: &mut S,
    ) -> Result<u32, MovieError> {
        let movie = self.prepare(config)?;
        self.render(&movie, config, sink)
    }
}
