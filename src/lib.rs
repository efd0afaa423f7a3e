mod controllers;
mod core;
mod input;
mod presenters;
mod storage;

pub use controllers::explore::{ExploreController, ExploreError, ExploreOutcome, ExploreSettings};
pub use controllers::export::{ExportController, ExportError, ExportRequest};
pub use controllers::movie::{MovieConfig, MovieController, MovieError, PreparedMovie};
pub use controllers::ports::file_presenter::{FilePresenterPort, PresentError};
pub use controllers::ports::frame_sink::{FrameSinkError, FrameSinkPort};
pub use controllers::ports::metadata_store::{MetadataError, MetadataStorePort};

pub use crate::core::actions::generate_pixel_buffer::ports::colour_map::{ColourMap, ColourMapError};
pub use crate::core::actions::render_image::render_image::{RenderImageError, SweepMode, render_image};
pub use crate::core::actions::sequence_frames::sequence_frames::{FrameSequence, sequence_frames};
pub use crate::core::data::animation_plan::{AnimationPlan, AnimationPlanError};
pub use crate::core::data::colour::{Colour, ParseColourError};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::escape_result::EscapeResult;
pub use crate::core::data::fractal_params::{
    FractalParameters, FractalParamsError, iteration_budget_for_scale,
};
pub use crate::core::data::image_size::{ImageSize, ImageSizeError};
pub use crate::core::data::metadata::PersistedMetadata;
pub use crate::core::data::point::Point;
pub use crate::core::data::raster::{Raster, RasterError};
pub use crate::core::fractals::mandelbrot::colour_mapping::factory::colour_scheme_factory;
pub use crate::core::fractals::mandelbrot::colour_mapping::hsv::hsv_to_rgb;
pub use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourSchemeKind;
pub use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;
pub use crate::core::fractals::mandelbrot::colour_mapping::theme::Theme;
pub use crate::core::fractals::mandelbrot::escape_time::evaluate;
pub use crate::core::navigation::input_event::InputEvent;
pub use crate::core::navigation::settings::NavigationSettings;
pub use crate::core::navigation::transition::apply_input_event;
pub use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;

pub use input::cli::common::ArgsError;
pub use input::cli::explore_args::ExploreArgs;
pub use input::cli::export_args::ExportArgs;
pub use input::cli::movie_args::MovieArgs;
pub use input::cli::run_movie::{RunMovieError, run_movie};
#[cfg(feature = "gui")]
pub use input::gui::run_gui::{GuiError, run_gui};

pub use presenters::file::image_file::ImageFilePresenter;
pub use presenters::video::ffmpeg::FfmpegSink;
pub use presenters::video::png_sequence::PngSequenceSink;

pub use storage::metadata_sidecar::{JsonSidecarStore, list_source_images};
pub use storage::output_dir::prepare_output_dir;
