use std::io;
use std::path::PathBuf;

use log::info;
use thiserror::Error;

use crate::controllers::movie::{MovieController, MovieError};
use crate::controllers::ports::frame_sink::{FrameSinkError, FrameSinkPort};
use crate::input::cli::common::ArgsError;
use crate::input::cli::movie_args::MovieArgs;
use crate::presenters::video::ffmpeg::FfmpegSink;
use crate::presenters::video::png_sequence::PngSequenceSink;
use crate::storage::metadata_sidecar::JsonSidecarStore;
use crate::storage::output_dir::prepare_output_dir;

#[derive(Debug, Error)]
pub enum RunMovieError {
    #[error(transparent)]
    Args(#[from] ArgsError),
    #[error(transparent)]
    Movie(#[from] MovieError),
    #[error("could not prepare output directory {}", .path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not open frame sink")]
    Sink(#[from] FrameSinkError),
}

/// Runs the movie command. The output directory is only cleared once the
/// source and its stored view have loaded.
pub fn run_movie(args: &MovieArgs) -> Result<u32, RunMovieError> {
    let config = args.to_config()?;
    let controller = MovieController::new(JsonSidecarStore::new());
    let movie = controller.prepare(&config)?;

    prepare_output_dir(&args.out_dir).map_err(|source| RunMovieError::OutputDir {
        path: args.out_dir.clone(),
        source,
    })?;

    let mut sink: Box<dyn FrameSinkPort> = if args.png_frames {
        Box::new(PngSequenceSink::new(&args.out_dir))
    } else {
        Box::new(FfmpegSink::spawn(&args.movie_path(&config.source), config.fps)?)
    };

    let frames = controller.render(&movie, &config, sink.as_mut())?;
    info!("Done: {} frames in {}", frames, args.out_dir.display());

    Ok(frames)
}
