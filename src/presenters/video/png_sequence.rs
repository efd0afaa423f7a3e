use std::path::{Path, PathBuf};

use crate::controllers::ports::frame_sink::{FrameSinkError, FrameSinkPort};
use crate::core::data::raster::Raster;
use crate::presenters::file::image_file::raster_to_rgb_image;

/// Writes frames as `0001.png`, `0002.png`, ... into a directory.
#[derive(Debug)]
pub struct PngSequenceSink {
    dir: PathBuf,
    finished: bool,
}

impl PngSequenceSink {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            finished: false,
        }
    }

    #[must_use]
    pub fn frame_path(&self, index: u32) -> PathBuf {
        frame_path(&self.dir, index)
    }
}

fn frame_path(dir: &Path, index: u32) -> PathBuf {
    dir.join(format!("{:04}.png", u64::from(index) + 1))
}

impl FrameSinkPort for PngSequenceSink {
    fn submit(&mut self, index: u32, raster: &Raster) -> Result<(), FrameSinkError> {
        if self.finished {
            return Err(FrameSinkError::Finished);
        }

        let image = raster_to_rgb_image(raster).ok_or_else(|| FrameSinkError::Encode {
            index,
            source: "raster buffer does not match its size".into(),
        })?;

        image
            .save(self.frame_path(index))
            .map_err(|err| FrameSinkError::Encode {
                index,
                source: Box::new(err),
            })
    }

    fn finish(&mut self) -> Result<(), FrameSinkError> {
        self.finished = true;
        Ok(())
    }
}
