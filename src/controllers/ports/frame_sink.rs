use std::error::Error;

use thiserror::Error;

use crate::core::data::raster::Raster;

#[derive(Debug, Error)]
pub enum FrameSinkError {
    #[error("frame sink I/O failed")]
    Io(#[from] std::io::Error),
    #[error("failed to encode frame {index}")]
    Encode {
        index: u32,
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
    #[error("encoder exited with {status}")]
    EncoderFailed { status: String },
    #[error("frame sink is already finished")]
    Finished,
}

/// Consumer of an ordered stream of animation frames.
pub trait FrameSinkPort {
    /// Hands over frame `index` (zero-based). Frames arrive in order.
    fn submit(&mut self, index: u32, raster: &Raster) -> Result<(), FrameSinkError>;

    /// Flushes and closes the sink. No frames may follow.
    fn finish(&mut self) -> Result<(), FrameSinkError>;
}
