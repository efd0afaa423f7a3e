use std::io::{Cursor, Write};
use std::path::Path;
use std::process::{Child, ChildStdin, Command, Stdio};

use image::ImageFormat;
use log::{error, info};

use crate::controllers::ports::frame_sink::{FrameSinkError, FrameSinkPort};
use crate::core::data::raster::Raster;
use crate::presenters::file::image_file::raster_to_rgb_image;

/// Arguments for an H.264 encode of PNG frames read from stdin.
#[must_use]
pub fn ffmpeg_args(fps: u32, output: &Path) -> Vec<String> {
    vec![
        "-f".into(),
        "image2pipe".into(),
        "-i".into(),
        "pipe:0".into(),
        "-r".into(),
        fps.to_string(),
        "-pix_fmt".into(),
        "yuv420p".into(),
        "-vcodec".into(),
        "libx264".into(),
        output.display().to_string(),
    ]
}

/// Streams PNG-encoded frames into an encoder process's stdin.
#[derive(Debug)]
pub struct FfmpegSink {
    child: Child,
    stdin: Option<ChildStdin>,
}

impl FfmpegSink {
    /// Starts `ffmpeg` from `PATH`, writing the movie to `output`.
    pub fn spawn(output: &Path, fps: u32) -> Result<Self, FrameSinkError> {
        let mut command = Command::new("ffmpeg");
        command.args(ffmpeg_args(fps, output));

        info!("Encoding to {}", output.display());
        Self::spawn_command(command)
    }

    /// Starts an arbitrary encoder that reads frames from stdin.
    pub fn spawn_command(mut command: Command) -> Result<Self, FrameSinkError> {
        let mut child = command.stdin(Stdio::piped()).spawn()?;
        let stdin = child.stdin.take();

        Ok(Self { child, stdin })
    }
}

impl FrameSinkPort for FfmpegSink {
    fn submit(&mut self, index: u32, raster: &Raster) -> Result<(), FrameSinkError> {
        let stdin = self.stdin.as_mut().ok_or(FrameSinkError::Finished)?;

        let image = raster_to_rgb_image(raster).ok_or_else(|| FrameSinkError::Encode {
            index,
            source: "raster buffer does not match its size".into(),
        })?;

        let mut png = Cursor::new(Vec::new());
        image
            .write_to(&mut png, ImageFormat::Png)
            .map_err(|err| FrameSinkError::Encode {
                index,
                source: Box::new(err),
            })?;

        stdin.write_all(png.get_ref())?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), FrameSinkError> {
        let Some(stdin) = self.stdin.take() else {
            return Err(FrameSinkError::Finished);
        };
        // closing stdin is the end-of-stream signal
        drop(stdin);

        let status = self.child.wait()?;
        if !status.success() {
            error!("Encoder exited with {}", status);
            return Err(FrameSinkError::EncoderFailed {
                status: status.to_string(),
            });
        }

        Ok(())
    }
}

impl Drop for FfmpegSink {
    fn drop(&mut self) {
        if self.stdin.take().is_some() {
            // abandoned mid-stream; don't leave a zombie behind
            let _ = self.child.kill();
            let _ = self.child.wait();
        }
    }
}
