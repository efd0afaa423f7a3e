use log::warn;
use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

use crate::core::data::raster::{Raster, copy_rgb_to_rgba};

/// Window framebuffer backed by `pixels`.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    width: u32,
    height: u32,
}

impl PixelsPresenter {
    pub fn new(window: &'static Window) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(size.width, size.height, surface_texture)?;

        Ok(Self {
            pixels,
            width: size.width,
            height: size.height,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        self.width = width;
        self.height = height;

        // a minimised window reports 0x0
        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)?;
        self.pixels.resize_buffer(width, height)
    }

    /// Copies `raster` into the framebuffer. A raster rendered for an older
    /// window size is dropped.
    pub fn show(&mut self, raster: &Raster) {
        let size = raster.size();
        if size.width() != self.width || size.height() != self.height {
            warn!(
                "Dropping {}x{} frame for {}x{} window",
                size.width(),
                size.height(),
                self.width,
                self.height
            );
            return;
        }

        copy_rgb_to_rgba(raster.buffer(), self.pixels.frame_mut());
    }

    pub fn render(&mut self) -> Result<(), pixels::Error> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        self.pixels.render()
    }
}
