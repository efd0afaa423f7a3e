//! Interactive viewer: a winit window with a `pixels` framebuffer.

pub mod key_map;
pub mod run_gui;
