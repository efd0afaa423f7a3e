#[allow(clippy::module_inception)]
pub mod sequence_frames;
