pub mod ffmpeg;
pub mod png_sequence;
