pub mod file_presenter;
pub mod frame_sink;
pub mod metadata_store;
