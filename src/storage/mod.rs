pub mod metadata_sidecar;
pub mod output_dir;
