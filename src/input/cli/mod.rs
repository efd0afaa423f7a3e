pub mod common;
pub mod explore_args;
pub mod export_args;
pub mod movie_args;
pub mod run_movie;
