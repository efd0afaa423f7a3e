//! Input adapters: command-line parsing and the interactive window.
//!
//! Each turns outside input into controller requests.

pub mod cli;
#[cfg(feature = "gui")]
pub mod gui;
