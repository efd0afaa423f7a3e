pub mod input_event;
pub mod settings;
pub mod transition;
