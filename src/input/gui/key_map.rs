use winit::event::ElementState;
use winit::keyboard::{Key, NamedKey};

use crate::core::navigation::input_event::InputEvent;

/// Translates a key press into a viewer command. Releases are ignored.
#[must_use]
pub fn map_key(key: &Key, state: ElementState) -> Option<InputEvent> {
    if state != ElementState::Pressed {
        return None;
    }

    match key {
        Key::Named(NamedKey::ArrowUp) => Some(InputEvent::PanUp),
        Key::Named(NamedKey::ArrowDown) => Some(InputEvent::PanDown),
        Key::Named(NamedKey::ArrowLeft) => Some(InputEvent::PanLeft),
        Key::Named(NamedKey::ArrowRight) => Some(InputEvent::PanRight),
        Key::Character(text) => match text.as_str() {
            "+" => Some(InputEvent::ZoomIn),
            "-" => Some(InputEvent::ZoomOut),
            "s" | "S" => Some(InputEvent::Reset),
            "p" | "P" => Some(InputEvent::Snapshot),
            _ => None,
        },
        _ => None,
    }
}

#[must_use]
pub fn is_quit_key(key: &Key, state: ElementState) -> bool {
    state == ElementState::Pressed && *key == Key::Named(NamedKey::Escape)
}
