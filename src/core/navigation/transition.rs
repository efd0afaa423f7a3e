use crate::core::data::fractal_params::{FractalParameters, FractalParamsError};
use crate::core::navigation::input_event::InputEvent;
use crate::core::navigation::settings::NavigationSettings;

/// Computes the viewer state after `event`.
///
/// `start` is the state restored by [`InputEvent::Reset`]. The iteration
/// budget of the result always follows the zoom policy. Fails only if the
/// new scale or centre is no longer a finite, positive value.
pub fn apply_input_event(
    current: &FractalParameters,
    start: &FractalParameters,
    event: InputEvent,
    settings: &NavigationSettings,
) -> Result<FractalParameters, FractalParamsError> {
    let mut next = *current;
    let delta = current.scale() * settings.pan_fraction;
    let (x, y) = (current.center_x(), current.center_y());

    match event {
        InputEvent::ZoomIn => next.set_scale(current.scale() / settings.zoom_step)?,
        InputEvent::ZoomOut => next.set_scale(current.scale() * settings.zoom_step)?,
        InputEvent::PanUp => next.set_center(x, y - delta)?,
        InputEvent::PanDown => next.set_center(x, y + delta)?,
        InputEvent::PanLeft => next.set_center(x + delta, y)?,
        InputEvent::PanRight => next.set_center(x - delta, y)?,
        InputEvent::Reset => next = *start,
        InputEvent::Snapshot => {}
    }

    next.apply_budget_policy();
    Ok(next)
}
