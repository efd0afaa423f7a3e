#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationSettings {
    /// Scale divisor per zoom-in step (multiplier when zooming out).
    pub zoom_step: f64,
    /// Pan distance as a fraction of the current scale.
    pub pan_fraction: f64,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            zoom_step: 1.1,
            pan_fraction: 0.2,
        }
    }
}
