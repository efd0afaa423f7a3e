/// Outcome of the escape-time iteration for one point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum EscapeResult {
    /// The orbit left the radius-2 disc after `steps` iterations.
    Escaped { steps: u32, magnitude_squared: f64 },
    /// The budget ran out with the orbit still inside the disc.
    BoundedForever,
}

impl EscapeResult {
    #[must_use]
    pub fn is_bounded(&self) -> bool {
        matches!(self, Self::BoundedForever)
    }
}
