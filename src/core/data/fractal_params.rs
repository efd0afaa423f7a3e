use thiserror::Error;

pub const BASE_ITERATION_BUDGET: u32 = 100;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum FractalParamsError {
    #[error("scale must be positive and finite, got {0}")]
    InvalidScale(f64),
    #[error("centre must be finite, got ({center_x}, {center_y})")]
    InvalidCenter { center_x: f64, center_y: f64 },
    #[error("iteration budget must be greater than zero")]
    ZeroIterationBudget,
}

/// Zoom, centre and iteration budget for one frame.
///
/// `scale` is relative to the unzoomed view; smaller values zoom in.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FractalParameters {
    scale: f64,
    center_x: f64,
    center_y: f64,
    iteration_budget: u32,
}

impl FractalParameters {
    pub fn new(
        scale: f64,
        center_x: f64,
        center_y: f64,
        iteration_budget: u32,
    ) -> Result<Self, FractalParamsError> {
        validate_scale(scale)?;

        if !center_x.is_finite() || !center_y.is_finite() {
            return Err(FractalParamsError::InvalidCenter { center_x, center_y });
        }

        if iteration_budget == 0 {
            return Err(FractalParamsError::ZeroIterationBudget);
        }

        Ok(Self {
            scale,
            center_x,
            center_y,
            iteration_budget,
        })
    }

    /// Builds parameters whose budget follows [`iteration_budget_for_scale`].
    pub fn with_policy_budget(
        scale: f64,
        center_x: f64,
        center_y: f64,
    ) -> Result<Self, FractalParamsError> {
        validate_scale(scale)?;
        Self::new(scale, center_x, center_y, iteration_budget_for_scale(scale))
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.center_x
    }

    #[must_use]
    pub fn center_y(&self) -> f64 {
        self.center_y
    }

    #[must_use]
    pub fn iteration_budget(&self) -> u32 {
        self.iteration_budget
    }

    pub fn set_scale(&mut self, scale: f64) -> Result<(), FractalParamsError> {
        validate_scale(scale)?;
        self.scale = scale;
        Ok(())
    }

    pub fn set_center(&mut self, center_x: f64, center_y: f64) -> Result<(), FractalParamsError> {
        if !center_x.is_finite() || !center_y.is_finite() {
            return Err(FractalParamsError::InvalidCenter { center_x, center_y });
        }

        self.center_x = center_x;
        self.center_y = center_y;
        Ok(())
    }

    /// Recomputes the budget from the current scale.
    pub fn apply_budget_policy(&mut self) {
        self.iteration_budget = iteration_budget_for_scale(self.scale);
    }
}

/// The unzoomed view centred on the main cardioid.
impl Default for FractalParameters {
    fn default() -> Self {
        Self {
            scale: 1.0,
            center_x: -0.75,
            center_y: 0.0,
            iteration_budget: BASE_ITERATION_BUDGET,
        }
    }
}

fn validate_scale(scale: f64) -> Result<(), FractalParamsError> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(FractalParamsError::InvalidScale(scale));
    }

    Ok(())
}

/// Viewer policy: deeper zooms get super-linearly more iterations.
///
/// `100` for `scale >= 1`, otherwise `round(100 * (1 + log10(1/scale)^1.25))`.
#[must_use]
pub fn iteration_budget_for_scale(scale: f64) -> u32 {
    if scale >= 1.0 {
        return BASE_ITERATION_BUDGET;
    }

    let depth = (1.0 / scale).log10().powf(1.25);
    let budget = (f64::from(BASE_ITERATION_BUDGET) * (1.0 + depth)).round();

    // float-to-int `as` saturates, so an absurd zoom caps at u32::MAX
    budget as u32
}
