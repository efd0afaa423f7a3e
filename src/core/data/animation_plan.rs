use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum AnimationPlanError {
    #[error("frame count must be greater than zero")]
    ZeroFrameCount,
    #[error("initial scale must be positive and finite, got {0}")]
    InvalidInitialScale(f64),
    #[error("final scale must be positive and finite, got {0}")]
    InvalidFinalScale(f64),
}

/// A zoom from `initial_scale` to `final_scale` over `frame_count` frames.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AnimationPlan {
    frame_count: u32,
    initial_scale: f64,
    final_scale: f64,
}

impl AnimationPlan {
    pub fn new(
        frame_count: u32,
        initial_scale: f64,
        final_scale: f64,
    ) -> Result<Self, AnimationPlanError> {
        if frame_count == 0 {
            return Err(AnimationPlanError::ZeroFrameCount);
        }

        if !initial_scale.is_finite() || initial_scale <= 0.0 {
            return Err(AnimationPlanError::InvalidInitialScale(initial_scale));
        }

        if !final_scale.is_finite() || final_scale <= 0.0 {
            return Err(AnimationPlanError::InvalidFinalScale(final_scale));
        }

        Ok(Self {
            frame_count,
            initial_scale,
            final_scale,
        })
    }

    /// Frames in a movie of `length_minutes` at `fps`, rounding the length
    /// to whole seconds first.
    #[must_use]
    pub fn frame_count_for(length_minutes: f64, fps: u32) -> u32 {
        let seconds = (length_minutes * 60.0).round().max(0.0) as u32;
        seconds.saturating_mul(fps)
    }

    #[must_use]
    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    #[must_use]
    pub fn initial_scale(&self) -> f64 {
        self.initial_scale
    }

    #[must_use]
    pub fn final_scale(&self) -> f64 {
        self.final_scale
    }

    /// Geometric factor that takes `initial_scale` to `final_scale` in
    /// exactly `frame_count` multiplications.
    #[must_use]
    pub fn per_frame_scale_factor(&self) -> f64 {
        (self.final_scale / self.initial_scale).powf(1.0 / f64::from(self.frame_count))
    }
}
