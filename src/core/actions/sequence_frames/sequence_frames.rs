use crate::core::data::animation_plan::AnimationPlan;
use crate::core::data::fractal_params::{FractalParameters, FractalParamsError};

/// Per-frame parameters of a zoom animation.
///
/// Frame `i` is `initial_scale * factor^i`, accumulated by repeated
/// multiplication. Centre and iteration budget come from the seed.
#[derive(Debug, Clone)]
pub struct FrameSequence {
    seed: FractalParameters,
    factor: f64,
    next_scale: f64,
    remaining: u32,
}

#[must_use]
pub fn sequence_frames(plan: &AnimationPlan, seed: &FractalParameters) -> FrameSequence {
    FrameSequence {
        seed: *seed,
        factor: plan.per_frame_scale_factor(),
        next_scale: plan.initial_scale(),
        remaining: plan.frame_count(),
    }
}

impl Iterator for FrameSequence {
    // a long enough zoom can underflow the scale to zero
    type Item = Result<FractalParameters, FractalParamsError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;

        let mut params = self.seed;
        let result = params.set_scale(self.next_scale).map(|()| params);
        self.next_scale *= self.factor;

        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FrameSequence {}
