use std::fmt::{Display, Formatter};

use log::debug;
use rand::prelude::StdRng;

use crate::error::ParamError;
use crate::sampler::ParameterSampler;
use crate::spirograph::{Spirograph, STEP_DEGREES};
use crate::surface::Surface;

/// Milliseconds between animation ticks.
pub const TICK_INTERVAL_MS: u64 = 10;

/// Drives a fixed set of curves in lockstep. Each tick advances every curve
/// by one step, in creation order; once the whole set has closed, every
/// trace is cleared and retraced with freshly sampled geometry. The cycle
/// never halts on its own.
pub struct SpiroAnimator {
    spiros: Vec<Spirograph>,
    sampler: ParameterSampler,
    rng: StdRng,
    width: f32,
    height: f32,
    step_degrees: f32,
}

impl SpiroAnimator {
    /// Samples `count` parameter sets and places the curves on the surface,
    /// pens on their starting points.
    pub fn new(
        count: usize,
        sampler: ParameterSampler,
        mut rng: StdRng,
        surface: &mut dyn Surface,
    ) -> Result<Self, ParamError> {
        let (width, height) = surface.dimensions();
        let mut spiros = Vec::with_capacity(count);
        for id in 0..count {
            let params = sampler.sample(&mut rng, width, height)?;
            spiros.push(Spirograph::new(id, params, surface));
        }
        Ok(Self {
            spiros,
            sampler,
            rng,
            width,
            height,
            step_degrees: STEP_DEGREES,
        })
    }

    pub fn spiros(&self) -> &[Spirograph] {
        &self.spiros
    }

    /// One animation step for every curve, then a whole-set regeneration
    /// once all of them have closed. Completed curves cost nothing until
    /// the last one catches up, so the composition always changes as a
    /// unit.
    pub fn tick(&mut self, surface: &mut dyn Surface) -> Result<(), ParamError> {
        for spiro in &mut self.spiros {
            spiro.step(self.step_degrees, surface);
        }
        if self.spiros.iter().all(Spirograph::is_complete) {
            self.regenerate_all(surface)?;
        }
        Ok(())
    }

    /// Clears every trace and restarts the set from freshly sampled
    /// parameters.
    pub fn regenerate_all(&mut self, surface: &mut dyn Surface) -> Result<(), ParamError> {
        debug!("regenerating {} curves", self.spiros.len());
        for spiro in &mut self.spiros {
            spiro.clear_trace(surface);
            let params = self.sampler.sample(&mut self.rng, self.width, self.height)?;
            spiro.set_params(params, surface);
            spiro.restart(surface);
        }
        Ok(())
    }

    /// Flips every pen marker. Drawing progress is untouched.
    pub fn toggle_visibility(&mut self, surface: &mut dyn Surface) {
        for spiro in &mut self.spiros {
            spiro.toggle_visible(surface);
        }
    }
}

impl Display for SpiroAnimator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let complete = self.spiros.iter().filter(|s| s.is_complete()).count();
        write!(
            f,
            "Spirographs!  {} curves, {} complete",
            self.spiros.len(),
            complete
        )
    }
}
