use ggez::glam::Vec2;
use ggez::graphics::Color;
use rand::prelude::StdRng;
use rand::Rng;

use crate::curve::CurveParams;
use crate::error::ParamError;

/// Sampling bounds, overridable at construction. The defaults reproduce the
/// classic tuning: outer radius between 50 and half the short surface side,
/// inner radius up to nine tenths of the outer, hole ratio clear of the
/// degenerate center and rim.
#[derive(Debug, Clone, Copy)]
pub struct SamplerRanges {
    pub min_outer_radius: u32,
    pub min_inner_radius: u32,
    pub max_inner_fraction: f32,
    pub min_hole_ratio: f32,
    pub max_hole_ratio: f32,
}

impl Default for SamplerRanges {
    fn default() -> Self {
        Self {
            min_outer_radius: 50,
            min_inner_radius: 10,
            max_inner_fraction: 0.9,
            min_hole_ratio: 0.1,
            max_hole_ratio: 0.9,
        }
    }
}

/// Produces randomized, constrained curve parameters for a drawing surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParameterSampler {
    ranges: SamplerRanges,
}

impl ParameterSampler {
    pub fn new(ranges: SamplerRanges) -> Self {
        Self { ranges }
    }

    /// Random parameters for a curve that fits a `width` x `height` surface
    /// centered on the origin. Dimensions must be positive; surfaces too
    /// small for the minimum radius clamp the sampling interval to it.
    pub fn sample(
        &self,
        rng: &mut StdRng,
        width: f32,
        height: f32,
    ) -> Result<CurveParams, ParamError> {
        let r = &self.ranges;
        let max_outer = ((width.min(height) / 2.0) as u32).max(r.min_outer_radius);
        let outer = rng.gen_range(r.min_outer_radius..=max_outer);
        let max_inner = ((outer as f32 * r.max_inner_fraction) as u32).max(r.min_inner_radius);
        let inner = rng.gen_range(r.min_inner_radius..=max_inner);
        let hole = rng.gen_range(r.min_hole_ratio..r.max_hole_ratio);
        let center = Vec2::new(
            rng.gen_range(-width / 2.0..=width / 2.0),
            rng.gen_range(-height / 2.0..=height / 2.0),
        );
        let color = Color::new(rng.gen(), rng.gen(), rng.gen(), 1.0);
        CurveParams::new(outer, inner, hole, center, color)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn samples_stay_inside_the_documented_bounds() {
        let sampler = ParameterSampler::default();
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..100 {
            let p = sampler.sample(&mut rng, 800.0, 600.0).unwrap();
            assert!((50..=300).contains(&p.outer_radius()));
            assert!(p.inner_radius() >= 10);
            assert!(p.inner_radius() as f32 <= 0.9 * p.outer_radius() as f32);
            assert!(p.hole_ratio() >= 0.1 && p.hole_ratio() < 0.9);
            assert!(p.center().x.abs() <= 400.0);
            assert!(p.center().y.abs() <= 300.0);
        }
    }

    #[test]
    fn tiny_surfaces_clamp_to_the_minimum_outer_radius() {
        let mut rng = StdRng::seed_from_u64(1);
        let p = ParameterSampler::default().sample(&mut rng, 60.0, 60.0).unwrap();
        assert_eq!(p.outer_radius(), 50);
    }

    #[test]
    fn custom_ranges_are_respected() {
        let sampler = ParameterSampler::new(SamplerRanges {
            min_outer_radius: 100,
            ..Default::default()
        });
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..50 {
            let p = sampler.sample(&mut rng, 800.0, 600.0).unwrap();
            assert!((100..=300).contains(&p.outer_radius()));
        }
    }
}
