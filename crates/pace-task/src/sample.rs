//! Uniform in-bounds parameter sampling.
//!
//! The external optimizer initializes its population by drawing parameter
//! vectors uniformly within the task bounds. Sampling takes an explicit
//! `&mut R: Rng` so results are deterministic under a seeded RNG.

use rand::Rng;

use crate::bounds::{ParamBlock, ParamBounds};

// ---------------------------------------------------------------------------
// ParamVector
// ---------------------------------------------------------------------------

/// One sampled point in the identification parameter space.
///
/// Values follow the bounds-matrix layout: four per-joint blocks then the
/// delay scalar. Indexing within a block follows the task's `joint_order`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamVector {
    values: Vec<f64>,
    joint_count: usize,
}

impl ParamVector {
    /// All values in matrix row order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Per-joint rotor armature (kg·m²).
    #[must_use]
    pub fn armature(&self) -> &[f64] {
        &self.values[ParamBlock::Armature.rows(self.joint_count)]
    }

    /// Per-joint viscous damping (Nm·s/rad).
    #[must_use]
    pub fn damping(&self) -> &[f64] {
        &self.values[ParamBlock::Damping.rows(self.joint_count)]
    }

    /// Per-joint Coulomb friction (Nm).
    #[must_use]
    pub fn friction(&self) -> &[f64] {
        &self.values[ParamBlock::Friction.rows(self.joint_count)]
    }

    /// Per-joint encoder bias (rad).
    #[must_use]
    pub fn encoder_bias(&self) -> &[f64] {
        &self.values[ParamBlock::EncoderBias.rows(self.joint_count)]
    }

    /// Actuation delay as sampled (fractional steps).
    #[must_use]
    pub fn delay(&self) -> f64 {
        self.values[self.values.len() - 1]
    }

    /// Actuation delay rounded to whole physics steps.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn delay_steps(&self) -> u32 {
        self.delay().round().max(0.0) as u32
    }
}

impl ParamBounds {
    /// Draw one parameter vector uniformly within these bounds.
    ///
    /// A degenerate row (`min == max`) always yields that value. The caller
    /// is responsible for having [`validate`](Self::validate)d the bounds;
    /// sampling assumes `min <= max` on every row.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ParamVector {
        let values = self
            .rows()
            .iter()
            .map(|[min, max]| rng.gen_range(*min..=*max))
            .collect();
        ParamVector {
            values,
            joint_count: (self.len() - 1) / 4,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    #[test]
    fn samples_stay_within_bounds() {
        let bounds = ParamBounds::identification_default(12);
        let mut rng = rng();
        for _ in 0..50 {
            let v = bounds.sample(&mut rng);
            for (value, [min, max]) in v.values().iter().zip(bounds.rows()) {
                assert!(value >= min && value <= max, "got {value} for [{min}, {max}]");
            }
        }
    }

    #[test]
    fn block_accessors_slice_the_vector() {
        let bounds = ParamBounds::identification_default(12);
        let v = bounds.sample(&mut rng());
        assert_eq!(v.values().len(), 49);
        assert_eq!(v.armature().len(), 12);
        assert_eq!(v.damping().len(), 12);
        assert_eq!(v.friction().len(), 12);
        assert_eq!(v.encoder_bias().len(), 12);
        assert!(v.armature().iter().all(|a| (1e-5..=0.1).contains(a)));
        assert!(v.encoder_bias().iter().all(|b| (-0.1..=0.1).contains(b)));
    }

    #[test]
    fn delay_steps_rounds_to_whole_steps() {
        let bounds = ParamBounds::identification_default(12);
        let v = bounds.sample(&mut rng());
        assert!((0.0..=10.0).contains(&v.delay()));
        assert!(v.delay_steps() <= 10);
        assert!((f64::from(v.delay_steps()) - v.delay()).abs() <= 0.5);
    }

    #[test]
    fn degenerate_row_yields_fixed_value() {
        let mut bounds = ParamBounds::identification_default(12);
        bounds.set_block(ParamBlock::Delay, 3.0, 3.0, 12);
        let v = bounds.sample(&mut rng());
        assert!((v.delay() - 3.0).abs() < f64::EPSILON);
        assert_eq!(v.delay_steps(), 3);
    }

    #[test]
    fn deterministic_with_same_seed() {
        let bounds = ParamBounds::identification_default(12);
        let v1 = bounds.sample(&mut ChaCha8Rng::seed_from_u64(99));
        let v2 = bounds.sample(&mut ChaCha8Rng::seed_from_u64(99));
        let v3 = bounds.sample(&mut ChaCha8Rng::seed_from_u64(7));
        assert_eq!(v1, v2);
        assert_ne!(v1, v3);
    }

    #[test]
    fn biped_vector_has_25_values() {
        let bounds = ParamBounds::identification_default(6);
        let v = bounds.sample(&mut rng());
        assert_eq!(v.values().len(), 25);
        assert_eq!(v.armature().len(), 6);
    }
}
