//! Parameter bounds for the identification task.
//!
//! For a robot with `n` joints the matrix has `4n + 1` rows of `[min, max]`:
//! four contiguous per-joint blocks — armature, joint damping, joint
//! friction, encoder bias — followed by one scalar row for the actuation
//! delay. For the 12-joint quadrupeds (3 joints × 4 legs) that is 49 rows.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use pace_core::error::ConfigError;

// ---------------------------------------------------------------------------
// ParamBlock
// ---------------------------------------------------------------------------

/// One block of the bounds matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamBlock {
    /// Rotor armature (kg·m²), one row per joint.
    Armature,
    /// Viscous joint damping (Nm·s/rad), one row per joint.
    Damping,
    /// Coulomb joint friction (Nm), one row per joint.
    Friction,
    /// Encoder bias (rad), one row per joint.
    EncoderBias,
    /// Actuation delay (physics steps), single row.
    Delay,
}

impl ParamBlock {
    /// All blocks in matrix order.
    pub const ALL: [Self; 5] = [
        Self::Armature,
        Self::Damping,
        Self::Friction,
        Self::EncoderBias,
        Self::Delay,
    ];

    /// Row range of this block for a robot with `joint_count` joints.
    #[must_use]
    pub const fn rows(self, joint_count: usize) -> Range<usize> {
        let n = joint_count;
        match self {
            Self::Armature => 0..n,
            Self::Damping => n..2 * n,
            Self::Friction => 2 * n..3 * n,
            Self::EncoderBias => 3 * n..4 * n,
            Self::Delay => 4 * n..4 * n + 1,
        }
    }
}

// ---------------------------------------------------------------------------
// ParamBounds
// ---------------------------------------------------------------------------

/// The `(4n + 1, 2)` bounds matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParamBounds {
    rows: Vec<[f64; 2]>,
}

impl ParamBounds {
    /// Expected row count for a robot with `joint_count` joints.
    #[must_use]
    pub const fn expected_rows(joint_count: usize) -> usize {
        4 * joint_count + 1
    }

    /// An all-zero bounds matrix for `joint_count` joints.
    #[must_use]
    pub fn zeros(joint_count: usize) -> Self {
        Self {
            rows: vec![[0.0, 0.0]; Self::expected_rows(joint_count)],
        }
    }

    /// The standard identification bounds used for the quadrupeds:
    /// armature `[1e-5, 0.1]` kg·m², damping `[0, 0.7]` Nm·s/rad, friction
    /// `[0, 0.5]` Nm, encoder bias `[-0.1, 0.1]` rad, delay `[0, 10]` steps.
    #[must_use]
    pub fn identification_default(joint_count: usize) -> Self {
        let mut bounds = Self::zeros(joint_count);
        bounds.set_block(ParamBlock::Armature, 1e-5, 0.1, joint_count);
        bounds.set_block(ParamBlock::Damping, 0.0, 0.7, joint_count);
        bounds.set_block(ParamBlock::Friction, 0.0, 0.5, joint_count);
        bounds.set_block(ParamBlock::EncoderBias, -0.1, 0.1, joint_count);
        bounds.set_block(ParamBlock::Delay, 0.0, 10.0, joint_count);
        bounds
    }

    /// Build from raw rows. Shape and ordering are checked by
    /// [`validate`](Self::validate).
    #[must_use]
    pub fn from_rows(rows: Vec<[f64; 2]>) -> Self {
        Self { rows }
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the matrix has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows as `[min, max]` pairs.
    #[must_use]
    pub fn rows(&self) -> &[[f64; 2]] {
        &self.rows
    }

    /// One row.
    #[must_use]
    pub fn row(&self, index: usize) -> [f64; 2] {
        self.rows[index]
    }

    /// The rows of one block.
    #[must_use]
    pub fn block(&self, block: ParamBlock, joint_count: usize) -> &[[f64; 2]] {
        &self.rows[block.rows(joint_count)]
    }

    /// Set every row of a block to `[min, max]`.
    pub fn set_block(&mut self, block: ParamBlock, min: f64, max: f64, joint_count: usize) {
        for row in &mut self.rows[block.rows(joint_count)] {
            *row = [min, max];
        }
    }

    /// Validate shape (`4 * joint_count + 1` rows), finiteness, and row
    /// ordering (`min <= max`).
    pub fn validate(&self, joint_count: usize) -> Result<(), ConfigError> {
        let expected = Self::expected_rows(joint_count);
        if self.rows.len() != expected {
            return Err(ConfigError::BoundsShape {
                expected,
                got: self.rows.len(),
            });
        }
        for (index, [min, max]) in self.rows.iter().enumerate() {
            if !min.is_finite() || !max.is_finite() {
                return Err(ConfigError::invalid_value(
                    "bounds",
                    format!("row {index} is not finite: [{min}, {max}]"),
                ));
            }
            if min > max {
                return Err(ConfigError::InvertedBounds {
                    row: index,
                    min: *min,
                    max: *max,
                });
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
