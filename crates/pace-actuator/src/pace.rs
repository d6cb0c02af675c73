//! Actuator group for the identification environment.
//!
//! Extends [`DcMotorSpec`] with the two quantities the identification
//! procedure optimizes over: a per-joint encoder bias vector and the
//! maximum simulated actuation delay. The delay/noise runtime itself lives
//! in the external framework; this record only parameterizes it.

use serde::{Deserialize, Serialize};

use pace_core::error::ConfigError;

use crate::motor::DcMotorSpec;

// ---------------------------------------------------------------------------
// PaceDcMotorSpec
// ---------------------------------------------------------------------------

/// A DC motor group with encoder bias and actuation delay, for system
/// identification runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaceDcMotorSpec {
    #[serde(flatten)]
    pub motor: DcMotorSpec,

    /// Encoder bias per joint (rad), indexed by the robot's joint order.
    /// Length must equal the robot's joint count.
    pub encoder_bias: Vec<f64>,

    /// Maximum simulated actuation delay in physics steps.
    pub max_delay: u32,
}

impl PaceDcMotorSpec {
    /// An identification group with zeroed encoder bias for `joint_count`
    /// joints.
    #[must_use]
    pub fn with_zero_bias(motor: DcMotorSpec, joint_count: usize, max_delay: u32) -> Self {
        Self {
            motor,
            encoder_bias: vec![0.0; joint_count],
            max_delay,
        }
    }

    /// Validate the motor parameters and the bias vector values.
    ///
    /// The bias *length* is checked against the robot's joint count when the
    /// robot model is validated; here only the values themselves are
    /// checked.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.motor.validate()?;
        if let Some(bad) = self.encoder_bias.iter().find(|b| !b.is_finite()) {
            return Err(ConfigError::invalid_value(
                "encoder_bias",
                format!("must be finite, got {bad}"),
            ));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
