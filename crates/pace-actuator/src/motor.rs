//! DC motor actuator group specification.

use serde::{Deserialize, Serialize};

use pace_core::error::ConfigError;
use pace_core::pattern::JointPattern;

use crate::gains::GainSpec;

// ---------------------------------------------------------------------------
// DcMotorSpec
// ---------------------------------------------------------------------------

/// One actuator group: the joints it drives and the motor parameters the
/// articulation API applies to them.
///
/// `effort_limit` caps the commanded torque; `saturation_effort` is the peak
/// of the motor's torque-speed curve and can never be below the effort
/// limit. `velocity_limit` is the no-load speed at which available torque
/// reaches zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DcMotorSpec {
    /// Patterns selecting the joints this group drives.
    pub joint_exprs: Vec<JointPattern>,

    /// Torque command limit (Nm).
    pub effort_limit: f64,

    /// Peak torque of the torque-speed curve (Nm).
    pub saturation_effort: f64,

    /// No-load speed (rad/s).
    pub velocity_limit: f64,

    /// Coulomb friction torque (Nm).
    #[serde(default)]
    pub friction: f64,

    /// P gain (Nm/rad).
    pub stiffness: GainSpec,

    /// D gain (Nm·s/rad).
    pub damping: GainSpec,
}

impl DcMotorSpec {
    /// Whether any of this group's patterns matches `joint`.
    #[must_use]
    pub fn drives(&self, joint: &str) -> bool {
        self.joint_exprs.iter().any(|p| p.matches(joint))
    }

    /// Validate limits and gains.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.joint_exprs.is_empty() {
            return Err(ConfigError::invalid_value(
                "joint_exprs",
                "an actuator group must name at least one joint pattern",
            ));
        }
        for (field, value) in [
            ("effort_limit", self.effort_limit),
            ("saturation_effort", self.saturation_effort),
            ("velocity_limit", self.velocity_limit),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::invalid_value(
                    field,
                    format!("must be finite and > 0, got {value}"),
                ));
            }
        }
        if self.saturation_effort < self.effort_limit {
            return Err(ConfigError::invalid_value(
                "saturation_effort",
                format!(
                    "must be >= effort_limit ({} < {})",
                    self.saturation_effort, self.effort_limit
                ),
            ));
        }
        if !self.friction.is_finite() || self.friction < 0.0 {
            return Err(ConfigError::invalid_value(
                "friction",
                format!("must be finite and >= 0, got {}", self.friction),
            ));
        }
        self.stiffness.validate("stiffness")?;
        self.damping.validate("damping")?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
