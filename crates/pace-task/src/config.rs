//! Per-robot identification task configuration.

use std::collections::HashSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use pace_core::error::ConfigError;

use crate::bounds::ParamBounds;

// ---------------------------------------------------------------------------
// PaceTaskConfig
// ---------------------------------------------------------------------------

/// Tunable-parameter bounds and joint ordering for one robot's
/// identification run.
///
/// `joint_order` is the explicit index-to-joint mapping: row `i` of each
/// per-joint bounds block, and entry `i` of every sampled parameter vector,
/// refer to `joint_order[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaceTaskConfig {
    /// Robot this task identifies; must match a registered robot model.
    pub robot_name: String,

    /// Recorded chirp excitation data consumed by the external optimizer,
    /// relative to the data directory (e.g. `go2/chirp_data_400302.pt`).
    pub data_dir: PathBuf,

    /// Index-to-joint mapping for bounds rows and parameter vectors.
    pub joint_order: Vec<String>,

    /// The `(4 * joints + 1, 2)` bounds matrix.
    pub bounds: ParamBounds,
}

impl PaceTaskConfig {
    /// A task with the standard identification bounds for the given joint
    /// order.
    pub fn with_default_bounds(
        robot_name: impl Into<String>,
        data_dir: impl Into<PathBuf>,
        joint_order: Vec<String>,
    ) -> Self {
        let bounds = ParamBounds::identification_default(joint_order.len());
        Self {
            robot_name: robot_name.into(),
            data_dir: data_dir.into(),
            joint_order,
            bounds,
        }
    }

    /// Number of joints in the task's ordering.
    #[must_use]
    pub fn joint_count(&self) -> usize {
        self.joint_order.len()
    }

    /// Validate the joint ordering and the bounds matrix against it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.robot_name.is_empty() {
            return Err(ConfigError::invalid_value("robot_name", "must not be empty"));
        }
        if self.joint_order.is_empty() {
            return Err(ConfigError::invalid_value(
                "joint_order",
                "must list at least one joint",
            ));
        }
        let mut seen = HashSet::new();
        for joint in &self.joint_order {
            if !seen.insert(joint.as_str()) {
                return Err(ConfigError::invalid_value(
                    "joint_order",
                    format!("duplicate joint `{joint}`"),
                ));
            }
        }
        self.bounds.validate(self.joint_order.len())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::ParamBlock;

    fn quadruped_joints() -> Vec<String> {
        let mut joints = Vec::new();
        for leg in ["FR", "FL", "RR", "RL"] {
            for part in ["hip", "thigh", "calf"] {
                joints.push(format!("{leg}_{part}_joint"));
            }
        }
        joints
    }

    fn task() -> PaceTaskConfig {
        PaceTaskConfig::with_default_bounds("go2", "go2/chirp_data.pt", quadruped_joints())
    }

    #[test]
    fn default_bounds_match_joint_count() {
        let t = task();
        assert_eq!(t.joint_count(), 12);
        assert_eq!(t.bounds.len(), 49);
        assert!(t.validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_joint_order() {
        let t = PaceTaskConfig::with_default_bounds("go2", "go2/chirp_data.pt", Vec::new());
        assert!(t.validate().is_err());
    }

    #[test]
    fn validate_rejects_duplicate_joint() {
        let mut t = task();
        t.joint_order[1] = t.joint_order[0].clone();
        let err = t.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn validate_rejects_bounds_joint_mismatch() {
        let mut t = task();
        t.joint_order.pop();
        let err = t.validate().unwrap_err();
        assert!(matches!(err, ConfigError::BoundsShape { .. }));
    }

    #[test]
    fn validate_rejects_empty_robot_name() {
        let mut t = task();
        t.robot_name.clear();
        assert!(t.validate().is_err());
    }

    #[test]
    fn bounds_blocks_reachable_through_task() {
        let t = task();
        let n = t.joint_count();
        assert_eq!(t.bounds.block(ParamBlock::Armature, n)[0], [1e-5, 0.1]);
    }

    // -- Serde --

    #[test]
    fn toml_roundtrip() {
        let t = task();
        let text = toml::to_string(&t).unwrap();
        let back: PaceTaskConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, t);
    }
}
