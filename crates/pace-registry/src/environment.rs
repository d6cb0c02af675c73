//! Composed environment configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use pace_assets::articulation::RobotModel;
use pace_core::error::ConfigError;
use pace_core::sim::SimSettings;
use pace_task::config::PaceTaskConfig;

// ---------------------------------------------------------------------------
// EnvironmentConfig
// ---------------------------------------------------------------------------

/// One fully composed, validated environment: timing, robot, and
/// identification task.
///
/// Constructed once at environment setup and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    /// Registry name of this environment.
    pub name: String,

    pub sim: SimSettings,

    pub robot: RobotModel,

    pub task: PaceTaskConfig,
}

impl EnvironmentConfig {
    /// Compose and validate an environment.
    pub fn new(
        name: impl Into<String>,
        sim: SimSettings,
        robot: RobotModel,
        task: PaceTaskConfig,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            name: name.into(),
            sim,
            robot,
            task,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate each part and their cross-consistency: the task must name
    /// this robot, and its joint order must be a permutation of the robot's
    /// joint set.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.is_empty() {
            return Err(ConfigError::invalid_value("name", "must not be empty"));
        }
        self.sim.validate()?;
        self.robot.validate()?;
        self.task.validate()?;

        if self.task.robot_name != self.robot.name {
            return Err(ConfigError::invalid_value(
                "task.robot_name",
                format!(
                    "task identifies `{}` but the robot is `{}`",
                    self.task.robot_name, self.robot.name
                ),
            ));
        }
        self.validate_joint_order()
    }

    fn validate_joint_order(&self) -> Result<(), ConfigError> {
        let mismatch = |detail: String| ConfigError::JointOrderMismatch {
            robot: self.robot.name.clone(),
            detail,
        };
        if self.task.joint_order.len() != self.robot.joint_names.len() {
            return Err(mismatch(format!(
                "task orders {} joints, robot has {}",
                self.task.joint_order.len(),
                self.robot.joint_names.len()
            )));
        }
        for joint in &self.task.joint_order {
            if !self.robot.joint_names.contains(joint) {
                return Err(mismatch(format!("`{joint}` is not a robot joint")));
            }
        }
        // Same length, all members present, and the robot's names are
        // unique, so the order is a permutation.
        Ok(())
    }

    /// Serialize to TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    /// Parse from TOML and validate.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file and validate.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: PathBuf::from(path),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
