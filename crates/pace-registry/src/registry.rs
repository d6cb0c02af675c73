//! The configuration registry.
//!
//! Definition order follows the dependency chain: robots and tasks first,
//! then environments composing the two registered under the same name.
//! Every `define_*` call validates before storing; `resolve` is pure
//! lookup.

use std::collections::BTreeMap;

use pace_assets::articulation::RobotModel;
use pace_assets::{robots, tasks};
use pace_core::error::{ConfigError, NotFoundError, PaceError};
use pace_core::sim::SimSettings;
use pace_task::config::PaceTaskConfig;

use crate::environment::EnvironmentConfig;

// ---------------------------------------------------------------------------
// ConfigRegistry
// ---------------------------------------------------------------------------

/// Named store of validated robots, identification tasks, and composed
/// environments.
#[derive(Debug, Clone, Default)]
pub struct ConfigRegistry {
    robots: BTreeMap<String, RobotModel>,
    tasks: BTreeMap<String, PaceTaskConfig>,
    environments: BTreeMap<String, EnvironmentConfig>,
}

impl ConfigRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry preloaded with the built-in catalog: environments `go2`
    /// (400 Hz control) and `bigreddog` (200 Hz), plus the pineapple biped
    /// robots (which have no identification task, hence no environment).
    pub fn builtin() -> Result<Self, PaceError> {
        let mut registry = Self::new();

        registry.define_robot(robots::go2()?)?;
        registry.define_robot(robots::bigreddog()?)?;
        registry.define_robot(robots::pineapple_v0()?)?;
        registry.define_robot(robots::pineapple_v1()?)?;

        registry.define_task(tasks::go2())?;
        registry.define_task(tasks::bigreddog())?;

        registry.define_env("go2", SimSettings::new(0.0025, 1))?;
        registry.define_env("bigreddog", SimSettings::new(0.005, 1))?;

        Ok(registry)
    }

    // -- Definition ---------------------------------------------------------

    /// Validate and store a robot model under its own name.
    pub fn define_robot(&mut self, robot: RobotModel) -> Result<(), ConfigError> {
        robot.validate()?;
        if self.robots.contains_key(&robot.name) {
            return Err(ConfigError::Duplicate(robot.name));
        }
        self.robots.insert(robot.name.clone(), robot);
        Ok(())
    }

    /// Validate and store an identification task under its robot's name.
    pub fn define_task(&mut self, task: PaceTaskConfig) -> Result<(), ConfigError> {
        task.validate()?;
        if self.tasks.contains_key(&task.robot_name) {
            return Err(ConfigError::Duplicate(task.robot_name));
        }
        self.tasks.insert(task.robot_name.clone(), task);
        Ok(())
    }

    /// Compose the robot and task registered under `name` into an
    /// environment with the given timing, cross-validate, and store it.
    pub fn define_env(&mut self, name: &str, sim: SimSettings) -> Result<(), PaceError> {
        if self.environments.contains_key(name) {
            return Err(ConfigError::Duplicate(name.into()).into());
        }
        let robot = self.robot(name)?.clone();
        let task = self.task(name)?.clone();
        let env = EnvironmentConfig::new(name, sim, robot, task)?;
        self.environments.insert(name.into(), env);
        Ok(())
    }

    // -- Lookup -------------------------------------------------------------

    /// The composed environment registered under `name`.
    pub fn resolve(&self, name: &str) -> Result<&EnvironmentConfig, NotFoundError> {
        self.environments
            .get(name)
            .ok_or_else(|| NotFoundError(name.into()))
    }

    /// The robot model registered under `name`.
    pub fn robot(&self, name: &str) -> Result<&RobotModel, NotFoundError> {
        self.robots.get(name).ok_or_else(|| NotFoundError(name.into()))
    }

    /// The identification task registered under `name`.
    pub fn task(&self, name: &str) -> Result<&PaceTaskConfig, NotFoundError> {
        self.tasks.get(name).ok_or_else(|| NotFoundError(name.into()))
    }

    /// Names of all registered robots, sorted.
    pub fn robot_names(&self) -> impl Iterator<Item = &str> {
        self.robots.keys().map(String::as_str)
    }

    /// Names of all registered environments, sorted.
    pub fn environment_names(&self) -> impl Iterator<Item = &str> {
        self.environments.keys().map(String::as_str)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
