//! In-memory robot model description.
//!
//! These types map one-to-one onto the fields the external articulation API
//! accepts: the asset reference and import flags, rigid-body caps, solver
//! iteration counts, the initial pose, and the actuator groups. The central
//! invariant lives in [`RobotModel::validate`]: every joint is driven by
//! exactly one actuator group.

use std::collections::{BTreeMap, HashSet};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use pace_actuator::motor::DcMotorSpec;
use pace_actuator::pace::PaceDcMotorSpec;
use pace_core::error::ConfigError;
use pace_core::pattern::JointPattern;

const fn default_true() -> bool {
    true
}
const fn default_velocity_cap() -> f64 {
    1000.0
}
const fn default_depenetration_velocity() -> f64 {
    1.0
}
const fn default_position_iterations() -> u32 {
    4
}
const fn default_orientation() -> [f64; 4] {
    [0.0, 0.0, 0.0, 1.0]
}
const fn default_soft_limit_factor() -> f64 {
    1.0
}

// ---------------------------------------------------------------------------
// RigidBodyProps
// ---------------------------------------------------------------------------

/// Rigid-body properties applied to every link of the articulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RigidBodyProps {
    #[serde(default)]
    pub disable_gravity: bool,

    #[serde(default)]
    pub retain_accelerations: bool,

    /// Linear velocity damping coefficient.
    #[serde(default)]
    pub linear_damping: f64,

    /// Angular velocity damping coefficient.
    #[serde(default)]
    pub angular_damping: f64,

    /// Linear velocity cap (m/s).
    #[serde(default = "default_velocity_cap")]
    pub max_linear_velocity: f64,

    /// Angular velocity cap (rad/s).
    #[serde(default = "default_velocity_cap")]
    pub max_angular_velocity: f64,

    /// Cap on the velocity used to resolve interpenetration (m/s).
    #[serde(default = "default_depenetration_velocity")]
    pub max_depenetration_velocity: f64,
}

impl Default for RigidBodyProps {
    fn default() -> Self {
        Self {
            disable_gravity: false,
            retain_accelerations: false,
            linear_damping: 0.0,
            angular_damping: 0.0,
            max_linear_velocity: default_velocity_cap(),
            max_angular_velocity: default_velocity_cap(),
            max_depenetration_velocity: default_depenetration_velocity(),
        }
    }
}

impl RigidBodyProps {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("linear_damping", self.linear_damping),
            ("angular_damping", self.angular_damping),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::invalid_value(
                    field,
                    format!("must be finite and >= 0, got {value}"),
                ));
            }
        }
        for (field, value) in [
            ("max_linear_velocity", self.max_linear_velocity),
            ("max_angular_velocity", self.max_angular_velocity),
            ("max_depenetration_velocity", self.max_depenetration_velocity),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::invalid_value(
                    field,
                    format!("must be finite and > 0, got {value}"),
                ));
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// ArticulationProps
// ---------------------------------------------------------------------------

/// Articulation-root solver properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticulationProps {
    #[serde(default)]
    pub enabled_self_collisions: bool,

    /// Position solver iterations per step.
    #[serde(default = "default_position_iterations")]
    pub solver_position_iteration_count: u32,

    /// Velocity solver iterations per step.
    #[serde(default)]
    pub solver_velocity_iteration_count: u32,
}

impl Default for ArticulationProps {
    fn default() -> Self {
        Self {
            enabled_self_collisions: false,
            solver_position_iteration_count: default_position_iterations(),
            solver_velocity_iteration_count: 0,
        }
    }
}

impl ArticulationProps {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.solver_position_iteration_count == 0 {
            return Err(ConfigError::invalid_value(
                "solver_position_iteration_count",
                "must be >= 1",
            ));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// JointInit
// ---------------------------------------------------------------------------

/// One pattern → value row of an initial joint position/velocity table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JointInit {
    pub pattern: JointPattern,
    pub value: f64,
}

impl JointInit {
    /// Compile `(pattern, value)` pairs into a table, in order.
    pub fn table(pairs: &[(&str, f64)]) -> Result<Vec<Self>, ConfigError> {
        pairs
            .iter()
            .map(|(pattern, value)| {
                Ok(Self {
                    pattern: JointPattern::new(*pattern)?,
                    value: *value,
                })
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// InitState
// ---------------------------------------------------------------------------

/// Initial pose of the articulation at reset.
///
/// Joint tables are ordered: a later pattern refines earlier ones, so
/// `"F[L,R]_thigh_joint"` can set the front thighs after `".*_thigh_joint"`
/// set all four. The last matching entry wins. Joints matched by no entry
/// start at zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitState {
    /// Base position [x, y, z] in meters.
    #[serde(default)]
    pub pos: [f64; 3],

    /// Base orientation quaternion [x, y, z, w].
    #[serde(default = "default_orientation")]
    pub rot: [f64; 4],

    /// Initial joint positions (rad).
    #[serde(default)]
    pub joint_pos: Vec<JointInit>,

    /// Initial joint velocities (rad/s).
    #[serde(default)]
    pub joint_vel: Vec<JointInit>,
}

impl Default for InitState {
    fn default() -> Self {
        Self {
            pos: [0.0; 3],
            rot: default_orientation(),
            joint_pos: Vec::new(),
            joint_vel: Vec::new(),
        }
    }
}

impl InitState {
    /// Initial position of `joint` (rad). Zero when no entry matches.
    #[must_use]
    pub fn joint_position(&self, joint: &str) -> f64 {
        Self::lookup(&self.joint_pos, joint)
    }

    /// Initial velocity of `joint` (rad/s). Zero when no entry matches.
    #[must_use]
    pub fn joint_velocity(&self, joint: &str) -> f64 {
        Self::lookup(&self.joint_vel, joint)
    }

    fn lookup(table: &[JointInit], joint: &str) -> f64 {
        table
            .iter()
            .rev()
            .find(|e| e.pattern.matches(joint))
            .map_or(0.0, |e| e.value)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pos.iter().any(|v| !v.is_finite()) {
            return Err(ConfigError::invalid_value("init_state.pos", "must be finite"));
        }
        let norm = self.rot.iter().map(|v| v * v).sum::<f64>().sqrt();
        if !norm.is_finite() || (norm - 1.0).abs() > 1e-6 {
            return Err(ConfigError::invalid_value(
                "init_state.rot",
                format!("must be a unit quaternion, got norm {norm}"),
            ));
        }
        for entry in self.joint_pos.iter().chain(&self.joint_vel) {
            if !entry.value.is_finite() {
                return Err(ConfigError::invalid_value(
                    "init_state",
                    format!("value for `{}` is not finite", entry.pattern),
                ));
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// ActuatorGroup
// ---------------------------------------------------------------------------

/// An actuator group attached to a robot model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActuatorGroup {
    /// Plain DC motor group.
    DcMotor(DcMotorSpec),
    /// DC motor group with encoder bias and delay, for identification runs.
    PaceDcMotor(PaceDcMotorSpec),
}

impl ActuatorGroup {
    /// The underlying motor specification.
    #[must_use]
    pub const fn motor(&self) -> &DcMotorSpec {
        match self {
            Self::DcMotor(spec) => spec,
            Self::PaceDcMotor(spec) => &spec.motor,
        }
    }

    /// The identification extension, if this group carries one.
    #[must_use]
    pub const fn as_pace(&self) -> Option<&PaceDcMotorSpec> {
        match self {
            Self::DcMotor(_) => None,
            Self::PaceDcMotor(spec) => Some(spec),
        }
    }

    /// Whether this group drives `joint`.
    #[must_use]
    pub fn drives(&self, joint: &str) -> bool {
        self.motor().drives(joint)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            Self::DcMotor(spec) => spec.validate(),
            Self::PaceDcMotor(spec) => spec.validate(),
        }
    }
}

// ---------------------------------------------------------------------------
// RobotModel
// ---------------------------------------------------------------------------

/// Full description of one robot variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RobotModel {
    /// Registry name of this robot.
    pub name: String,

    /// URDF asset reference, relative to the asset data directory.
    pub asset_path: PathBuf,

    /// Whether the base link is fixed to the world.
    #[serde(default)]
    pub fix_base: bool,

    /// Merge links connected by fixed joints during import.
    #[serde(default = "default_true")]
    pub merge_fixed_joints: bool,

    /// Replace cylinder collision shapes with capsules during import.
    #[serde(default)]
    pub replace_cylinders_with_capsules: bool,

    /// Create contact sensors on import.
    #[serde(default = "default_true")]
    pub activate_contact_sensors: bool,

    /// Scale applied to the URDF position limits to obtain soft limits,
    /// in `(0, 1]`.
    #[serde(default = "default_soft_limit_factor")]
    pub soft_joint_pos_limit_factor: f64,

    /// The articulation's actuated joints, in asset order.
    pub joint_names: Vec<String>,

    #[serde(default)]
    pub rigid_props: RigidBodyProps,

    #[serde(default)]
    pub articulation_props: ArticulationProps,

    #[serde(default)]
    pub init_state: InitState,

    /// Actuator groups by name. Every joint must be driven by exactly one
    /// group.
    pub actuators: BTreeMap<String, ActuatorGroup>,
}

impl RobotModel {
    /// Number of actuated joints.
    #[must_use]
    pub fn joint_count(&self) -> usize {
        self.joint_names.len()
    }

    /// The group driving `joint`, if any.
    #[must_use]
    pub fn actuator_for(&self, joint: &str) -> Option<(&str, &ActuatorGroup)> {
        self.actuators
            .iter()
            .find(|(_, group)| group.drives(joint))
            .map(|(name, group)| (name.as_str(), group))
    }

    /// Validate the complete model.
    ///
    /// Checks, in order: scalar fields, nested property records, actuator
    /// group parameters, then the structural invariants — exactly-once
    /// joint coverage, no dead pattern, per-joint gain availability, and
    /// encoder-bias length on identification groups.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.is_empty() {
            return Err(ConfigError::invalid_value("name", "must not be empty"));
        }
        if self.asset_path.as_os_str().is_empty() {
            return Err(ConfigError::invalid_value("asset_path", "must not be empty"));
        }
        if !(self.soft_joint_pos_limit_factor.is_finite()
            && self.soft_joint_pos_limit_factor > 0.0
            && self.soft_joint_pos_limit_factor <= 1.0)
        {
            return Err(ConfigError::invalid_value(
                "soft_joint_pos_limit_factor",
                format!("must be in (0, 1], got {}", self.soft_joint_pos_limit_factor),
            ));
        }
        if self.joint_names.is_empty() {
            return Err(ConfigError::invalid_value(
                "joint_names",
                "must list at least one joint",
            ));
        }
        let mut seen = HashSet::new();
        for joint in &self.joint_names {
            if !seen.insert(joint.as_str()) {
                return Err(ConfigError::invalid_value(
                    "joint_names",
                    format!("duplicate joint `{joint}`"),
                ));
            }
        }
        if self.actuators.is_empty() {
            return Err(ConfigError::invalid_value(
                "actuators",
                "must define at least one actuator group",
            ));
        }

        self.rigid_props.validate()?;
        self.articulation_props.validate()?;
        self.init_state.validate()?;
        for group in self.actuators.values() {
            group.validate()?;
        }

        self.validate_coverage()?;
        self.validate_patterns()?;
        self.validate_gains()?;
        self.validate_encoder_bias()
    }

    // Exactly-once coverage: no unmatched joint, no joint claimed by two
    // groups.
    fn validate_coverage(&self) -> Result<(), ConfigError> {
        for joint in &self.joint_names {
            let mut drivers = self
                .actuators
                .iter()
                .filter(|(_, group)| group.drives(joint))
                .map(|(name, _)| name.as_str());
            match (drivers.next(), drivers.next()) {
                (None, _) => return Err(ConfigError::UnactuatedJoint(joint.clone())),
                (Some(first), Some(second)) => {
                    return Err(ConfigError::DoublyActuatedJoint {
                        joint: joint.clone(),
                        first: first.into(),
                        second: second.into(),
                    });
                }
                (Some(_), None) => {}
            }
        }
        Ok(())
    }

    // Every pattern, in actuator groups and init tables, matches something.
    fn validate_patterns(&self) -> Result<(), ConfigError> {
        for (name, group) in &self.actuators {
            for pattern in &group.motor().joint_exprs {
                if !self.joint_names.iter().any(|j| pattern.matches(j)) {
                    return Err(ConfigError::DeadPattern {
                        pattern: pattern.as_str().into(),
                        context: format!("actuator group `{name}`"),
                    });
                }
            }
        }
        for (table, context) in [
            (&self.init_state.joint_pos, "init_state.joint_pos"),
            (&self.init_state.joint_vel, "init_state.joint_vel"),
        ] {
            for entry in table {
                if !self.joint_names.iter().any(|j| entry.pattern.matches(j)) {
                    return Err(ConfigError::DeadPattern {
                        pattern: entry.pattern.as_str().into(),
                        context: context.into(),
                    });
                }
            }
        }
        Ok(())
    }

    // A gain table must produce a value for every joint its group drives.
    fn validate_gains(&self) -> Result<(), ConfigError> {
        for (name, group) in &self.actuators {
            let motor = group.motor();
            for joint in self.joint_names.iter().filter(|j| group.drives(j)) {
                for (field, gains) in [("stiffness", &motor.stiffness), ("damping", &motor.damping)]
                {
                    if gains.value_for(joint).is_none() {
                        return Err(ConfigError::invalid_value(
                            field,
                            format!("no value for joint `{joint}` in group `{name}`"),
                        ));
                    }
                }
            }
        }
        Ok(())
    }

    // Encoder bias vectors are indexed by the robot's joint order.
    fn validate_encoder_bias(&self) -> Result<(), ConfigError> {
        for group in self.actuators.values() {
            if let Some(pace) = group.as_pace() {
                if pace.encoder_bias.len() != self.joint_names.len() {
                    return Err(ConfigError::EncoderBiasLength {
                        expected: self.joint_names.len(),
                        got: pace.encoder_bias.len(),
                    });
                }
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pace_actuator::gains::GainSpec;

    fn quadruped_joints() -> Vec<String> {
        let mut joints = Vec::new();
        for leg in ["FR", "FL", "RR", "RL"] {
            for part in ["hip", "thigh", "calf"] {
                joints.push(format!("{leg}_{part}_joint"));
            }
        }
        joints
    }

    fn leg_motor(exprs: &[&str]) -> DcMotorSpec {
        DcMotorSpec {
            joint_exprs: JointPattern::parse_all(exprs).unwrap(),
            effort_limit: 23.5,
            saturation_effort: 23.5,
            velocity_limit: 30.0,
            stiffness: GainSpec::Uniform(25.0),
            damping: GainSpec::Uniform(0.5),
            friction: 0.0,
        }
    }

    fn quadruped() -> RobotModel {
        let mut actuators = BTreeMap::new();
        actuators.insert(
            "base_legs".to_string(),
            ActuatorGroup::DcMotor(leg_motor(&[
                ".*_hip_joint",
                ".*_thigh_joint",
                ".*_calf_joint",
            ])),
        );
        RobotModel {
            name: "testdog".into(),
            asset_path: "Robots/test/testdog.urdf".into(),
            fix_base: false,
            merge_fixed_joints: true,
            replace_cylinders_with_capsules: false,
            activate_contact_sensors: true,
            rigid_props: RigidBodyProps::default(),
            articulation_props: ArticulationProps::default(),
            init_state: InitState {
                pos: [0.0, 0.0, 0.4],
                joint_pos: JointInit::table(&[
                    (".*L_hip_joint", 0.1),
                    (".*R_hip_joint", -0.1),
                    (".*_thigh_joint", 0.8),
                    (".*_calf_joint", -1.5),
                ])
                .unwrap(),
                joint_vel: JointInit::table(&[(".*", 0.0)]).unwrap(),
                ..InitState::default()
            },
            soft_joint_pos_limit_factor: 0.9,
            joint_names: quadruped_joints(),
            actuators,
        }
    }

    // -- Coverage invariant --

    #[test]
    fn valid_quadruped_passes() {
        assert!(quadruped().validate().is_ok());
    }

    #[test]
    fn uncovered_joint_rejected() {
        let mut robot = quadruped();
        robot.joint_names.push("L_wheel_joint".into());
        let err = robot.validate().unwrap_err();
        assert!(matches!(err, ConfigError::UnactuatedJoint(j) if j == "L_wheel_joint"));
    }

    #[test]
    fn doubly_driven_joint_rejected() {
        let mut robot = quadruped();
        robot.actuators.insert(
            "calf".into(),
            ActuatorGroup::DcMotor(leg_motor(&[".*_calf_joint"])),
        );
        let err = robot.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::DoublyActuatedJoint { joint, .. } if joint.ends_with("_calf_joint")
        ));
    }

    #[test]
    fn same_group_may_match_twice() {
        // Two patterns of one group overlapping is not double-driving.
        let mut robot = quadruped();
        robot.actuators.insert(
            "base_legs".into(),
            ActuatorGroup::DcMotor(leg_motor(&[".*_joint", ".*_calf_joint"])),
        );
        assert!(robot.validate().is_ok());
    }

    #[test]
    fn dead_actuator_pattern_rejected() {
        let mut robot = quadruped();
        robot.actuators.insert(
            "base_legs".into(),
            ActuatorGroup::DcMotor(leg_motor(&[".*_joint", ".*_wheel_joint"])),
        );
        let err = robot.validate().unwrap_err();
        assert!(matches!(err, ConfigError::DeadPattern { .. }));
    }

    #[test]
    fn dead_init_pattern_rejected() {
        let mut robot = quadruped();
        robot
            .init_state
            .joint_pos
            .extend(JointInit::table(&[("L_wheel_joint", 0.0)]).unwrap());
        let err = robot.validate().unwrap_err();
        assert!(
            matches!(err, ConfigError::DeadPattern { context, .. } if context.contains("joint_pos"))
        );
    }

    // -- Gains --

    #[test]
    fn missing_gain_for_driven_joint_rejected() {
        let mut robot = quadruped();
        let mut motor = leg_motor(&[".*_joint"]);
        motor.stiffness = GainSpec::PerPattern(vec![pace_actuator::gains::GainEntry {
            pattern: JointPattern::new(".*_hip_joint").unwrap(),
            value: 40.0,
        }]);
        robot
            .actuators
            .insert("base_legs".into(), ActuatorGroup::DcMotor(motor));
        let err = robot.validate().unwrap_err();
        assert!(err.to_string().contains("stiffness"));
    }

    // -- Encoder bias --

    #[test]
    fn encoder_bias_length_checked_against_joint_count() {
        let mut robot = quadruped();
        robot.actuators.insert(
            "base_legs".into(),
            ActuatorGroup::PaceDcMotor(PaceDcMotorSpec::with_zero_bias(
                leg_motor(&[".*_joint"]),
                6,
                10,
            )),
        );
        let err = robot.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::EncoderBiasLength {
                expected: 12,
                got: 6
            }
        ));
    }

    // -- Scalar fields --

    #[test]
    fn soft_limit_factor_must_be_in_unit_interval() {
        let mut robot = quadruped();
        robot.soft_joint_pos_limit_factor = 1.5;
        assert!(robot.validate().is_err());
        robot.soft_joint_pos_limit_factor = 0.0;
        assert!(robot.validate().is_err());
    }

    #[test]
    fn duplicate_joint_name_rejected() {
        let mut robot = quadruped();
        robot.joint_names[1] = robot.joint_names[0].clone();
        assert!(robot.validate().is_err());
    }

    #[test]
    fn non_unit_quaternion_rejected() {
        let mut robot = quadruped();
        robot.init_state.rot = [0.0, 0.0, 0.0, 2.0];
        assert!(robot.validate().is_err());
    }

    // -- Lookup --

    #[test]
    fn init_state_last_match_wins() {
        let state = InitState {
            joint_pos: JointInit::table(&[
                (".*_thigh_joint", 0.8),
                ("R[L,R]_thigh_joint", 1.0),
            ])
            .unwrap(),
            ..InitState::default()
        };
        assert!((state.joint_position("FL_thigh_joint") - 0.8).abs() < f64::EPSILON);
        assert!((state.joint_position("RL_thigh_joint") - 1.0).abs() < f64::EPSILON);
        assert!((state.joint_position("FL_hip_joint") - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn actuator_for_reports_driving_group() {
        let robot = quadruped();
        let (name, _) = robot.actuator_for("FL_hip_joint").unwrap();
        assert_eq!(name, "base_legs");
        assert!(robot.actuator_for("L_wheel_joint").is_none());
    }

    // -- Serde --

    #[test]
    fn toml_roundtrip() {
        let robot = quadruped();
        let text = toml::to_string(&robot).unwrap();
        let back: RobotModel = toml::from_str(&text).unwrap();
        assert_eq!(back, robot);
    }
}
