//! CSL Pineapple wheeled bipeds.
//!
//! Two hardware revisions: v0 has thigh/calf/wheel per side, v1 adds hip
//! abduction. The wheels are continuous joints driven in pure velocity mode
//! (zero stiffness), so these models use plain DC motor groups rather than
//! identification groups.

use std::collections::BTreeMap;

use pace_actuator::gains::GainSpec;
use pace_actuator::motor::DcMotorSpec;
use pace_core::error::ConfigError;
use pace_core::pattern::JointPattern;

use crate::articulation::{
    ActuatorGroup, ArticulationProps, InitState, JointInit, RigidBodyProps, RobotModel,
};

fn leg_group(
    exprs: &[&str],
    effort: f64,
    velocity: f64,
    stiffness: f64,
    damping: f64,
) -> Result<ActuatorGroup, ConfigError> {
    Ok(ActuatorGroup::DcMotor(DcMotorSpec {
        joint_exprs: JointPattern::parse_all(exprs)?,
        effort_limit: effort,
        saturation_effort: effort,
        velocity_limit: velocity,
        stiffness: GainSpec::Uniform(stiffness),
        damping: GainSpec::Uniform(damping),
        friction: 0.0,
    }))
}

/// The Pineapple v0 robot model (no hip joints).
pub fn pineapple_v0() -> Result<RobotModel, ConfigError> {
    let mut actuators = BTreeMap::new();
    actuators.insert(
        "thigh".into(),
        leg_group(&["L_thigh_joint", "R_thigh_joint"], 23.7, 30.1, 25.0, 0.5)?,
    );
    actuators.insert(
        "calf".into(),
        leg_group(&["L_calf_joint", "R_calf_joint"], 23.7, 30.1, 25.0, 0.5)?,
    );
    actuators.insert(
        "wheel".into(),
        leg_group(&["L_wheel_joint", "R_wheel_joint"], 3.69, 30.0, 0.0, 0.3)?,
    );

    Ok(RobotModel {
        name: "pineapple_v0".into(),
        asset_path: "Robots/csl/pineapplev0_description/urdf/quick_bipedal.urdf".into(),
        fix_base: false,
        merge_fixed_joints: true,
        replace_cylinders_with_capsules: false,
        activate_contact_sensors: true,
        rigid_props: RigidBodyProps::default(),
        articulation_props: ArticulationProps::default(),
        init_state: InitState {
            pos: [0.0, 0.0, 0.4],
            joint_pos: JointInit::table(&[
                ("L_thigh_joint", 1.401),
                ("L_calf_joint", -2.0717),
                ("L_wheel_joint", 0.0),
                ("R_thigh_joint", 1.401),
                ("R_calf_joint", -2.0717),
                ("R_wheel_joint", 0.0),
            ])?,
            joint_vel: JointInit::table(&[(".*", 0.0)])?,
            ..InitState::default()
        },
        soft_joint_pos_limit_factor: 0.9,
        joint_names: [
            "L_thigh_joint",
            "L_calf_joint",
            "L_wheel_joint",
            "R_thigh_joint",
            "R_calf_joint",
            "R_wheel_joint",
        ]
        .iter()
        .map(ToString::to_string)
        .collect(),
        actuators,
    })
}

/// The Pineapple v1 robot model (adds hip abduction).
pub fn pineapple_v1() -> Result<RobotModel, ConfigError> {
    let mut actuators = BTreeMap::new();
    actuators.insert(
        "hip".into(),
        leg_group(&["L_hip_joint", "R_hip_joint"], 23.7, 30.1, 25.0, 0.5)?,
    );
    actuators.insert(
        "thigh".into(),
        leg_group(&["L_thigh_joint", "R_thigh_joint"], 23.7, 30.1, 25.0, 0.5)?,
    );
    actuators.insert(
        "calf".into(),
        leg_group(&["L_calf_joint", "R_calf_joint"], 33.5, 21.0, 25.0, 0.5)?,
    );
    actuators.insert(
        "wheel".into(),
        leg_group(&["L_wheel_joint", "R_wheel_joint"], 3.69, 30.0, 0.0, 0.3)?,
    );

    Ok(RobotModel {
        name: "pineapple_v1".into(),
        asset_path: "Robots/csl/pineapple/urdf/pineapple.urdf".into(),
        fix_base: false,
        merge_fixed_joints: true,
        replace_cylinders_with_capsules: false,
        activate_contact_sensors: true,
        rigid_props: RigidBodyProps::default(),
        articulation_props: ArticulationProps::default(),
        init_state: InitState {
            pos: [0.0, 0.0, 0.3],
            joint_pos: JointInit::table(&[
                ("L_hip_joint", 0.0),
                ("L_thigh_joint", 1.2533),
                ("L_calf_joint", -2.0479),
                ("L_wheel_joint", 0.0),
                ("R_hip_joint", 0.0),
                ("R_thigh_joint", 1.2533),
                ("R_calf_joint", -2.0479),
                ("R_wheel_joint", 0.0),
            ])?,
            joint_vel: JointInit::table(&[(".*", 0.0)])?,
            ..InitState::default()
        },
        soft_joint_pos_limit_factor: 0.9,
        joint_names: [
            "L_hip_joint",
            "L_thigh_joint",
            "L_calf_joint",
            "L_wheel_joint",
            "R_hip_joint",
            "R_thigh_joint",
            "R_calf_joint",
            "R_wheel_joint",
        ]
        .iter()
        .map(ToString::to_string)
        .collect(),
        actuators,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
