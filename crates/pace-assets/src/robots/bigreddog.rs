//! CSL BigRedDog quadruped, configured for identification runs.

use std::collections::BTreeMap;

use pace_actuator::gains::GainSpec;
use pace_actuator::motor::DcMotorSpec;
use pace_actuator::pace::PaceDcMotorSpec;
use pace_core::error::ConfigError;
use pace_core::pattern::JointPattern;

use crate::articulation::{
    ActuatorGroup, ArticulationProps, InitState, JointInit, RigidBodyProps, RobotModel,
};

/// Joint ordering used by the bigreddog identification data (front-left
/// first).
pub const BIGREDDOG_JOINT_ORDER: [&str; 12] = [
    "FL_hip_joint",
    "FL_thigh_joint",
    "FL_calf_joint",
    "FR_hip_joint",
    "FR_thigh_joint",
    "FR_calf_joint",
    "RL_hip_joint",
    "RL_thigh_joint",
    "RL_calf_joint",
    "RR_hip_joint",
    "RR_thigh_joint",
    "RR_calf_joint",
];

/// The BigRedDog robot model.
pub fn bigreddog() -> Result<RobotModel, ConfigError> {
    let pace_actuator = PaceDcMotorSpec::with_zero_bias(
        DcMotorSpec {
            joint_exprs: JointPattern::parse_all(&[
                ".*_hip_joint",
                ".*_thigh_joint",
                ".*_calf_joint",
            ])?,
            effort_limit: 80.0,
            saturation_effort: 80.0,
            velocity_limit: 20.0,
            stiffness: GainSpec::for_all(40.0)?,
            damping: GainSpec::for_all(3.0)?,
            friction: 0.0,
        },
        BIGREDDOG_JOINT_ORDER.len(),
        10,
    );

    let mut actuators = BTreeMap::new();
    actuators.insert("base_legs".into(), ActuatorGroup::PaceDcMotor(pace_actuator));

    Ok(RobotModel {
        name: "bigreddog".into(),
        asset_path: "Robots/csl/bigreddog/urdf/bigreddog.urdf".into(),
        fix_base: false,
        merge_fixed_joints: true,
        replace_cylinders_with_capsules: false,
        activate_contact_sensors: true,
        rigid_props: RigidBodyProps::default(),
        articulation_props: ArticulationProps::default(),
        init_state: InitState {
            pos: [0.0, 0.0, 1.0],
            joint_pos: JointInit::table(&[
                (".*L_hip_joint", 0.1),
                (".*R_hip_joint", -0.1),
                ("FL_thigh_joint", 0.4),
                ("R[L,R]_thigh_joint", -0.4),
                ("F[L,R]_calf_joint", -1.0),
                ("R[L,R]_calf_joint", 1.0),
            ])?,
            joint_vel: JointInit::table(&[(".*", 0.0)])?,
            ..InitState::default()
        },
        soft_joint_pos_limit_factor: 0.9,
        joint_names: BIGREDDOG_JOINT_ORDER
            .iter()
            .map(ToString::to_string)
            .collect(),
        actuators,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bigreddog_validates() {
        assert!(bigreddog().unwrap().validate().is_ok());
    }

    #[test]
    fn identification_group_parameters() {
        let robot = bigreddog().unwrap();
        let pace = robot.actuators["base_legs"].as_pace().unwrap();
        assert!((pace.motor.effort_limit - 80.0).abs() < f64::EPSILON);
        assert!((pace.motor.saturation_effort - 80.0).abs() < f64::EPSILON);
        assert!((pace.motor.velocity_limit - 20.0).abs() < f64::EPSILON);
        assert_eq!(pace.encoder_bias.len(), 12);
        assert_eq!(pace.max_delay, 10);
    }

    #[test]
    fn init_pose_per_joint() {
        let state = bigreddog().unwrap().init_state;
        assert!((state.joint_position("FL_thigh_joint") - 0.4).abs() < f64::EPSILON);
        // FR thigh is named by no entry and starts at zero.
        assert!((state.joint_position("FR_thigh_joint") - 0.0).abs() < f64::EPSILON);
        assert!((state.joint_position("RL_thigh_joint") - (-0.4)).abs() < f64::EPSILON);
        assert!((state.joint_position("FR_calf_joint") - (-1.0)).abs() < f64::EPSILON);
        assert!((state.joint_position("RR_calf_joint") - 1.0).abs() < f64::EPSILON);
    }
}
