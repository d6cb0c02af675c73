//! Unitree Go2 quadruped, configured for identification runs.
//!
//! 12 joints (hip/thigh/calf on four legs), one `base_legs` identification
//! actuator group at 40/3 PD gains, base dropped from 1 m so the legs swing
//! freely during the chirp excitation.

use std::collections::BTreeMap;

use pace_actuator::gains::GainSpec;
use pace_actuator::motor::DcMotorSpec;
use pace_actuator::pace::PaceDcMotorSpec;
use pace_core::error::ConfigError;
use pace_core::pattern::JointPattern;

use crate::articulation::{
    ActuatorGroup, ArticulationProps, InitState, JointInit, RigidBodyProps, RobotModel,
};

/// Joint ordering used by the go2 identification data (front-right first).
pub const GO2_JOINT_ORDER: [&str; 12] = [
    "FR_hip_joint",
    "FR_thigh_joint",
    "FR_calf_joint",
    "FL_hip_joint",
    "FL_thigh_joint",
    "FL_calf_joint",
    "RR_hip_joint",
    "RR_thigh_joint",
    "RR_calf_joint",
    "RL_hip_joint",
    "RL_thigh_joint",
    "RL_calf_joint",
];

/// The Go2 robot model.
pub fn go2() -> Result<RobotModel, ConfigError> {
    let pace_actuator = PaceDcMotorSpec::with_zero_bias(
        DcMotorSpec {
            joint_exprs: JointPattern::parse_all(&[
                ".*_hip_joint",
                ".*_thigh_joint",
                ".*_calf_joint",
            ])?,
            effort_limit: 23.5,
            saturation_effort: 23.5,
            velocity_limit: 30.0,
            stiffness: GainSpec::for_all(40.0)?,
            damping: GainSpec::for_all(3.0)?,
            friction: 0.0,
        },
        GO2_JOINT_ORDER.len(),
        10,
    );

    let mut actuators = BTreeMap::new();
    actuators.insert("base_legs".into(), ActuatorGroup::PaceDcMotor(pace_actuator));

    Ok(RobotModel {
        name: "go2".into(),
        asset_path: "Robots/unitree/go2_description/urdf/go2.urdf".into(),
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
                ("F[L,R]_thigh_joint", 0.8),
                ("R[L,R]_thigh_joint", 1.0),
                (".*_calf_joint", -1.5),
            ])?,
            joint_vel: JointInit::table(&[(".*", 0.0)])?,
            ..InitState::default()
        },
        soft_joint_pos_limit_factor: 0.9,
        joint_names: GO2_JOINT_ORDER.iter().map(ToString::to_string).collect(),
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
    fn go2_validates() {
        assert!(go2().unwrap().validate().is_ok());
    }

    #[test]
    fn twelve_joints_all_driven_by_base_legs() {
        let robot = go2().unwrap();
        assert_eq!(robot.joint_count(), 12);
        for joint in &robot.joint_names {
            let (name, _) = robot.actuator_for(joint).unwrap();
            assert_eq!(name, "base_legs");
        }
    }

    #[test]
    fn identification_group_parameters() {
        let robot = go2().unwrap();
        let pace = robot.actuators["base_legs"].as_pace().unwrap();
        assert!((pace.motor.effort_limit - 23.5).abs() < f64::EPSILON);
        assert!((pace.motor.velocity_limit - 30.0).abs() < f64::EPSILON);
        assert_eq!(pace.motor.stiffness.value_for("FL_hip_joint"), Some(40.0));
        assert_eq!(pace.motor.damping.value_for("RR_calf_joint"), Some(3.0));
        assert_eq!(pace.encoder_bias.len(), 12);
        assert_eq!(pace.max_delay, 10);
    }

    #[test]
    fn init_pose_per_joint() {
        let state = go2().unwrap().init_state;
        assert!((state.pos[2] - 1.0).abs() < f64::EPSILON);
        assert!((state.joint_position("FL_hip_joint") - 0.1).abs() < f64::EPSILON);
        assert!((state.joint_position("FR_hip_joint") - (-0.1)).abs() < f64::EPSILON);
        assert!((state.joint_position("FL_thigh_joint") - 0.8).abs() < f64::EPSILON);
        assert!((state.joint_position("RR_thigh_joint") - 1.0).abs() < f64::EPSILON);
        assert!((state.joint_position("RL_calf_joint") - (-1.5)).abs() < f64::EPSILON);
        assert!((state.joint_velocity("FL_calf_joint") - 0.0).abs() < f64::EPSILON);
    }
}
