//! Robot articulation models and the built-in configuration catalog.
//!
//! [`RobotModel`](articulation::RobotModel) is the in-memory description the
//! external simulator consumes at environment-construction time: asset
//! reference, rigid-body and solver properties, initial pose, and the
//! actuator groups driving the joints. The [`robots`] and [`tasks`] modules
//! hold the concrete catalog entries (go2, bigreddog, the pineapple bipeds).

pub mod articulation;
pub mod robots;
pub mod tasks;

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::articulation::{
        ActuatorGroup, ArticulationProps, InitState, JointInit, RigidBodyProps, RobotModel,
    };
    pub use crate::{robots, tasks};
}
