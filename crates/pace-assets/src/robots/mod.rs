//! Built-in robot models.
//!
//! One module per robot variant; each exposes a constructor returning a
//! fully specified, validated-by-test [`RobotModel`](crate::articulation::RobotModel).

mod bigreddog;
mod go2;
mod pineapple;

pub use bigreddog::{bigreddog, BIGREDDOG_JOINT_ORDER};
pub use go2::{go2, GO2_JOINT_ORDER};
pub use pineapple::{pineapple_v0, pineapple_v1};
