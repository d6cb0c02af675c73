//! Built-in identification task configurations.
//!
//! Both quadrupeds identify the same parameter set (armature, damping,
//! friction, encoder bias per joint, plus one delay scalar) with the
//! standard bounds; they differ in joint ordering and chirp data location.

use pace_task::config::PaceTaskConfig;

use crate::robots::{BIGREDDOG_JOINT_ORDER, GO2_JOINT_ORDER};

/// Identification task for the go2.
#[must_use]
pub fn go2() -> PaceTaskConfig {
    PaceTaskConfig::with_default_bounds(
        "go2",
        "go2/chirp_data_400302.pt",
        GO2_JOINT_ORDER.iter().map(ToString::to_string).collect(),
    )
}

/// Identification task for bigreddog.
#[must_use]
pub fn bigreddog() -> PaceTaskConfig {
    PaceTaskConfig::with_default_bounds(
        "bigreddog",
        "bigreddog/chirp_data.pt",
        BIGREDDOG_JOINT_ORDER
            .iter()
            .map(ToString::to_string)
            .collect(),
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
