//! Actuator group specifications for the Pace configuration registry.
//!
//! An actuator group drives every joint matched by its name patterns and
//! carries the limits and gains the external articulation API consumes
//! verbatim: effort/saturation/velocity limits, PD gains, and joint
//! friction. [`PaceDcMotorSpec`] extends the plain DC motor group with the
//! per-joint encoder bias vector and the maximum simulated actuation delay
//! used by the identification environment.

pub mod gains;
pub mod motor;
pub mod pace;

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::gains::{GainEntry, GainSpec};
    pub use crate::motor::DcMotorSpec;
    pub use crate::pace::PaceDcMotorSpec;
}
