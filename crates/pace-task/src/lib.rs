//! Identification task configuration for the Pace registry.
//!
//! The identification procedure fits a small set of per-joint physical
//! parameters (armature, damping, friction, encoder bias) plus a scalar
//! actuation delay against recorded chirp excitation data. This crate
//! carries the *configuration* of that procedure: the `[min, max]` bounds
//! matrix over all tunable parameters, the joint ordering that defines the
//! index-to-joint mapping, and uniform in-bounds sampling for optimizer
//! initialization. The optimizer itself is external.

pub mod bounds;
pub mod config;
pub mod sample;

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::bounds::{ParamBlock, ParamBounds};
    pub use crate::config::PaceTaskConfig;
    pub use crate::sample::ParamVector;
}
