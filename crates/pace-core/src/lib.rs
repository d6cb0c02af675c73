//! Core types for the Pace configuration registry: error taxonomy,
//! joint-name patterns, and simulation timing settings.
//!
//! Everything downstream (actuator specs, robot models, the registry) builds
//! on these three modules.

pub mod error;
pub mod pattern;
pub mod sim;

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::error::{ConfigError, NotFoundError, PaceError};
    pub use crate::pattern::JointPattern;
    pub use crate::sim::SimSettings;
}
