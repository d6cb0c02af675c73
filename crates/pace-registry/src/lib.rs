//! Named registry of validated environment configurations.
//!
//! The external simulation bootstrap defines robots, identification tasks,
//! and environments once at startup, then resolves composed
//! [`EnvironmentConfig`](environment::EnvironmentConfig) records by name.
//! All validation happens at definition time; a resolved record is immutable
//! and consumed as-is for the lifetime of a training or evaluation run.

pub mod environment;
pub mod registry;

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::environment::EnvironmentConfig;
    pub use crate::registry::ConfigRegistry;
}
