//! PD gain specifications.
//!
//! Gains are given either as one scalar for every joint the group drives
//! (`stiffness = 25.0`) or as a pattern table
//! (`stiffness = [{ pattern = ".*", value = 40.0 }]`). With a table, later
//! entries refine earlier ones: the last matching pattern wins.

use serde::{Deserialize, Serialize};

use pace_core::error::ConfigError;
use pace_core::pattern::JointPattern;

// ---------------------------------------------------------------------------
// GainEntry
// ---------------------------------------------------------------------------

/// One pattern → value row of a gain table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GainEntry {
    pub pattern: JointPattern,
    pub value: f64,
}

// ---------------------------------------------------------------------------
// GainSpec
// ---------------------------------------------------------------------------

/// A stiffness (P) or damping (D) gain specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GainSpec {
    /// Same gain for every joint the group drives.
    Uniform(f64),
    /// Per-pattern gains; the last matching entry wins.
    PerPattern(Vec<GainEntry>),
}

impl GainSpec {
    /// A gain table with a single catch-all pattern.
    pub fn for_all(value: f64) -> Result<Self, ConfigError> {
        Ok(Self::PerPattern(vec![GainEntry {
            pattern: JointPattern::new(".*")?,
            value,
        }]))
    }

    /// The gain for `joint`, or `None` if no entry matches.
    #[must_use]
    pub fn value_for(&self, joint: &str) -> Option<f64> {
        match self {
            Self::Uniform(value) => Some(*value),
            Self::PerPattern(entries) => entries
                .iter()
                .rev()
                .find(|e| e.pattern.matches(joint))
                .map(|e| e.value),
        }
    }

    /// Validate that every gain value is finite and non-negative.
    pub fn validate(&self, field: &str) -> Result<(), ConfigError> {
        let check = |value: f64| -> Result<(), ConfigError> {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::invalid_value(
                    field,
                    format!("gain must be finite and >= 0, got {value}"),
                ));
            }
            Ok(())
        };
        match self {
            Self::Uniform(value) => check(*value),
            Self::PerPattern(entries) => {
                if entries.is_empty() {
                    return Err(ConfigError::invalid_value(field, "empty gain table"));
                }
                entries.iter().try_for_each(|e| check(e.value))
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
