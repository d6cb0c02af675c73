//! Joint-name patterns.
//!
//! Actuator groups and initial poses address joints by pattern rather than by
//! exact name: `".*_hip_joint"` covers all four hips of a quadruped, and
//! `"F[L,R]_thigh_joint"` covers the two front thighs. A [`JointPattern`] is
//! a regular expression that must match the *whole* joint name — `"thigh"`
//! does not match `L_thigh_joint`.

use std::fmt;

use regex::Regex;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// JointPattern
// ---------------------------------------------------------------------------

/// An anchored regular expression over joint names.
#[derive(Debug, Clone)]
pub struct JointPattern {
    raw: String,
    regex: Regex,
}

impl JointPattern {
    /// Compile a pattern. The expression is anchored on both ends, so it
    /// must match a full joint name.
    pub fn new(expr: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = expr.into();
        let anchored = format!("^(?:{raw})$");
        let regex = Regex::new(&anchored).map_err(|err| ConfigError::InvalidPattern {
            pattern: raw.clone(),
            message: err.to_string(),
        })?;
        Ok(Self { raw, regex })
    }

    /// Whether this pattern matches the given joint name in full.
    #[must_use]
    pub fn matches(&self, joint: &str) -> bool {
        self.regex.is_match(joint)
    }

    /// The original (unanchored) pattern text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Names from `joints` matched by this pattern, in input order.
    pub fn matched<'a>(&self, joints: &'a [String]) -> Vec<&'a str> {
        joints
            .iter()
            .filter(|j| self.matches(j))
            .map(String::as_str)
            .collect()
    }

    /// Compile a list of expressions, failing on the first invalid one.
    pub fn parse_all<S: AsRef<str>>(exprs: &[S]) -> Result<Vec<Self>, ConfigError> {
        exprs.iter().map(|e| Self::new(e.as_ref())).collect()
    }
}

impl PartialEq for JointPattern {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for JointPattern {}

impl fmt::Display for JointPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

// Serialized as the plain pattern string, so config files read exactly like
// the joint_names_expr entries they describe.

impl Serialize for JointPattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for JointPattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(D::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn pat(expr: &str) -> JointPattern {
        JointPattern::new(expr).unwrap()
    }

    // -- Matching --

    #[test]
    fn literal_matches_exact_name() {
        let p = pat("L_thigh_joint");
        assert!(p.matches("L_thigh_joint"));
        assert!(!p.matches("R_thigh_joint"));
    }

    #[test]
    fn wildcard_matches_all_legs() {
        let p = pat(".*_hip_joint");
        assert!(p.matches("FL_hip_joint"));
        assert!(p.matches("RR_hip_joint"));
        assert!(!p.matches("FL_thigh_joint"));
    }

    #[test]
    fn character_class_matches_front_legs_only() {
        let p = pat("F[L,R]_thigh_joint");
        assert!(p.matches("FL_thigh_joint"));
        assert!(p.matches("FR_thigh_joint"));
        assert!(!p.matches("RL_thigh_joint"));
    }

    #[test]
    fn pattern_is_anchored() {
        let p = pat("thigh");
        assert!(!p.matches("L_thigh_joint"));
        assert!(p.matches("thigh"));
    }

    #[test]
    fn matched_preserves_input_order() {
        let joints: Vec<String> = ["FR_hip_joint", "FL_hip_joint", "FL_calf_joint"]
            .into_iter()
            .map(String::from)
            .collect();
        let p = pat(".*_hip_joint");
        assert_eq!(p.matched(&joints), vec!["FR_hip_joint", "FL_hip_joint"]);
    }

    // -- Construction --

    #[test]
    fn parse_all_compiles_every_expression() {
        let patterns =
            JointPattern::parse_all(&[".*_hip_joint", ".*_thigh_joint", ".*_calf_joint"]).unwrap();
        assert_eq!(patterns.len(), 3);
        assert!(patterns[2].matches("RL_calf_joint"));
    }

    #[test]
    fn parse_all_fails_on_first_invalid() {
        assert!(JointPattern::parse_all(&[".*_hip_joint", "(bad"]).is_err());
    }

    #[test]
    fn invalid_regex_rejected() {
        let err = JointPattern::new("[unclosed").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPattern { .. }));
        assert!(err.to_string().contains("[unclosed"));
    }

    #[test]
    fn equality_compares_raw_text() {
        assert_eq!(pat(".*_hip_joint"), pat(".*_hip_joint"));
        assert_ne!(pat(".*_hip_joint"), pat(".*_calf_joint"));
    }

    // -- Serde --

    #[test]
    fn serializes_as_plain_string() {
        let p = pat(".*_calf_joint");
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, "\".*_calf_joint\"");
    }

    #[test]
    fn deserializes_and_compiles() {
        let p: JointPattern = serde_json::from_str("\"R[L,R]_thigh_joint\"").unwrap();
        assert!(p.matches("RL_thigh_joint"));
        assert!(!p.matches("FL_thigh_joint"));
    }

    #[test]
    fn deserialize_rejects_invalid_regex() {
        let result: Result<JointPattern, _> = serde_json::from_str("\"(open\"");
        assert!(result.is_err());
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn pattern_is_send_sync() {
        assert_send_sync::<JointPattern>();
    }
}
