//! Simulation timing settings.
//!
//! The physics engine steps at `dt`; the controller runs every `decimation`
//! physics steps. The go2 identification environment runs 400 Hz control
//! (`dt = 0.0025`, `decimation = 1`), bigreddog runs 200 Hz.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const fn default_dt() -> f64 {
    0.005
}
const fn default_decimation() -> u32 {
    1
}
const fn default_gravity() -> [f64; 3] {
    [0.0, 0.0, -9.81]
}

// ---------------------------------------------------------------------------
// SimSettings
// ---------------------------------------------------------------------------

/// Physics timestep, control decimation, and gravity for one environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimSettings {
    /// Physics timestep in seconds (default: 0.005 = 200 Hz).
    #[serde(default = "default_dt")]
    pub dt: f64,

    /// Physics steps per control step (default: 1).
    #[serde(default = "default_decimation")]
    pub decimation: u32,

    /// Gravity vector [x, y, z] in m/s^2.
    #[serde(default = "default_gravity")]
    pub gravity: [f64; 3],
}

impl Default for SimSettings {
    fn default() -> Self {
        Self {
            dt: default_dt(),
            decimation: default_decimation(),
            gravity: default_gravity(),
        }
    }
}

impl SimSettings {
    /// Create settings with the given timestep and decimation.
    #[must_use]
    pub fn new(dt: f64, decimation: u32) -> Self {
        Self {
            dt,
            decimation,
            ..Self::default()
        }
    }

    /// Validate timing values. Returns Err on non-positive or non-finite dt
    /// and on zero decimation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(ConfigError::InvalidDt(self.dt));
        }
        if self.decimation == 0 {
            return Err(ConfigError::InvalidDecimation(self.decimation));
        }
        if self.gravity.iter().any(|g| !g.is_finite()) {
            return Err(ConfigError::invalid_value("gravity", "must be finite"));
        }
        Ok(())
    }

    /// Control timestep in seconds: `dt * decimation`.
    #[must_use]
    pub fn control_dt(&self) -> f64 {
        self.dt * f64::from(self.decimation)
    }

    /// Control rate in Hz.
    #[must_use]
    pub fn control_hz(&self) -> f64 {
        1.0 / self.control_dt()
    }

    /// Physics rate in Hz.
    #[must_use]
    pub fn physics_hz(&self) -> f64 {
        1.0 / self.dt
    }

    /// Load from a TOML file and validate.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: PathBuf::from(path),
            source,
        })?;
        let settings: Self = toml::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
