//! Core configuration for vizij-path-core.

use serde::{Deserialize, Serialize};

use crate::error::PathError;

/// Configuration for path interpolation and measurement.
/// Keep this minimal; expand as needed without breaking API.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Polyline subdivisions per cubic segment when measuring path length.
    pub measure_steps: usize,

    /// Remeasure the result path after every batch interpolation.
    pub remeasure_results: bool,

    /// Feature flags.
    pub features: Features,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Features {
    /// Use the flat f64 lerp kernel for element types with a flat layout.
    /// When off, every element type goes through the per-vertex path.
    pub flat_lerp: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self { flat_lerp: true }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            measure_steps: 16,
            remeasure_results: false,
            features: Features::default(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), PathError> {
        if self.measure_steps == 0 {
            return Err(PathError::InvalidConfig {
                reason: "measure_steps must be > 0".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = Config::default();
        assert!(cfg.validate().is_ok());
        assert!(cfg.features.flat_lerp);
    }

    #[test]
    fn zero_measure_steps_rejected() {
        let cfg = Config {
            measure_steps: 0,
            ..Config::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(PathError::InvalidConfig { .. })
        ));
    }
}
