//! Numerical policy for track navigation.
//!
//! Typically left at its defaults; applications that load it from a
//! JSON/TOML file (with the `serde` feature) should call
//! [`NavigationConfig::validate`] before handing it to an event.

use crate::{CoreError, CoreResult};

/// Tolerances used when comparing a propagated position against a track's
/// end vertex.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavigationConfig {
    /// End vertices closer than this to the origin vertex (cm) count as an
    /// immediate decay: the track is already at its end.
    pub immediate_decay_distance: f64,

    /// Slack added to the candidate radius and |z| before comparing them
    /// with the end vertex (cm), so a point on the boundary is not reported
    /// as short of it.
    pub boundary_tolerance: f64,
}

impl NavigationConfig {
    pub const DEFAULT_IMMEDIATE_DECAY_DISTANCE: f64 = 0.01;
    pub const DEFAULT_BOUNDARY_TOLERANCE: f64 = 1.0e-5;

    /// Reject negative or non-finite tolerances.
    pub fn validate(&self) -> CoreResult<()> {
        for (name, value) in [
            ("immediate_decay_distance", self.immediate_decay_distance),
            ("boundary_tolerance", self.boundary_tolerance),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(CoreError::Config(format!("{name} must be finite and >= 0, got {value}")));
            }
        }
        Ok(())
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            immediate_decay_distance: Self::DEFAULT_IMMEDIATE_DECAY_DISTANCE,
            boundary_tolerance:       Self::DEFAULT_BOUNDARY_TOLERANCE,
        }
    }
}
