use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

mod acquisition;
mod fan_beam;
mod parallel_beam;

pub use acquisition::*;
pub use fan_beam::*;
pub use parallel_beam::*;

/// Closed set of supported scan geometries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScanGeometry {
    Parallel(ParallelBeam),
    Fan(FanBeam),
}

impl From<ParallelBeam> for ScanGeometry {
    fn from(value: ParallelBeam) -> Self {
        Self::Parallel(value)
    }
}

impl From<FanBeam> for ScanGeometry {
    fn from(value: FanBeam) -> Self {
        Self::Fan(value)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{reason}")]
pub struct InvalidConfiguration {
    reason: String,
}

impl InvalidConfiguration {
    pub(crate) fn new(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        log::debug!("Rejecting configuration: {reason}");
        Self { reason }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

// Checks shared by both geometries. `spread` is the width ratio or the fan
// angle, whose zero value must coincide with a single source.
pub(crate) fn check_spread_and_sources(
    name: &str,
    spread: f64,
    max: f64,
    num_sources: usize,
) -> Result<(), InvalidConfiguration> {
    if !(0.0..=max).contains(&spread) {
        return Err(InvalidConfiguration::new(format!(
            "{name} must be in [0, {max}], got {spread}"
        )));
    }
    if num_sources == 0 {
        return Err(InvalidConfiguration::new(
            "num_sources must be positive, got 0",
        ));
    }
    if num_sources == 1 && spread != 0.0 {
        return Err(InvalidConfiguration::new(format!(
            "{name} must be 0 for a single source, got {spread}"
        )));
    }
    if num_sources != 1 && spread == 0.0 {
        return Err(InvalidConfiguration::new(format!(
            "{name} of 0 requires a single source, got {num_sources} sources"
        )));
    }
    Ok(())
}

pub(crate) fn check_rotation_step(rotation_step: f64) -> Result<(), InvalidConfiguration> {
    if rotation_step > 0.0 && rotation_step < PI {
        Ok(())
    } else {
        Err(InvalidConfiguration::new(format!(
            "rotation_step must be in (0, pi), got {rotation_step}"
        )))
    }
}

pub(crate) fn check_radius(radius: f64) -> Result<(), InvalidConfiguration> {
    if radius > 0.0 {
        Ok(())
    } else {
        Err(InvalidConfiguration::new(format!(
            "radius must be positive, got {radius}"
        )))
    }
}
