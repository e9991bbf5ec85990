use serde::{Deserialize, Serialize};

use super::{check_rotation_step, check_spread_and_sources};
use crate::InvalidConfiguration;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParallelBeamRaw {
    /// Fraction of the scan-circle diameter spanned by the outermost sources
    pub width_ratio: f64,
    pub num_sources: usize,
    /// Radians between consecutive scan positions
    pub rotation_step: f64,
}

/// Bank of parallel beams spread across a chord of the scan circle.
///
/// Only obtainable through validation, so `width_ratio == 0` exactly when
/// there is a single source.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct ParallelBeam(ParallelBeamRaw);

impl ParallelBeam {
    pub fn new(
        width_ratio: f64,
        num_sources: usize,
        rotation_step: f64,
    ) -> Result<Self, InvalidConfiguration> {
        ParallelBeamRaw {
            width_ratio,
            num_sources,
            rotation_step,
        }
        .try_into()
    }
}

impl std::ops::Deref for ParallelBeam {
    type Target = ParallelBeamRaw;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'de> Deserialize<'de> for ParallelBeam {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let inner = ParallelBeamRaw::deserialize(deserializer)?;
        inner
            .try_into()
            .map_err(<D::Error as serde::de::Error>::custom)
    }
}

impl From<ParallelBeam> for ParallelBeamRaw {
    fn from(value: ParallelBeam) -> Self {
        value.0
    }
}

impl TryFrom<ParallelBeamRaw> for ParallelBeam {
    type Error = InvalidConfiguration;

    fn try_from(value: ParallelBeamRaw) -> Result<Self, Self::Error> {
        check_spread_and_sources("width_ratio", value.width_ratio, 1.0, value.num_sources)?;
        check_rotation_step(value.rotation_step)?;
        Ok(ParallelBeam(value))
    }
}
