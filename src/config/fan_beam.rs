use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use super::{check_rotation_step, check_spread_and_sources};
use crate::InvalidConfiguration;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FanBeamRaw {
    /// Total opening of the fan in radians
    pub angle: f64,
    pub num_sources: usize,
    pub rotation_step: f64,
}

/// Beams emanating from a single apex across a fan angle
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct FanBeam(FanBeamRaw);

impl FanBeam {
    pub fn new(
        angle: f64,
        num_sources: usize,
        rotation_step: f64,
    ) -> Result<Self, InvalidConfiguration> {
        FanBeamRaw {
            angle,
            num_sources,
            rotation_step,
        }
        .try_into()
    }
}

impl std::ops::Deref for FanBeam {
    type Target = FanBeamRaw;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'de> Deserialize<'de> for FanBeam {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let inner = FanBeamRaw::deserialize(deserializer)?;
        inner
            .try_into()
            .map_err(<D::Error as serde::de::Error>::custom)
    }
}

impl From<FanBeam> for FanBeamRaw {
    fn from(value: FanBeam) -> Self {
        value.0
    }
}

impl TryFrom<FanBeamRaw> for FanBeam {
    type Error = InvalidConfiguration;

    fn try_from(value: FanBeamRaw) -> Result<Self, Self::Error> {
        check_spread_and_sources("angle", value.angle, PI, value.num_sources)?;
        check_rotation_step(value.rotation_step)?;
        Ok(FanBeam(value))
    }
}
