use serde::{Deserialize, Serialize};

use super::check_radius;
use crate::{generate, Beam, InvalidConfiguration, ScanGeometry};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcquisitionConfigRaw {
    pub geometry: ScanGeometry,
    /// Radius of the circle traversed by the sources
    pub radius: f64,
}

/// A geometry together with the scan radius it is swept on
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AcquisitionConfig(AcquisitionConfigRaw);

impl AcquisitionConfig {
    pub fn new(
        geometry: impl Into<ScanGeometry>,
        radius: f64,
    ) -> Result<Self, InvalidConfiguration> {
        AcquisitionConfigRaw {
            geometry: geometry.into(),
            radius,
        }
        .try_into()
    }

    pub fn generate(&self) -> Result<Vec<Beam>, InvalidConfiguration> {
        generate(&self.geometry, self.radius)
    }
}

impl std::ops::Deref for AcquisitionConfig {
    type Target = AcquisitionConfigRaw;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'de> Deserialize<'de> for AcquisitionConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let inner = AcquisitionConfigRaw::deserialize(deserializer)?;
        inner
            .try_into()
            .map_err(<D::Error as serde::de::Error>::custom)
    }
}

impl TryFrom<AcquisitionConfigRaw> for AcquisitionConfig {
    type Error = InvalidConfiguration;

    fn try_from(value: AcquisitionConfigRaw) -> Result<Self, Self::Error> {
        check_radius(value.radius)?;
        Ok(AcquisitionConfig(value))
    }
}
