mod beam;
mod config;
mod generator;
mod rotated_beams;
mod rotator;

pub use beam::*;
pub use config::{
    AcquisitionConfig, AcquisitionConfigRaw, FanBeam, FanBeamRaw, InvalidConfiguration,
    ParallelBeam, ParallelBeamRaw, ScanGeometry,
};
pub use generator::*;
pub use rotated_beams::*;
pub use rotator::*;
