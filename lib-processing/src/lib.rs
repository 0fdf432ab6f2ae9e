//! Immobility detection and offset calibration for complete inertial sensor recordings.

pub mod error;
pub use error::*;

pub mod intervals;
pub use intervals::*;

pub mod morphology;
pub use morphology::*;

pub mod filters;
pub use filters::*;

pub mod immobility;
pub use immobility::*;

pub mod minimize;
pub use minimize::*;

pub mod calibration;
pub use calibration::*;

pub mod head_tilt;
pub use head_tilt::*;

#[cfg(test)]
mod tests;
