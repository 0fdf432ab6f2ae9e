#![cfg_attr(not(test), no_std)]

pub mod reductions;
pub use reductions::*;

pub mod vector;
pub use vector::*;

pub mod quaternion;
pub use quaternion::*;

#[cfg(test)]
mod tests;

pub const RAD_TO_DEG: f64 = 180.0 / core::f64::consts::PI;
