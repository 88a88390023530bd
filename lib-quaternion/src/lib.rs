#![cfg_attr(not(test), no_std)]

pub mod float_utils;
pub use float_utils::*;

pub mod vector;
pub use vector::*;

pub mod quaternion;
pub use quaternion::*;

pub mod euler_angles;
pub use euler_angles::*;

pub mod rotation_matrix;
pub use rotation_matrix::*;

#[cfg(test)]
mod tests;

pub const DEG_TO_RAD: f32 = core::f32::consts::PI / 180.0;

pub const RAD_TO_DEG: f32 = 57.29578;
