//! Mathematical utilities
//!
//! Elementary single-axis rotations, transformation matrices and left
//! transformation quaternions.

pub mod quaternion;
pub mod rotation;

pub use quaternion::*;
pub use rotation::*;
