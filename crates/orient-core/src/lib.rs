//! # Orient Core
//!
//! Rotation representation conversions for rigid-body orientation.
//!
//! An orientation can be expressed as one of twelve Euler angle sequences,
//! a left transformation quaternion, a 3x3 transformation matrix, or a
//! single-axis eigen rotation. This library converts between them, including
//! the extraction of Euler angles from an arbitrary transformation matrix at
//! and near gimbal lock.
//!
//! ## Modules
//!
//! - [`math`]: Elementary rotations and quaternion/matrix utilities
//! - [`euler`]: Euler sequences, forward builders and the matrix-to-angle extractor
//! - [`config`]: Extraction configuration (gimbal lock threshold)
//! - [`orientation`]: Orientation object holding every representation
//! - [`error`]: Error type

pub mod config;
pub mod error;
pub mod euler;
pub mod math;
pub mod orientation;

pub use config::{OrientationConfig, DEFAULT_GIMBAL_LOCK_THRESHOLD};
pub use error::OrientationError;
pub use euler::{
    build_matrix, build_quaternion, EulerAngles, EulerExtractor, EulerSequence,
    SequenceDescriptor,
};
pub use orientation::{DataSource, Orientation};

// Common type aliases
use nalgebra::{Matrix3, UnitQuaternion, Vector3};

/// 3D vector type
pub type Vec3 = Vector3<f64>;

/// 3x3 matrix type
pub type Mat3 = Matrix3<f64>;

/// Unit quaternion type (left transformation quaternion)
pub type Quat = UnitQuaternion<f64>;
