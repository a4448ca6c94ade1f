//! Elementary rotations and transformation matrix utilities
//!
//! Transformation matrices here map parent-frame vectors into the rotated
//! frame, so an elementary rotation by a positive angle places `+sin` above
//! the diagonal for X and Z and below it for Y.

use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

/// Coordinate axis about which an elementary rotation is performed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Row/column index of the axis (X=0, Y=1, Z=2)
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Unit vector along the axis
    pub fn unit(self) -> Vector3<f64> {
        let mut v = Vector3::zeros();
        v[self.index()] = 1.0;
        v
    }
}

/// Skew-symmetric matrix from vector (hat operator)
///
/// For v = [x, y, z]^T:
/// ```text
/// [v]× = [ 0  -z   y]
///        [ z   0  -x]
///        [-y   x   0]
/// ```
pub fn skew(v: &Vector3<f64>) -> Matrix3<f64> {
    Matrix3::new(
        0.0, -v.z, v.y,
        v.z, 0.0, -v.x,
        -v.y, v.x, 0.0,
    )
}

/// Transformation matrix for a single rotation about a coordinate axis
///
/// ```text
/// X: [1  0  0]    Y: [c  0 -s]    Z: [ c  s  0]
///    [0  c  s]       [0  1  0]       [-s  c  0]
///    [0 -s  c]       [s  0  c]       [ 0  0  1]
/// ```
pub fn elementary_matrix(axis: Axis, angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    match axis {
        Axis::X => Matrix3::new(
            1.0, 0.0, 0.0,
            0.0, c, s,
            0.0, -s, c,
        ),
        Axis::Y => Matrix3::new(
            c, 0.0, -s,
            0.0, 1.0, 0.0,
            s, 0.0, c,
        ),
        Axis::Z => Matrix3::new(
            c, s, 0.0,
            -s, c, 0.0,
            0.0, 0.0, 1.0,
        ),
    }
}

/// Check that a matrix is a proper rotation to within `tol`
///
/// Rows must be orthonormal (R * R^T = I) and the determinant +1.
/// Extraction never calls this; it is the caller's precondition.
pub fn is_orthonormal(m: &Matrix3<f64>, tol: f64) -> bool {
    let gram = m * m.transpose();
    let identity_error = (gram - Matrix3::identity()).abs().max();
    identity_error <= tol && (m.determinant() - 1.0).abs() <= tol
}
