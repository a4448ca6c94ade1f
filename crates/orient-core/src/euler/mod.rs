//! Euler angle sequences
//!
//! Conversions between the twelve Euler sequences and the other rotation
//! representations:
//! - Angles to left transformation quaternion ([`build_quaternion`])
//! - Angles to transformation matrix ([`build_matrix`])
//! - Transformation matrix to angles ([`EulerExtractor`])

pub mod angles;
pub mod builder;
pub mod extract;
pub mod sequence;

pub use angles::*;
pub use builder::*;
pub use extract::*;
pub use sequence::*;
