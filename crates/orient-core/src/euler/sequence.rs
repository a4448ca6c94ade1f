//! Euler rotation sequences and their metadata
//!
//! Each of the twelve sequences carries the facts needed to build a
//! transformation from Euler angles and to locate the key matrix elements
//! when extracting angles back out of a matrix.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OrientationError;
use crate::math::Axis;
use crate::math::Axis::{X, Y, Z};

/// Euler rotation sequence
///
/// Aerodynamic sequences rotate about three distinct axes; astronomical
/// sequences repeat the first axis as the third. The discriminant is the
/// sequence ordinal.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum EulerSequence {
    XYZ = 0,
    XZY = 1,
    YZX = 2,
    YXZ = 3,
    ZXY = 4,
    ZYX = 5,
    XYX = 6,
    XZX = 7,
    YZY = 8,
    YXY = 9,
    ZXZ = 10,
    ZYZ = 11,
}

impl EulerSequence {
    /// All sequences in ordinal order
    pub const ALL: [EulerSequence; 12] = [
        EulerSequence::XYZ,
        EulerSequence::XZY,
        EulerSequence::YZX,
        EulerSequence::YXZ,
        EulerSequence::ZXY,
        EulerSequence::ZYX,
        EulerSequence::XYX,
        EulerSequence::XZX,
        EulerSequence::YZY,
        EulerSequence::YXY,
        EulerSequence::ZXZ,
        EulerSequence::ZYZ,
    ];

    /// Position of the sequence in the metadata table
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// Metadata for this sequence
    pub fn descriptor(self) -> &'static SequenceDescriptor {
        &DESCRIPTORS[self.ordinal()]
    }

    /// Rotation axes in the order the rotations are applied
    pub fn axes(self) -> [Axis; 3] {
        self.descriptor().axes
    }

    /// True for three-distinct-axis sequences such as XYZ
    pub fn is_aerodynamic(self) -> bool {
        self.descriptor().is_aerodynamic
    }

    /// True for repeated-axis sequences such as ZXZ
    pub fn is_astronomical(self) -> bool {
        !self.is_aerodynamic()
    }

    /// Canonical three-letter name
    pub const fn name(self) -> &'static str {
        match self {
            EulerSequence::XYZ => "XYZ",
            EulerSequence::XZY => "XZY",
            EulerSequence::YZX => "YZX",
            EulerSequence::YXZ => "YXZ",
            EulerSequence::ZXY => "ZXY",
            EulerSequence::ZYX => "ZYX",
            EulerSequence::XYX => "XYX",
            EulerSequence::XZX => "XZX",
            EulerSequence::YZY => "YZY",
            EulerSequence::YXY => "YXY",
            EulerSequence::ZXZ => "ZXZ",
            EulerSequence::ZYZ => "ZYZ",
        }
    }
}

impl TryFrom<i32> for EulerSequence {
    type Error = OrientationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
            .ok_or(OrientationError::InvalidSequence { value })
    }
}

impl From<EulerSequence> for i32 {
    fn from(sequence: EulerSequence) -> Self {
        sequence as i32
    }
}

impl fmt::Display for EulerSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EulerSequence {
    type Err = OrientationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|sequence| sequence.name() == upper)
            .ok_or_else(|| OrientationError::UnknownSequenceName(s.to_string()))
    }
}

/// Compiled-in metadata for one Euler sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceDescriptor {
    /// Rotation axes in rotation order, e.g. XYZ is [X, Y, Z], ZXZ is [Z, X, Z]
    pub axes: [Axis; 3],
    /// First axis for aerodynamic sequences; the omitted axis for astronomical ones
    pub alternate_x: Axis,
    /// Last axis for aerodynamic sequences; the omitted axis for astronomical ones
    pub alternate_z: Axis,
    /// Whether the sequence, with its last axis replaced by the axis not
    /// named by the first two, is an even permutation of XYZ.
    /// ZXZ becomes ZXY, which is even.
    pub is_even_permutation: bool,
    /// Three distinct axes (true) or repeated first/third axis (false)
    pub is_aerodynamic: bool,
}

impl SequenceDescriptor {
    /// Look up the descriptor for a raw sequence ordinal
    pub fn lookup(ordinal: i32) -> Result<&'static SequenceDescriptor, OrientationError> {
        EulerSequence::try_from(ordinal).map(EulerSequence::descriptor)
    }
}

/// Metadata for a sequence
pub fn descriptor(sequence: EulerSequence) -> &'static SequenceDescriptor {
    sequence.descriptor()
}

const fn entry(
    axes: [Axis; 3],
    alternate_x: Axis,
    alternate_z: Axis,
    is_even_permutation: bool,
    is_aerodynamic: bool,
) -> SequenceDescriptor {
    SequenceDescriptor {
        axes,
        alternate_x,
        alternate_z,
        is_even_permutation,
        is_aerodynamic,
    }
}

/// Indexed by `EulerSequence::ordinal`
static DESCRIPTORS: [SequenceDescriptor; 12] = [
    //     axes       altx altz  even   aero
    entry([X, Y, Z], X, Z, true, true),   // XYZ
    entry([X, Z, Y], X, Y, false, true),  // XZY
    entry([Y, Z, X], Y, X, true, true),   // YZX
    entry([Y, X, Z], Y, Z, false, true),  // YXZ
    entry([Z, X, Y], Z, Y, true, true),   // ZXY
    entry([Z, Y, X], Z, X, false, true),  // ZYX
    entry([X, Y, X], Z, Z, true, false),  // XYX
    entry([X, Z, X], Y, Y, false, false), // XZX
    entry([Y, Z, Y], X, X, true, false),  // YZY
    entry([Y, X, Y], Z, Z, false, false), // YXY
    entry([Z, X, Z], Y, Y, true, false),  // ZXZ
    entry([Z, Y, Z], X, X, false, false), // ZYZ
];
