//! Orientation object
//!
//! Holds one orientation in every supported representation and keeps them
//! consistent. Callers set one representation (the data source) and derive
//! the rest, or invoke the individual Euler conversions directly.
//!
//! The Euler sequence is stored as a raw ordinal because it usually arrives
//! from outside the program. The Euler conversions check it first: an invalid
//! value is reported as an error diagnostic and the output field is left as it
//! was.

use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::config::OrientationConfig;
use crate::error::OrientationError;
use crate::euler::{build_matrix, build_quaternion, EulerAngles, EulerExtractor, EulerSequence};
use crate::math::{quaternion_from_transformation, transformation_from_quaternion, EigenRotation};
use crate::{Mat3, Quat};

/// Sequence ordinal meaning "not set"
pub const UNSET_SEQUENCE: i32 = -1;

/// Which representation the others are derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataSource {
    Matrix,
    Quaternion,
    EigenRotation,
    EulerAngles,
}

/// An orientation in all of its representations
#[derive(Debug, Clone)]
pub struct Orientation {
    /// Transformation matrix (parent to body)
    pub trans: Mat3,
    /// Left transformation quaternion
    pub quat: Quat,
    /// Single-axis rotation
    pub eigen_rotation: EigenRotation,
    /// Raw Euler sequence ordinal, see [`EulerSequence`]
    pub euler_sequence: i32,
    /// Euler angles [rad] for `euler_sequence`
    pub euler_angles: EulerAngles,
    /// Representation set most recently, if any
    pub data_source: Option<DataSource>,
    extractor: EulerExtractor,
}

impl Default for Orientation {
    fn default() -> Self {
        Self {
            trans: Mat3::identity(),
            quat: Quat::identity(),
            eigen_rotation: EigenRotation::default(),
            euler_sequence: UNSET_SEQUENCE,
            euler_angles: EulerAngles::default(),
            data_source: None,
            extractor: EulerExtractor::default(),
        }
    }
}

impl Orientation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an orientation with a custom extraction configuration
    pub fn with_config(config: OrientationConfig) -> Result<Self, OrientationError> {
        config.validate()?;
        Ok(Self {
            extractor: EulerExtractor::new(config),
            ..Self::default()
        })
    }

    /// Gimbal lock threshold used by Euler extraction
    pub fn gimbal_lock_threshold(&self) -> f64 {
        self.extractor.gimbal_lock_threshold()
    }

    pub fn set_euler_sequence(&mut self, sequence: EulerSequence) {
        self.euler_sequence = sequence.into();
    }

    /// Validated Euler sequence, if the stored ordinal is valid
    pub fn sequence(&self) -> Result<EulerSequence, OrientationError> {
        EulerSequence::try_from(self.euler_sequence)
    }

    /// Compute `quat` from `euler_sequence` and `euler_angles`
    pub fn compute_quaternion_from_euler_angles(&mut self) {
        if let Some(sequence) = self.checked_sequence() {
            self.quat = build_quaternion(sequence, &self.euler_angles);
        }
    }

    /// Compute `trans` from `euler_sequence` and `euler_angles`
    pub fn compute_matrix_from_euler_angles(&mut self) {
        if let Some(sequence) = self.checked_sequence() {
            self.trans = build_matrix(sequence, &self.euler_angles);
        }
    }

    /// Compute `euler_angles` from `trans` for `euler_sequence`
    pub fn compute_euler_angles_from_matrix(&mut self) {
        if let Some(sequence) = self.checked_sequence() {
            self.euler_angles = self.extractor.extract(&self.trans, sequence);
        }
    }

    fn checked_sequence(&self) -> Option<EulerSequence> {
        match self.sequence() {
            Ok(sequence) => Some(sequence),
            Err(err) => {
                error!("{}", err);
                None
            }
        }
    }

    pub fn set_transformation(&mut self, trans: Mat3) {
        self.trans = trans;
        self.data_source = Some(DataSource::Matrix);
    }

    pub fn set_quaternion(&mut self, quat: Quat) {
        self.quat = quat;
        self.data_source = Some(DataSource::Quaternion);
    }

    pub fn set_eigen_rotation(&mut self, eigen_rotation: EigenRotation) {
        self.eigen_rotation = eigen_rotation;
        self.data_source = Some(DataSource::EigenRotation);
    }

    pub fn set_euler_angles(&mut self, sequence: EulerSequence, angles: EulerAngles) {
        self.set_euler_sequence(sequence);
        self.euler_angles = angles;
        self.data_source = Some(DataSource::EulerAngles);
    }

    /// Derive every representation from the data source
    ///
    /// Euler angles are derived only when `euler_sequence` is valid. When they
    /// are the data source an invalid sequence is an error and nothing changes.
    pub fn compute_all(&mut self) -> Result<(), OrientationError> {
        let source = self.data_source.ok_or(OrientationError::MissingDataSource)?;

        match source {
            DataSource::Matrix => {
                self.quat = quaternion_from_transformation(&self.trans);
                self.eigen_rotation = EigenRotation::from_quaternion(&self.quat);
            }
            DataSource::Quaternion => {
                self.trans = transformation_from_quaternion(&self.quat);
                self.eigen_rotation = EigenRotation::from_quaternion(&self.quat);
            }
            DataSource::EigenRotation => {
                self.quat = self.eigen_rotation.to_quaternion();
                self.trans = transformation_from_quaternion(&self.quat);
            }
            DataSource::EulerAngles => {
                let sequence = self.sequence()?;
                self.quat = build_quaternion(sequence, &self.euler_angles);
                self.trans = build_matrix(sequence, &self.euler_angles);
                self.eigen_rotation = EigenRotation::from_quaternion(&self.quat);
            }
        }

        if source != DataSource::EulerAngles {
            if let Ok(sequence) = self.sequence() {
                self.euler_angles = self.extractor.extract(&self.trans, sequence);
            }
        }

        debug!(?source, sequence = self.euler_sequence, "orientation recomputed");
        Ok(())
    }
}
