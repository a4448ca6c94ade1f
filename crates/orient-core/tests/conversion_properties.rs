//! Conversion Property Tests
//!
//! Verifies the Euler conversions over all twelve sequences:
//! 1. Matrix round trip (build then extract)
//! 2. Quaternion unit norm and matrix orthonormality
//! 3. Quaternion and matrix builders agree
//! 4. Gimbal lock convention
//! 5. Behavior on both sides of the gimbal lock threshold

use approx::assert_relative_eq;
use nalgebra::Matrix3;
use std::f64::consts::{FRAC_PI_2, PI};

use orient_core::euler::{build_matrix, build_quaternion, extract_angles, EulerAngles, EulerSequence};
use orient_core::math::{is_orthonormal, transformation_from_quaternion};
use orient_core::{EulerExtractor, OrientationConfig, DEFAULT_GIMBAL_LOCK_THRESHOLD};

fn linspace(start: f64, end: f64, n: usize) -> impl Iterator<Item = f64> + Clone {
    (0..n).map(move |i| start + (end - start) * i as f64 / (n - 1) as f64)
}

/// Angle triples away from gimbal lock for the given sequence
fn sample_angles(sequence: EulerSequence) -> Vec<EulerAngles> {
    let outer = linspace(-3.0, 3.0, 9);
    let middle = if sequence.is_aerodynamic() {
        linspace(-1.5, 1.5, 9)
    } else {
        linspace(0.05, 3.09, 9)
    };

    let mut samples = Vec::new();
    for phi in outer.clone() {
        for theta in middle.clone() {
            for psi in outer.clone() {
                samples.push(EulerAngles::new(phi, theta, psi));
            }
        }
    }
    samples
}

mod round_trip_tests {
    use super::*;

    #[test]
    fn test_extract_inverts_build_for_every_sequence() {
        for sequence in EulerSequence::ALL {
            for angles in sample_angles(sequence) {
                let m = build_matrix(sequence, &angles);
                let out = extract_angles(&m, sequence);

                assert_relative_eq!(out.phi, angles.phi, epsilon = 1e-9);
                assert_relative_eq!(out.theta, angles.theta, epsilon = 1e-9);
                assert_relative_eq!(out.psi, angles.psi, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_extract_from_quaternion_matches_matrix_path() {
        let extractor = EulerExtractor::default();
        for sequence in EulerSequence::ALL {
            let angles = EulerAngles::new(-2.1, if sequence.is_aerodynamic() { 0.7 } else { 2.2 }, 1.3);
            let q = build_quaternion(sequence, &angles);
            let out = extractor.extract_from_quaternion(&q, sequence);

            assert_relative_eq!(out.phi, angles.phi, epsilon = 1e-9);
            assert_relative_eq!(out.theta, angles.theta, epsilon = 1e-9);
            assert_relative_eq!(out.psi, angles.psi, epsilon = 1e-9);
        }
    }
}

mod invariant_tests {
    use super::*;

    #[test]
    fn test_quaternion_has_unit_norm() {
        for sequence in EulerSequence::ALL {
            for angles in sample_angles(sequence) {
                let q = build_quaternion(sequence, &angles);
                let norm_sq = q.w * q.w + q.i * q.i + q.j * q.j + q.k * q.k;
                assert_relative_eq!(norm_sq, 1.0, epsilon = 1e-14);
            }
        }
    }

    #[test]
    fn test_matrix_is_orthonormal() {
        for sequence in EulerSequence::ALL {
            for angles in sample_angles(sequence) {
                let m = build_matrix(sequence, &angles);

                assert_relative_eq!(m * m.transpose(), Matrix3::identity(), epsilon = 1e-12);
                assert_relative_eq!(m.determinant(), 1.0, epsilon = 1e-12);
                assert!(is_orthonormal(&m, 1e-12));
            }
        }
    }
}

mod cross_representation_tests {
    use super::*;

    #[test]
    fn test_quaternion_matrix_matches_built_matrix() {
        for sequence in EulerSequence::ALL {
            for angles in sample_angles(sequence) {
                let from_quat = transformation_from_quaternion(&build_quaternion(sequence, &angles));
                let direct = build_matrix(sequence, &angles);

                assert_relative_eq!(from_quat, direct, epsilon = 1e-12);
            }
        }
    }
}

mod gimbal_lock_tests {
    use super::*;

    /// Middle angle that places a sequence exactly in gimbal lock
    fn locked_theta(sequence: EulerSequence, positive: bool) -> f64 {
        match (sequence.is_aerodynamic(), positive) {
            (true, true) => FRAC_PI_2,
            (true, false) => -FRAC_PI_2,
            (false, true) => 0.0,
            (false, false) => PI,
        }
    }

    #[test]
    fn test_xyz_hand_computed_lock() {
        let m = Matrix3::new(
            0.0, 1.0, 0.0,
            0.0, 0.0, 1.0,
            1.0, 0.0, 0.0,
        );
        let out = extract_angles(&m, EulerSequence::XYZ);

        assert_eq!(out.psi, 0.0);
        assert_relative_eq!(out.theta, FRAC_PI_2, epsilon = 1e-15);
        // φ = atan2(m[1][2], m[1][1])
        assert_relative_eq!(out.phi, m[(1, 2)].atan2(m[(1, 1)]), epsilon = 1e-15);
        assert_relative_eq!(out.phi, FRAC_PI_2, epsilon = 1e-15);
    }

    #[test]
    fn test_lock_fixes_psi_and_preserves_matrix() {
        for sequence in EulerSequence::ALL {
            for positive in [true, false] {
                let angles = EulerAngles::new(0.4, locked_theta(sequence, positive), 0.7);
                let m = build_matrix(sequence, &angles);
                let out = extract_angles(&m, sequence);

                assert_eq!(out.psi, 0.0, "{sequence}");
                assert_relative_eq!(out.theta, angles.theta, epsilon = 1e-12);
                assert_relative_eq!(build_matrix(sequence, &out), m, epsilon = 1e-12);
            }
        }
    }
}

mod threshold_boundary_tests {
    use super::*;

    /// Middle angle `delta` away from gimbal lock
    fn near_lock_theta(sequence: EulerSequence, delta: f64, positive: bool) -> f64 {
        match (sequence.is_aerodynamic(), positive) {
            (true, true) => FRAC_PI_2 - delta,
            (true, false) => -(FRAC_PI_2 - delta),
            (false, true) => delta,
            (false, false) => PI - delta,
        }
    }

    #[test]
    fn test_just_above_threshold_is_regular() {
        let delta = 10.0 * DEFAULT_GIMBAL_LOCK_THRESHOLD;
        for sequence in EulerSequence::ALL {
            for positive in [true, false] {
                let angles = EulerAngles::new(0.4, near_lock_theta(sequence, delta, positive), 0.7);
                let m = build_matrix(sequence, &angles);
                let out = extract_angles(&m, sequence);

                assert_relative_eq!(out.theta, angles.theta, epsilon = 1e-12);
                // φ and ψ come from entries of size δ, so precision drops
                assert_relative_eq!(out.phi, 0.4, epsilon = 1e-6);
                assert_relative_eq!(out.psi, 0.7, epsilon = 1e-6);
                assert_relative_eq!(build_matrix(sequence, &out), m, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_just_below_threshold_is_locked() {
        let delta = 0.1 * DEFAULT_GIMBAL_LOCK_THRESHOLD;
        for sequence in EulerSequence::ALL {
            for positive in [true, false] {
                let angles = EulerAngles::new(0.4, near_lock_theta(sequence, delta, positive), 0.7);
                let m = build_matrix(sequence, &angles);
                let out = extract_angles(&m, sequence);

                assert_eq!(out.psi, 0.0, "{sequence}");
                assert_relative_eq!(out.theta, angles.theta, epsilon = 1e-12);
                // Folding ψ into φ costs an error on the order of δ
                assert_relative_eq!(build_matrix(sequence, &out), m, epsilon = 1e-12 + 100.0 * delta);
            }
        }
    }

    #[test]
    fn test_raised_threshold_moves_boundary() {
        let extractor = EulerExtractor::new(OrientationConfig {
            gimbal_lock_threshold: 1e-6,
        });
        let delta = 1e-7;
        for sequence in EulerSequence::ALL {
            let angles = EulerAngles::new(0.4, near_lock_theta(sequence, delta, true), 0.7);
            let m = build_matrix(sequence, &angles);

            assert_ne!(extract_angles(&m, sequence).psi, 0.0, "{sequence}");
            let out = extractor.extract(&m, sequence);
            assert_eq!(out.psi, 0.0, "{sequence}");
            assert_relative_eq!(build_matrix(sequence, &out), m, epsilon = 1e-5);
        }
    }
}
