//! 4x4 homogeneous transform used throughout the forward kinematics

extern crate nalgebra as na;

use std::ops::{Index, Mul};
use na::{Isometry3, Matrix3, Matrix4, Rotation3, Translation3, UnitQuaternion, Vector3};

/// Rigid transform in homogeneous form: rotation in the top-left 3x3 block, translation
/// in the top-right column, bottom row fixed to [0, 0, 0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HomogeneousTransform {
    matrix: Matrix4<f64>,
}

impl HomogeneousTransform {
    pub fn identity() -> Self {
        HomogeneousTransform { matrix: Matrix4::identity() }
    }

    /// Builds the transform from a rotation matrix and a translation vector.
    pub fn from_parts(rotation: &Matrix3<f64>, translation: &Vector3<f64>) -> Self {
        let mut matrix = Matrix4::identity();
        matrix.fixed_view_mut::<3, 3>(0, 0).copy_from(rotation);
        matrix.fixed_view_mut::<3, 1>(0, 3).copy_from(translation);
        HomogeneousTransform { matrix }
    }

    /// Wraps the raw matrix. The caller is responsible for the bottom row being [0, 0, 0, 1].
    pub fn from_matrix_unchecked(matrix: Matrix4<f64>) -> Self {
        HomogeneousTransform { matrix }
    }

    pub fn matrix(&self) -> &Matrix4<f64> {
        &self.matrix
    }

    pub fn rotation(&self) -> Matrix3<f64> {
        self.matrix.fixed_view::<3, 3>(0, 0).into_owned()
    }

    pub fn translation(&self) -> Vector3<f64> {
        self.matrix.fixed_view::<3, 1>(0, 3).into_owned()
    }

    /// Plain matrix transpose. For a pure rotation this is the inverse rotation; with a
    /// non-zero translation the result is no longer a rigid transform.
    pub fn transpose(&self) -> Self {
        HomogeneousTransform { matrix: self.matrix.transpose() }
    }

    /// Composition, `self * other`.
    pub fn compose(&self, other: &HomogeneousTransform) -> Self {
        HomogeneousTransform { matrix: self.matrix * other.matrix }
    }

    /// Pose as 12 values: the rotation row by row, followed by the translation.
    pub fn to_pose_array(&self) -> [f64; 12] {
        let m = &self.matrix;
        [
            m[(0, 0)], m[(0, 1)], m[(0, 2)],
            m[(1, 0)], m[(1, 1)], m[(1, 2)],
            m[(2, 0)], m[(2, 1)], m[(2, 2)],
            m[(0, 3)], m[(1, 3)], m[(2, 3)],
        ]
    }

    /// Converts to nalgebra isometry. The rotation block is assumed orthonormal.
    pub fn to_isometry(&self) -> Isometry3<f64> {
        let rotation = Rotation3::from_matrix_unchecked(self.rotation());
        Isometry3::from_parts(
            Translation3::from(self.translation()),
            UnitQuaternion::from_rotation_matrix(&rotation),
        )
    }
}

impl Default for HomogeneousTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for HomogeneousTransform {
    type Output = HomogeneousTransform;

    fn mul(self, rhs: HomogeneousTransform) -> HomogeneousTransform {
        self.compose(&rhs)
    }
}

impl Mul<&HomogeneousTransform> for &HomogeneousTransform {
    type Output = HomogeneousTransform;

    fn mul(self, rhs: &HomogeneousTransform) -> HomogeneousTransform {
        self.compose(rhs)
    }
}

impl Index<(usize, usize)> for HomogeneousTransform {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &f64 {
        &self.matrix[index]
    }
}

impl From<&Isometry3<f64>> for HomogeneousTransform {
    fn from(isometry: &Isometry3<f64>) -> Self {
        HomogeneousTransform { matrix: isometry.to_homogeneous() }
    }
}

/// Rotation for roll, pitch and yaw in ZYX order: yaw about Z, then pitch about Y,
/// then roll about X (intrinsic), `R = Rz(yaw) * Ry(pitch) * Rx(roll)`.
pub fn rotation_from_rpy(roll: f64, pitch: f64, yaw: f64) -> Matrix3<f64> {
    let (sr, cr) = roll.sin_cos();
    let (sp, cp) = pitch.sin_cos();
    let (sy, cy) = yaw.sin_cos();

    Matrix3::new(
        cy * cp, cy * sp * sr - sy * cr, cy * sp * cr + sy * sr,
        sy * cp, sy * sp * sr + cy * cr, sy * sp * cr - cy * sr,
        -sp, cp * sr, cp * cr,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    const EPSILON: f64 = 1e-12;

    fn sample() -> HomogeneousTransform {
        HomogeneousTransform::from_parts(
            &rotation_from_rpy(0.3, -0.2, 1.1),
            &Vector3::new(0.4, -0.1, 0.25),
        )
    }

    #[test]
    fn test_identity_is_neutral() {
        let t = sample();
        let id = HomogeneousTransform::identity();
        assert_eq!((t * id).matrix(), t.matrix());
        assert_eq!((id * t).matrix(), t.matrix());
    }

    #[test]
    fn test_composition_is_associative() {
        let a = sample();
        let b = HomogeneousTransform::from_parts(
            &rotation_from_rpy(-1.0, 0.5, 0.0), &Vector3::new(0.0, 0.2, -0.3));
        let c = HomogeneousTransform::from_parts(
            &rotation_from_rpy(0.0, 0.0, 2.0), &Vector3::new(1.0, 0.0, 0.0));
        let left = (a * b) * c;
        let right = a * (b * c);
        assert!((left.matrix() - right.matrix()).norm() < EPSILON);
    }

    #[test]
    fn test_bottom_row_kept() {
        let t = sample() * sample();
        assert_eq!(t[(3, 0)], 0.0);
        assert_eq!(t[(3, 1)], 0.0);
        assert_eq!(t[(3, 2)], 0.0);
        assert!((t[(3, 3)] - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_transpose_of_rotation_is_inverse() {
        let r = HomogeneousTransform::from_parts(&rotation_from_rpy(0.7, 0.1, -0.4), &Vector3::zeros());
        let product = r.transpose() * r;
        assert!((product.matrix() - Matrix4::identity()).norm() < EPSILON);
    }

    #[test]
    fn test_rpy_matches_nalgebra() {
        let (roll, pitch, yaw) = (0.2, -0.6, 1.3);
        let ours = rotation_from_rpy(roll, pitch, yaw);
        let theirs = Rotation3::from_euler_angles(roll, pitch, yaw);
        assert!((ours - theirs.matrix()).norm() < EPSILON);
    }

    #[test]
    fn test_pure_yaw() {
        let r = rotation_from_rpy(0.0, 0.0, FRAC_PI_2);
        let x = r * Vector3::x();
        assert!((x - Vector3::y()).norm() < EPSILON);
    }

    #[test]
    fn test_pose_array_and_isometry() {
        let t = sample();
        let pose = t.to_pose_array();
        assert_eq!(pose[9], 0.4);
        assert_eq!(pose[10], -0.1);
        assert_eq!(pose[11], 0.25);
        assert_eq!(pose[1], t[(0, 1)]);

        let back = HomogeneousTransform::from(&t.to_isometry());
        assert!((back.matrix() - t.matrix()).norm() < 1e-9);
    }
}
