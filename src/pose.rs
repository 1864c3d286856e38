//! Target of the inverse kinematics: position plus roll, pitch and yaw

extern crate nalgebra as na;

use na::{Matrix3, Rotation3, Vector3};
use crate::transform::{rotation_from_rpy, HomogeneousTransform};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetPose {
    /// Tool tip position in the base frame.
    pub position: Vector3<f64>,

    /// Rotation about X, applied last (radians).
    pub roll: f64,

    /// Rotation about Y (radians).
    pub pitch: f64,

    /// Rotation about Z, applied first (radians).
    pub yaw: f64,
}

impl TargetPose {
    pub fn new(x: f64, y: f64, z: f64, roll: f64, pitch: f64, yaw: f64) -> Self {
        TargetPose { position: Vector3::new(x, y, z), roll, pitch, yaw }
    }

    /// Target that only cares about the position, orientation left at identity.
    pub fn from_position(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z, 0.0, 0.0, 0.0)
    }

    /// Recovers position and roll/pitch/yaw from a transform, for instance the result
    /// of the forward kinematics. Near pitch = ±90° the split between roll and yaw is
    /// arbitrary but the rotation is preserved.
    pub fn from_transform(transform: &HomogeneousTransform) -> Self {
        let rotation = Rotation3::from_matrix_unchecked(transform.rotation());
        let (roll, pitch, yaw) = rotation.euler_angles();
        TargetPose { position: transform.translation(), roll, pitch, yaw }
    }

    /// ZYX rotation matrix of this target.
    pub fn rotation(&self) -> Matrix3<f64> {
        rotation_from_rpy(self.roll, self.pitch, self.yaw)
    }

    pub fn to_transform(&self) -> HomogeneousTransform {
        HomogeneousTransform::from_parts(&self.rotation(), &self.position)
    }
}
