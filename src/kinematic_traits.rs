use crate::pose::TargetPose;
use crate::solution::JointSolution;
use crate::transform::HomogeneousTransform;

/// Six joint rotations in radians, joint 1 (base) first.
pub type Joints = [f64; 6];

/// All joints at zero. For the arms this crate models this is the stretched-out pose,
/// upper arm and forearm pointing along the base X axis.
pub const JOINTS_AT_ZERO: Joints = [0.0; 6];

pub trait Kinematics {
    /// Find joint values that place the end effector at the given target. Only one
    /// solution branch is computed. Check [JointSolution::is_valid] before using
    /// the returned angles.
    fn inverse(&self, target: &TargetPose) -> JointSolution;

    /// Pose of the end effector (joint 6 flange plus the tool length) in the base frame.
    fn forward(&self, qs: &Joints) -> HomogeneousTransform;

    /// Cumulative transforms of all six joint frames, T1, T1*T2, ... T1*...*T6.
    /// The last entry equals [Kinematics::forward].
    fn forward_with_joint_poses(&self, qs: &Joints) -> [HomogeneousTransform; 6];
}
