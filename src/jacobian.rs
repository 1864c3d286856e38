extern crate nalgebra as na;

use na::{Matrix3x6, Vector3, Vector6};
use crate::kinematic_traits::{Joints, Kinematics};

/// Position part of the Jacobian, estimated numerically.
pub struct PositionJacobian {
    /// A 3x6 matrix mapping joint velocities to the linear velocity of the tool tip.
    /// Each column corresponds to a joint, each row to one Cartesian axis.
    matrix: Matrix3x6<f64>,

    /// The disturbance value used for computing the Jacobian
    epsilon: f64,
}

impl PositionJacobian {
    /// Constructs a new Jacobian by central differences around the given joint configuration
    ///
    /// # Arguments
    ///
    /// * `robot` - A reference to the robot implementing the Kinematics trait
    /// * `qs` - A reference to the joint configuration
    /// * `epsilon` - Perturbation applied to each joint, once positive and once negative
    pub fn new(robot: &impl Kinematics, qs: &Joints, epsilon: f64) -> Self {
        let matrix = compute_position_jacobian(robot, qs, epsilon);
        Self { matrix, epsilon }
    }

    pub fn matrix(&self) -> &Matrix3x6<f64> {
        &self.matrix
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Joint correction `gain * J^T * error`.
    ///
    /// This is the Jacobian-transpose approximation: a gradient step on the squared
    /// position error, used as a cheap stand-in for the pseudo-inverse. It does not
    /// compensate for poorly conditioned Jacobians.
    pub fn transpose_step(&self, error: &Vector3<f64>, gain: f64) -> Joints {
        let step: Vector6<f64> = self.matrix.transpose() * error * gain;
        [step[0], step[1], step[2], step[3], step[4], step[5]]
    }
}

/// Computes the position Jacobian for the given robot and joint configuration.
/// Column `j` is `(p(q + e_j * epsilon) - p(q - e_j * epsilon)) / (2 * epsilon)`.
pub fn compute_position_jacobian(robot: &impl Kinematics, joints: &Joints, epsilon: f64) -> Matrix3x6<f64> {
    let mut jacobian: Matrix3x6<f64> = Matrix3x6::zeros();

    for i in 0..6 {
        let mut plus = *joints;
        let mut minus = *joints;
        plus[i] += epsilon;
        minus[i] -= epsilon;

        let delta = (robot.forward(&plus).translation() - robot.forward(&minus).translation())
            / (2.0 * epsilon);
        jacobian.fixed_view_mut::<3, 1>(0, i).copy_from(&delta);
    }

    jacobian
}
