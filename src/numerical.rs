//! Iterative inverse kinematics with the Jacobian transpose.
//!
//! This is a simplification, not a general IK method: the update `gain * J^T * error` is a
//! gradient step on the squared position error rather than a damped least squares
//! (pseudo-inverse) solve. Near singular Jacobians it converges slowly or oscillates, and
//! this is not detected. Only the position of the target is used.

use tracing::{debug, warn};

use crate::jacobian::PositionJacobian;
use crate::kinematic_traits::{Joints, Kinematics, JOINTS_AT_ZERO};
use crate::kinematics_impl::ArmKinematics;
use crate::pose::TargetPose;
use crate::solution::{JointSolution, SolutionStatus};
use crate::utils::normalize_joints;

/// Settings of the numerical solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericalIkConfig {
    /// Iteration cap. The solver reports non convergence when it is reached.
    pub max_iterations: usize,

    /// Converged once the position error is below this (meters).
    pub tolerance: f64,

    /// Scale of the transpose step.
    pub gain: f64,

    /// Joint perturbation for the central difference Jacobian (radians).
    pub perturbation: f64,
}

impl Default for NumericalIkConfig {
    fn default() -> Self {
        NumericalIkConfig {
            max_iterations: 100,
            tolerance: 1e-4,
            gain: 0.5,
            perturbation: 1e-6,
        }
    }
}

impl NumericalIkConfig {
    pub fn new(max_iterations: usize, tolerance: f64) -> Self {
        NumericalIkConfig { max_iterations, tolerance, ..Self::default() }
    }
}

impl ArmKinematics {
    /// Numerical inverse kinematics starting with all joints at zero. Roll, pitch and yaw
    /// of the target are accepted but ignored.
    pub fn inverse_numerical(&self, target: &TargetPose, config: &NumericalIkConfig) -> JointSolution {
        self.inverse_numerical_from(target, &JOINTS_AT_ZERO, config)
    }

    /// [ArmKinematics::inverse_numerical] with the configuration stored in this instance.
    pub fn inverse_numerical_default(&self, target: &TargetPose) -> JointSolution {
        self.inverse_numerical(target, &self.numerical)
    }

    /// Numerical inverse kinematics starting from the given joints, typically the current
    /// position of the robot.
    pub fn inverse_numerical_from(&self, target: &TargetPose, start: &Joints,
                                  config: &NumericalIkConfig) -> JointSolution {
        let mut qs = *start;
        let mut residual = f64::INFINITY;

        for iteration in 0..config.max_iterations {
            let error = target.position - self.forward(&qs).translation();
            residual = error.norm();
            if residual < config.tolerance {
                debug!(iterations = iteration + 1, residual, "Numerical IK converged");
                return JointSolution::valid(normalize_joints(&qs));
            }

            let jacobian = PositionJacobian::new(self, &qs, config.perturbation);
            let step = jacobian.transpose_step(&error, config.gain);
            for (q, dq) in qs.iter_mut().zip(step) {
                *q += dq;
            }
        }

        warn!(max_iterations = config.max_iterations, residual, "Numerical IK did not converge");
        JointSolution::failed(qs, SolutionStatus::NonConvergence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = NumericalIkConfig::default();
        assert_eq!(config.max_iterations, 100);
        assert_eq!(config.tolerance, 1e-4);
        assert_eq!(config.gain, 0.5);
        assert_eq!(config.perturbation, 1e-6);
        assert_eq!(NumericalIkConfig::new(100, 1e-4), config);
    }

    #[test]
    fn test_zero_iterations_never_converge() {
        let robot = ArmKinematics::default();
        let at_zero = robot.forward(&JOINTS_AT_ZERO).translation();
        let target = TargetPose::from_position(at_zero.x, at_zero.y, at_zero.z);
        let solution = robot.inverse_numerical(&target, &NumericalIkConfig::new(0, 1e-4));
        assert_eq!(solution.status, SolutionStatus::NonConvergence);
    }

    #[test]
    fn test_already_at_target() {
        let robot = ArmKinematics::default();
        let at_zero = robot.forward(&JOINTS_AT_ZERO).translation();
        let target = TargetPose::from_position(at_zero.x, at_zero.y, at_zero.z);
        let solution = robot.inverse_numerical_default(&target);
        assert_eq!(solution, JointSolution::valid(JOINTS_AT_ZERO));
    }
}
