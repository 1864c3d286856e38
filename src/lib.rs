//! Forward and inverse kinematics for six joint robot arms described with
//! Denavit-Hartenberg (DH) parameters, with a spherical wrist and a lateral wrist offset.
//!
//! # Features
//!
//! - Forward kinematics as a product of the six standard DH joint transforms.
//! - Closed form inverse kinematics for position and orientation. The problem is split at
//!   the wrist center: joints 1 to 3 are found geometrically (law of cosines for the elbow),
//!   joints 4 to 6 are extracted from the remaining rotation as ZYZ angles. The wrist
//!   singularity (J5 = 0° or 180°) is handled by fixing J4 at 0.
//! - Closed form position-only inverse kinematics with explicit reachability checks and the
//!   wrist joints at zero.
//! - Numerical inverse kinematics using a finite difference Jacobian and transpose steps,
//!   usable when the closed form assumptions do not hold.
//! - Each solver computes one solution branch. The branch (elbow up/down, wrist offset to the
//!   left/right) is an explicit parameter.
//! - Failures are returned as data: check [solution::JointSolution::is_valid] before using
//!   the joint values.
//!
//! # Parameters
//!
//! The arm is described by five link lengths, see
//! [parameters::dh_kinematics::LinkParameters]. The joint frames (twists of -90°, 0, 0,
//! -90°, 90°, 0) are fixed by this crate. All angles are in radians, all lengths in meters.
//!
//! ```
//! use rs_dh_kinematics::kinematic_traits::Kinematics;
//! use rs_dh_kinematics::kinematics_impl::ArmKinematics;
//! use rs_dh_kinematics::parameters::dh_kinematics::LinkParameters;
//! use rs_dh_kinematics::utils::as_radians;
//!
//! let robot = ArmKinematics::new(LinkParameters::new(0.1, 0.4, 0.3, 0.1, 0.05));
//! let pose = robot.forward(&as_radians([30, 45, -30, 0, 0, 0]));
//! let solution = robot.inverse_position(&pose.translation());
//! assert!(solution.is_valid());
//! let reached = robot.forward(&solution.joints).translation();
//! assert!((reached - pose.translation()).norm() < 1e-6);
//! ```

pub mod parameters;
pub mod parameters_robots;
pub mod parameter_error;

#[cfg(feature = "allow_filesystem")]
pub mod parameters_from_file;

pub mod utils;
pub mod transform;
pub mod dh;
pub mod chain;
pub mod pose;
pub mod solution;
pub mod kinematic_traits;
pub mod kinematics_impl;

pub mod jacobian;
pub mod numerical;

#[cfg(test)]
mod tests;
