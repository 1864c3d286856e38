//! Denavit-Hartenberg parameters of a single joint (standard, not modified, convention)

extern crate nalgebra as na;

use na::Matrix4;
use crate::transform::HomogeneousTransform;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DhParameter {
    /// Rotation about the previous z axis (radians). This is the joint variable.
    pub theta: f64,

    /// Offset along the previous z axis (link offset).
    pub d: f64,

    /// Length along the rotated x axis (link length).
    pub a: f64,

    /// Rotation about the rotated x axis (link twist, radians).
    pub alpha: f64,
}

impl DhParameter {
    pub fn new(theta: f64, d: f64, a: f64, alpha: f64) -> Self {
        DhParameter { theta, d, a, alpha }
    }

    /// Same fixed geometry, different joint value.
    pub fn with_theta(&self, theta: f64) -> Self {
        DhParameter { theta, ..*self }
    }

    /// Transform from the frame of the previous joint to the frame of this one:
    /// ```text
    /// | cθ  -sθ·cα   sθ·sα   a·cθ |
    /// | sθ   cθ·cα  -cθ·sα   a·sθ |
    /// | 0    sα      cα      d    |
    /// | 0    0       0       1    |
    /// ```
    pub fn transform(&self) -> HomogeneousTransform {
        let (st, ct) = self.theta.sin_cos();
        let (sa, ca) = self.alpha.sin_cos();

        HomogeneousTransform::from_matrix_unchecked(Matrix4::new(
            ct, -st * ca, st * sa, self.a * ct,
            st, ct * ca, -ct * sa, self.a * st,
            0.0, sa, ca, self.d,
            0.0, 0.0, 0.0, 1.0,
        ))
    }
}
