//! Six joint DH chain and its forward kinematics

use crate::dh::DhParameter;
use crate::kinematic_traits::Joints;
use crate::parameter_error::ParameterError;
use crate::parameters::dh_kinematics::LinkParameters;
use crate::transform::HomogeneousTransform;
use crate::utils::deg;

/// Fixed geometry of the arm. Joint values are never stored here, they are passed into
/// every call, so the same chain can be shared between any number of solves.
#[derive(Debug, Clone, PartialEq)]
pub struct KinematicChain {
    parameters: LinkParameters,

    /// Per-joint d, a and alpha. The theta stored here is ignored.
    template: [DhParameter; 6],
}

impl KinematicChain {
    pub fn new(parameters: LinkParameters) -> Self {
        KinematicChain { parameters, template: parameters.dh_template() }
    }

    pub fn parameters(&self) -> &LinkParameters {
        &self.parameters
    }

    /// Replaces the link lengths. Rebuilds the DH table, dropping any per-joint override
    /// made with [KinematicChain::set_dh_parameter].
    pub fn set_link_parameters(&mut self, parameters: LinkParameters) {
        self.parameters = parameters;
        self.template = parameters.dh_template();
    }

    /// Overrides fixed geometry of one joint (0 based). Only the forward kinematics and
    /// the numerical solver see the override; the analytic solvers are derived for the
    /// layout of [LinkParameters] and keep using it.
    pub fn set_dh_parameter(&mut self, joint: usize, d: f64, a: f64, alpha: f64)
                            -> Result<(), ParameterError> {
        let row = self.template.get_mut(joint)
            .ok_or(ParameterError::JointOutOfRange { joint })?;
        *row = DhParameter::new(0.0, d, a, alpha);
        Ok(())
    }

    /// DH rows with the given joint values filled in.
    pub fn dh_table(&self, qs: &Joints) -> [DhParameter; 6] {
        std::array::from_fn(|i| self.template[i].with_theta(qs[i]))
    }

    /// End effector pose, T = T1 * T2 * ... * T6.
    pub fn forward(&self, qs: &Joints) -> HomogeneousTransform {
        self.dh_table(qs).iter()
            .fold(HomogeneousTransform::identity(), |t, dh| t * dh.transform())
    }

    /// Pose of every joint frame, each one the product of all transforms up to it.
    pub fn forward_with_joint_poses(&self, qs: &Joints) -> [HomogeneousTransform; 6] {
        let mut poses = [HomogeneousTransform::identity(); 6];
        let mut current = HomogeneousTransform::identity();
        for (i, dh) in self.dh_table(qs).iter().enumerate() {
            current = current * dh.transform();
            poses[i] = current;
        }
        poses
    }

    /// Pose of frame 3 (after the elbow), always using the geometry from the link
    /// parameters rather than any per-joint override.
    pub fn forward3(&self, q1: f64, q2: f64, q3: f64) -> HomogeneousTransform {
        let template = self.parameters.dh_template();
        template[0].with_theta(q1).transform()
            * template[1].with_theta(q2).transform()
            * template[2].with_theta(q3).transform()
    }

    /// DH table in YAML-like form, angles shown in degrees.
    pub fn to_yaml(&self, qs: &Joints) -> String {
        let mut out = String::from("dh_table:\n");
        for (i, dh) in self.dh_table(qs).iter().enumerate() {
            out.push_str(&format!(
                "  - {{ joint: {}, theta: {}, d: {}, a: {}, alpha: {} }}\n",
                i + 1, deg(&dh.theta), dh.d, dh.a, deg(&dh.alpha)
            ));
        }
        out
    }
}

impl Default for KinematicChain {
    fn default() -> Self {
        Self::new(LinkParameters::default())
    }
}
