use nalgebra::{Matrix3, Vector3};
use tracing::{trace, warn};

use crate::chain::KinematicChain;
use crate::kinematic_traits::{Joints, Kinematics, JOINTS_AT_ZERO};
use crate::numerical::NumericalIkConfig;
use crate::parameters::dh_kinematics::LinkParameters;
use crate::pose::TargetPose;
use crate::solution::{Elbow, IkBranch, JointSolution, SolutionStatus, Wrist};
use crate::transform::HomogeneousTransform;
use crate::utils::{normalize_joints, safe_acos, safe_atan2, EPSILON};

/// Kinematics of a six joint arm with the DH layout described in [LinkParameters].
///
/// The analytic solver decouples the problem at the wrist center: joints 1 to 3 place the
/// wrist center, joints 4 to 6 produce the remaining orientation. Only one of the possible
/// solutions is computed, selected by the [IkBranch].
#[derive(Debug, Clone)]
pub struct ArmKinematics {
    pub(crate) chain: KinematicChain,
    pub(crate) branch: IkBranch,
    pub(crate) numerical: NumericalIkConfig,
}

impl ArmKinematics {
    /// Creates a new `ArmKinematics` instance with the given parameters.
    pub fn new(parameters: LinkParameters) -> Self {
        Self::from_chain(KinematicChain::new(parameters))
    }

    /// Creates an instance that solves for the given branch when used through [Kinematics].
    pub fn new_with_branch(parameters: LinkParameters, branch: IkBranch) -> Self {
        ArmKinematics { branch, ..Self::new(parameters) }
    }

    pub fn from_chain(chain: KinematicChain) -> Self {
        ArmKinematics {
            chain,
            branch: IkBranch::default(),
            numerical: NumericalIkConfig::default(),
        }
    }

    pub fn chain(&self) -> &KinematicChain {
        &self.chain
    }

    /// Mutable access to the chain geometry. Must not overlap with solves in progress.
    pub fn chain_mut(&mut self) -> &mut KinematicChain {
        &mut self.chain
    }

    pub fn parameters(&self) -> &LinkParameters {
        self.chain.parameters()
    }

    pub fn set_link_parameters(&mut self, parameters: LinkParameters) {
        self.chain.set_link_parameters(parameters);
    }

    pub fn branch(&self) -> IkBranch {
        self.branch
    }

    pub fn set_branch(&mut self, branch: IkBranch) {
        self.branch = branch;
    }

    /// Settings used by [ArmKinematics::inverse_numerical_default].
    pub fn numerical_config(&self) -> &NumericalIkConfig {
        &self.numerical
    }

    pub fn set_numerical_config(&mut self, config: NumericalIkConfig) {
        self.numerical = config;
    }

    /// Analytic inverse kinematics for position and orientation, for the given branch.
    pub fn inverse_with_branch(&self, target: &TargetPose, branch: IkBranch) -> JointSolution {
        let p = self.chain.parameters();
        let (a2, a3) = (p.upper_arm, p.forearm);
        let mut qs: Joints = JOINTS_AT_ZERO;
        let rotation = target.rotation();

        // Step back from the tool tip along the tool z axis
        let wrist: Vector3<f64> = target.position - rotation.column(2) * p.tool_length;
        let (wx, wy, wz) = (wrist.x, wrist.y, wrist.z);

        // J1: azimuth of the wrist center, corrected for the lateral wrist offset
        qs[0] = safe_atan2(wy, wx);
        let radius = (wx * wx + wy * wy).sqrt();
        if radius > EPSILON {
            let clearance = radius * radius - p.wrist_offset * p.wrist_offset;
            if clearance < 0.0 {
                warn!(radius, wrist_offset = p.wrist_offset,
                    "Wrist center closer to the base axis than the wrist offset, target unreachable");
                return JointSolution::failed(qs, SolutionStatus::WorkspaceUnreachable);
            }
            let alpha = safe_atan2(p.wrist_offset, clearance.sqrt());
            qs[0] = match branch.wrist {
                Wrist::Right => safe_atan2(wy, wx) - alpha,
                Wrist::Left => safe_atan2(wy, wx) + alpha,
            };
        }

        // Wrist center in the frame of joint 2
        let (s1, c1) = qs[0].sin_cos();
        let wx2 = c1 * wx + s1 * wy;
        let wy2 = -s1 * wx + c1 * wy;
        let wz2 = wz - p.base_height;

        let r_xy = (wx2 * wx2 + wy2 * wy2).sqrt();
        let reach_x = r_xy - p.wrist_offset;
        let r_proj = (reach_x * reach_x + wz2 * wz2).sqrt();

        // J3: law of cosines. Rounding may push the cosine slightly out of [-1, 1]
        let cos_q3 = (r_proj * r_proj - a2 * a2 - a3 * a3) / (2.0 * a2 * a3);
        if cos_q3.abs() > 1.0 + EPSILON {
            warn!(cos_q3, distance = r_proj, "Target outside the workspace");
            return JointSolution::failed(qs, SolutionStatus::WorkspaceUnreachable);
        }
        let elbow = safe_acos(cos_q3.clamp(-1.0, 1.0));
        qs[2] = match branch.elbow {
            Elbow::Up => elbow,
            Elbow::Down => -elbow,
        };

        // J2
        let beta = safe_atan2(wz2, reach_x);
        let phi = safe_atan2(a3 * qs[2].sin(), a2 + a3 * qs[2].cos());
        qs[1] = beta - phi;

        // J4, J5, J6 from the rotation left over after the first three joints
        let r03 = self.chain.forward3(qs[0], qs[1], qs[2]).rotation();
        let r36 = r03.transpose() * rotation;
        let (wrist_angles, singular) = wrist_from_residual(&r36);
        qs[3..].copy_from_slice(&wrist_angles);

        let qs = normalize_joints(&qs);
        if singular {
            trace!(q6 = qs[5], "Wrist singularity, J4 fixed at 0");
            JointSolution::singular(qs)
        } else {
            JointSolution::valid(qs)
        }
    }

    /// Solves J1 to J3 for the tool tip position only, with the wrist joints at zero.
    pub fn inverse_position(&self, position: &Vector3<f64>) -> JointSolution {
        self.inverse_position_with_elbow(position, self.branch.elbow)
    }

    /// Position only solution for the given elbow branch.
    ///
    /// With J4 = J5 = J6 = 0 both the wrist offset and the tool point along the joint 2
    /// axis, so the tool tip sits `wrist_offset + tool_length` to the side of the arm
    /// plane. J1 turns the arm plane so that this lateral offset is matched, after which
    /// J2 and J3 solve a planar two link problem.
    pub fn inverse_position_with_elbow(&self, position: &Vector3<f64>, elbow: Elbow) -> JointSolution {
        let p = self.chain.parameters();
        let (a2, a3) = (p.upper_arm, p.forearm);
        let mut qs: Joints = JOINTS_AT_ZERO;

        let lateral = p.wrist_offset + p.tool_length;
        let clearance = position.x * position.x + position.y * position.y - lateral * lateral;
        if clearance < 0.0 {
            warn!(lateral, "Target closer to the base axis than the lateral tool offset");
            return JointSolution::failed(qs, SolutionStatus::WorkspaceUnreachable);
        }

        // Target in the arm plane: x away from the base axis, z downwards from the shoulder
        let reach_x = clearance.sqrt();
        let reach_z = p.base_height - position.z;
        qs[0] = safe_atan2(position.y, position.x) - safe_atan2(lateral, reach_x);

        let distance = (reach_x * reach_x + reach_z * reach_z).sqrt();
        if distance > p.max_reach() || distance < p.min_reach() {
            warn!(distance, min = p.min_reach(), max = p.max_reach(), "Target outside the workspace");
            return JointSolution::failed(qs, SolutionStatus::WorkspaceUnreachable);
        }

        let cos_q3 = ((distance * distance - a2 * a2 - a3 * a3) / (2.0 * a2 * a3)).clamp(-1.0, 1.0);
        qs[2] = match elbow {
            Elbow::Up => safe_acos(cos_q3),
            Elbow::Down => -safe_acos(cos_q3),
        };
        qs[1] = safe_atan2(reach_z, reach_x) - safe_atan2(a3 * qs[2].sin(), a2 + a3 * qs[2].cos());

        JointSolution::valid(normalize_joints(&qs))
    }
}

impl Default for ArmKinematics {
    fn default() -> Self {
        Self::new(LinkParameters::default())
    }
}

impl Kinematics for ArmKinematics {
    fn inverse(&self, target: &TargetPose) -> JointSolution {
        self.inverse_with_branch(target, self.branch)
    }

    fn forward(&self, qs: &Joints) -> HomogeneousTransform {
        self.chain.forward(qs)
    }

    fn forward_with_joint_poses(&self, qs: &Joints) -> [HomogeneousTransform; 6] {
        self.chain.forward_with_joint_poses(qs)
    }
}

/// Splits the wrist rotation R36 into J4, J5, J6 (ZYZ). Returns the angles and whether
/// the wrist is singular (J5 at 0 or 180 degrees), in which case J4 is set to 0 and J6
/// takes the whole rotation about the aligned axes.
pub(crate) fn wrist_from_residual(r36: &Matrix3<f64>) -> ([f64; 3], bool) {
    if r36[(2, 2)].abs() < 1.0 - EPSILON {
        let q5 = safe_acos(r36[(2, 2)]);
        let q4 = safe_atan2(r36[(1, 2)], r36[(0, 2)]);
        let q6 = safe_atan2(r36[(2, 1)], -r36[(2, 0)]);
        ([q4, q5, q6], false)
    } else {
        let q5 = if r36[(2, 2)] > 0.0 { 0.0 } else { std::f64::consts::PI };
        let q6 = safe_atan2(-r36[(0, 1)], r36[(0, 0)]);
        ([0.0, q5, q6], true)
    }
}
