//! Outcome of an inverse kinematics call and the solution branch selectors

use crate::kinematic_traits::Joints;

/// Which of the two law-of-cosines solutions for the elbow (joint 3) is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Elbow {
    /// q3 = +acos(...)
    #[default]
    Up,
    /// q3 = -acos(...)
    Down,
}

/// How the base rotation compensates the lateral wrist offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Wrist {
    /// q1 = atan2(wy, wx) - alpha
    #[default]
    Right,
    /// q1 = atan2(wy, wx) + alpha
    Left,
}

/// Solution branch for the analytic solver. Up to eight full-pose solutions exist; one
/// call computes exactly one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IkBranch {
    pub elbow: Elbow,
    pub wrist: Wrist,
}

impl IkBranch {
    pub fn new(elbow: Elbow, wrist: Wrist) -> Self {
        IkBranch { elbow, wrist }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionStatus {
    Valid,
    /// Valid, but J5 is at 0 or 180 degrees. J4 and J6 then rotate about the same axis;
    /// J4 is fixed to 0 and J6 carries the whole rotation, treat J4 as don't-care.
    Singular,
    /// The target is outside the reachable volume of the arm.
    WorkspaceUnreachable,
    /// The numerical solver ran out of iterations.
    NonConvergence,
}

/// Six joint angles plus the outcome. When the outcome is not valid the joint values
/// carry no meaning and must not be fed into forward kinematics or to the robot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointSolution {
    pub joints: Joints,
    pub status: SolutionStatus,
}

impl JointSolution {
    pub fn valid(joints: Joints) -> Self {
        JointSolution { joints, status: SolutionStatus::Valid }
    }

    pub fn singular(joints: Joints) -> Self {
        JointSolution { joints, status: SolutionStatus::Singular }
    }

    /// Failed result, carrying whatever joints were computed so far.
    pub fn failed(joints: Joints, status: SolutionStatus) -> Self {
        JointSolution { joints, status }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self.status, SolutionStatus::Valid | SolutionStatus::Singular)
    }

    pub fn is_singular(&self) -> bool {
        self.status == SolutionStatus::Singular
    }

    /// The joints if the solution is valid, the reason otherwise.
    pub fn into_result(self) -> Result<Joints, IkError> {
        match self.status {
            SolutionStatus::Valid | SolutionStatus::Singular => Ok(self.joints),
            SolutionStatus::WorkspaceUnreachable => Err(IkError::WorkspaceUnreachable),
            SolutionStatus::NonConvergence => Err(IkError::NonConvergence),
        }
    }
}

/// Reasons an inverse kinematics call can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IkError {
    WorkspaceUnreachable,
    NonConvergence,
}

impl std::fmt::Display for IkError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            IkError::WorkspaceUnreachable =>
                write!(f, "Target is outside the reachable workspace"),
            IkError::NonConvergence =>
                write!(f, "Numerical solver did not converge within the iteration limit"),
        }
    }
}

impl std::error::Error for IkError {}
