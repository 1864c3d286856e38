#[cfg(test)]
mod tests {
    use nalgebra::{Rotation3, Vector3};

    use crate::kinematic_traits::Kinematics;
    use crate::kinematics_impl::ArmKinematics;
    use crate::parameters::dh_kinematics::LinkParameters;
    use crate::pose::TargetPose;
    use crate::solution::{Elbow, IkBranch, SolutionStatus, Wrist};
    use crate::tests::test_utils::assert_no_nan;
    use crate::transform::HomogeneousTransform;

    fn without_tool() -> LinkParameters {
        LinkParameters { tool_length: 0.0, ..LinkParameters::reference_arm() }
    }

    #[test]
    fn test_rounding_past_full_stretch_is_clamped() {
        // The cosine of J3 comes out a few 1e-7 above 1, inside the tolerance
        let robot = ArmKinematics::new(LinkParameters::planar_no_offset());
        let solution = robot.inverse(&TargetPose::from_position(0.7 + 8e-8, 0.0, 0.1));
        assert!(solution.is_valid(), "{:?}", solution);
        assert_no_nan(&solution.joints);
        assert_eq!(solution.joints[2], 0.0);
        assert_eq!(solution.joints[0], 0.0);
    }

    #[test]
    fn test_just_beyond_reach() {
        let robot = ArmKinematics::new(LinkParameters::planar_no_offset());
        let solution = robot.inverse(&TargetPose::from_position(0.71, 0.0, 0.1));
        assert_eq!(solution.status, SolutionStatus::WorkspaceUnreachable);
        assert!(!solution.is_valid());
        assert!(solution.into_result().is_err());
    }

    #[test]
    fn test_far_target_unreachable() {
        let robot = ArmKinematics::default();
        let solution = robot.inverse(&TargetPose::from_position(2.0, 0.0, 0.0));
        assert_eq!(solution.status, SolutionStatus::WorkspaceUnreachable);
    }

    #[test]
    fn test_wrist_center_inside_offset_circle_unreachable() {
        // Wrist center 5 cm from the base axis, the wrist offset is 10 cm
        let robot = ArmKinematics::new(without_tool());
        let solution = robot.inverse(&TargetPose::from_position(0.03, 0.04, 0.3));
        assert_eq!(solution.status, SolutionStatus::WorkspaceUnreachable);
    }

    /// Target whose orientation equals frame 3 of the solution for the same position, so
    /// the wrist has nothing left to do.
    fn aligned_target(robot: &ArmKinematics, position: Vector3<f64>, spin: f64) -> TargetPose {
        let first = robot.inverse(&TargetPose::new(position.x, position.y, position.z, 0.3, 0.2, 0.1));
        assert!(first.is_valid());
        let q = first.joints;
        let r03 = robot.chain().forward3(q[0], q[1], q[2]).rotation();
        let rotation = r03 * Rotation3::from_axis_angle(&Vector3::z_axis(), spin).matrix();
        TargetPose::from_transform(&HomogeneousTransform::from_parts(&rotation, &position))
    }

    #[test]
    fn test_singular_wrist() {
        let robot = ArmKinematics::new(without_tool());
        let target = aligned_target(&robot, Vector3::new(0.5, 0.1, 0.2), 0.0);

        let solution = robot.inverse(&target);
        assert_eq!(solution.status, SolutionStatus::Singular);
        assert!(solution.is_valid());
        assert!(solution.is_singular());
        assert_no_nan(&solution.joints);
        assert_eq!(solution.joints[3], 0.0);
        assert_eq!(solution.joints[4], 0.0);
        assert!(solution.joints[5].abs() < 1e-9);
    }

    #[test]
    fn test_singular_wrist_rotation_goes_to_j6() {
        let robot = ArmKinematics::new(without_tool());
        let target = aligned_target(&robot, Vector3::new(0.5, 0.1, 0.2), 0.4);

        let solution = robot.inverse(&target);
        assert!(solution.is_singular());
        assert_eq!(solution.joints[3], 0.0);
        assert_eq!(solution.joints[4], 0.0);
        assert!((solution.joints[5] - 0.4).abs() < 1e-9, "{:?}", solution.joints);
    }

    #[test]
    fn test_elbow_branches_mirror_j3() {
        let robot = ArmKinematics::default();
        let target = TargetPose::new(0.5, 0.2, 0.3, 0.0, 45_f64.to_radians(), 30_f64.to_radians());
        let up = robot.inverse_with_branch(&target, IkBranch::new(Elbow::Up, Wrist::Right));
        let down = robot.inverse_with_branch(&target, IkBranch::new(Elbow::Down, Wrist::Right));
        assert!(up.is_valid() && down.is_valid());
        assert!(up.joints[2] > 0.0);
        assert!((up.joints[2] + down.joints[2]).abs() < 1e-12);
        // Same base rotation and same wrist bend, different shoulder
        assert_eq!(up.joints[0], down.joints[0]);
        assert!((up.joints[4] - down.joints[4]).abs() < 1e-9);
        assert!((up.joints[1] - down.joints[1]).abs() > 0.1);
    }

    #[test]
    fn test_wrist_branches_differ_in_j1() {
        let robot = ArmKinematics::default();
        let target = TargetPose::new(0.5, 0.2, 0.3, 0.0, 45_f64.to_radians(), 30_f64.to_radians());
        let right = robot.inverse_with_branch(&target, IkBranch::new(Elbow::Up, Wrist::Right));
        let left = robot.inverse_with_branch(&target, IkBranch::new(Elbow::Up, Wrist::Left));
        assert!(right.is_valid() && left.is_valid());
        assert!(left.joints[0] > right.joints[0]);
    }

    #[test]
    fn test_trait_uses_stored_branch() {
        let target = TargetPose::new(0.5, 0.2, 0.3, 0.0, 45_f64.to_radians(), 30_f64.to_radians());
        let branch = IkBranch::new(Elbow::Down, Wrist::Left);
        let mut robot = ArmKinematics::default();
        robot.set_branch(branch);
        assert_eq!(robot.inverse(&target), robot.inverse_with_branch(&target, branch));
    }

    #[test]
    fn test_joints_are_normalized() {
        let robot = ArmKinematics::default();
        for (x, y) in [(0.5, 0.2), (-0.4, 0.3), (-0.4, -0.3), (0.1, -0.5)] {
            let solution = robot.inverse(&TargetPose::new(x, y, 0.2, 0.4, -0.3, 2.5));
            if solution.is_valid() {
                for q in solution.joints {
                    assert!(q > -std::f64::consts::PI && q <= std::f64::consts::PI, "{:?}", solution);
                }
            }
        }
    }
}
