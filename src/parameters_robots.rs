//! Hardcoded link parameters for a few arm layouts

pub mod dh_kinematics {
    use crate::parameters::dh_kinematics::LinkParameters;

    impl LinkParameters {
        /// The reference desktop arm: 0.1 m shoulder height, 0.4 m upper arm, 0.3 m forearm,
        /// 0.1 m lateral wrist offset and 0.05 m tool.
        pub fn reference_arm() -> Self {
            LinkParameters {
                base_height: 0.1,
                upper_arm: 0.4,
                forearm: 0.3,
                wrist_offset: 0.1,
                tool_length: 0.05,
            }
        }

        /// Same arm without the lateral wrist offset and without a tool, so the wrist
        /// center, the flange and the tool tip coincide.
        pub fn planar_no_offset() -> Self {
            LinkParameters {
                wrist_offset: 0.0,
                tool_length: 0.0,
                ..Self::reference_arm()
            }
        }
    }
}
