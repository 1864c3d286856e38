//! Defines the link parameter data structure

pub mod dh_kinematics {
    use std::f64::consts::FRAC_PI_2;
    use crate::dh::DhParameter;

    /// Link lengths of the arm. See [parameters_robots.rs](parameters_robots.rs) for presets.
    ///
    /// The joint frames are fixed by this crate:
    ///
    /// | joint | d              | a           | alpha |
    /// |-------|----------------|-------------|-------|
    /// | 1     | `base_height`  | 0           | -90°  |
    /// | 2     | 0              | `upper_arm` | 0     |
    /// | 3     | 0              | `forearm`   | 0     |
    /// | 4     | `wrist_offset` | 0           | -90°  |
    /// | 5     | 0              | 0           | 90°   |
    /// | 6     | `tool_length`  | 0           | 0     |
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct LinkParameters {
        /// Height of the shoulder (joint 2 axis) above the base (d1).
        pub base_height: f64,

        /// Distance between joint 2 and joint 3 (a2).
        pub upper_arm: f64,

        /// Distance between joint 3 and the wrist (a3).
        pub forearm: f64,

        /// Lateral offset of the wrist, along the joint 2 axis (d4).
        pub wrist_offset: f64,

        /// Distance from the wrist center to the tool tip (d6).
        pub tool_length: f64,
    }

    impl LinkParameters {
        pub fn new(base_height: f64, upper_arm: f64, forearm: f64,
                   wrist_offset: f64, tool_length: f64) -> Self {
            LinkParameters { base_height, upper_arm, forearm, wrist_offset, tool_length }
        }

        /// DH rows for all six joints with every joint value at zero.
        pub fn dh_template(&self) -> [DhParameter; 6] {
            [
                DhParameter::new(0.0, self.base_height, 0.0, -FRAC_PI_2),
                DhParameter::new(0.0, 0.0, self.upper_arm, 0.0),
                DhParameter::new(0.0, 0.0, self.forearm, 0.0),
                DhParameter::new(0.0, self.wrist_offset, 0.0, -FRAC_PI_2),
                DhParameter::new(0.0, 0.0, 0.0, FRAC_PI_2),
                DhParameter::new(0.0, self.tool_length, 0.0, 0.0),
            ]
        }

        /// Longest distance from the shoulder the wrist can reach.
        pub fn max_reach(&self) -> f64 {
            self.upper_arm + self.forearm
        }

        /// Shortest distance from the shoulder the wrist can reach.
        pub fn min_reach(&self) -> f64 {
            (self.upper_arm - self.forearm).abs()
        }

        /// Convert to string yaml representation (quick viewing, etc).
        pub fn to_yaml(&self) -> String {
            format!(
                "dh_link_parameters:\n  \
              base_height: {}\n  \
              upper_arm: {}\n  \
              forearm: {}\n  \
              wrist_offset: {}\n  \
              tool_length: {}\n",
                self.base_height,
                self.upper_arm,
                self.forearm,
                self.wrist_offset,
                self.tool_length,
            )
        }
    }

    impl Default for LinkParameters {
        fn default() -> Self {
            Self::reference_arm()
        }
    }
}
