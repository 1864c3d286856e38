//! Supports reading link parameters from YAML file (optional)

use std::path::Path;
use yaml_rust2::{Yaml, YamlLoader};

use crate::parameter_error::ParameterError;
use crate::parameters::dh_kinematics::LinkParameters;

const ROOT_KEY: &str = "dh_link_parameters";

impl LinkParameters {
    /// Read the arm configuration from YAML file. YAML file like this is supported:
    /// ```yaml
    /// # Reference desktop arm
    /// dh_link_parameters:
    ///   base_height: 0.1
    ///   upper_arm: 0.4
    ///   forearm: 0.3
    ///   wrist_offset: 0.1
    ///   tool_length: 0.05
    /// ```
    /// All five values are required. Integers are accepted as well as reals.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ParameterError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Same as [LinkParameters::from_yaml_file], for YAML already in memory.
    pub fn from_yaml_str(contents: &str) -> Result<Self, ParameterError> {
        let docs = YamlLoader::load_from_str(contents)
            .map_err(|e| ParameterError::ParseError(format!("{}", e)))?;
        let doc = docs.first()
            .ok_or_else(|| ParameterError::ParseError("empty YAML document".to_string()))?;

        let section = &doc[ROOT_KEY];
        if section.is_badvalue() {
            return Err(ParameterError::MissingField(ROOT_KEY.to_string()));
        }

        let parameters = LinkParameters {
            base_height: read_length(section, "base_height")?,
            upper_arm: read_length(section, "upper_arm")?,
            forearm: read_length(section, "forearm")?,
            wrist_offset: read_length(section, "wrist_offset")?,
            tool_length: read_length(section, "tool_length")?,
        };

        // Zero length arm segments make the law of cosines divide by zero
        for (name, value) in [("upper_arm", parameters.upper_arm), ("forearm", parameters.forearm)] {
            if value <= 0.0 {
                return Err(ParameterError::InvalidValue { field: name.to_string(), value });
            }
        }

        Ok(parameters)
    }
}

fn read_length(section: &Yaml, field: &str) -> Result<f64, ParameterError> {
    let value = match &section[field] {
        Yaml::Real(text) => text.parse::<f64>()
            .map_err(|e| ParameterError::ParseError(format!("{}: {}", field, e)))?,
        Yaml::Integer(value) => *value as f64,
        Yaml::BadValue => return Err(ParameterError::MissingField(field.to_string())),
        other => return Err(ParameterError::ParseError(
            format!("{} must be a number, got {:?}", field, other))),
    };

    if !value.is_finite() {
        return Err(ParameterError::InvalidValue { field: field.to_string(), value });
    }
    Ok(value)
}
