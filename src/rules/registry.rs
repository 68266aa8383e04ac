//! Name-and-coefficient lookup for the bundled learning rules.

use crate::error::ConfigError;

use super::{LearningRule, LogLinear, MardenMood};

/// Identifiers accepted by [`build_rule`].
pub const RULE_NAMES: &[&str] = &["loglinear", "mardenmood"];

/// Construct a bundled rule by identifier and coefficient list.
///
/// `loglinear` takes `[epsilon]`; `mardenmood` takes `[epsilon, c]`. Wrong
/// counts and out-of-domain values are rejected here, before any engine is
/// built.
pub fn build_rule(name: &str, coefficients: &[f64]) -> Result<Box<dyn LearningRule>, ConfigError> {
    match name {
        "loglinear" => {
            if coefficients.len() != 1 {
                return Err(ConfigError::CoefficientCount {
                    rule: "loglinear",
                    expected: 1,
                    got: coefficients.len(),
                });
            }
            Ok(Box::new(LogLinear::new(coefficients[0])?))
        }
        "mardenmood" => {
            if coefficients.len() != 2 {
                return Err(ConfigError::CoefficientCount {
                    rule: "mardenmood",
                    expected: 2,
                    got: coefficients.len(),
                });
            }
            Ok(Box::new(MardenMood::new(coefficients[0], coefficients[1])?))
        }
        other => Err(ConfigError::UnknownRule(other.to_string())),
    }
}
