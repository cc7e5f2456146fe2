//! Error types for intake-core.

use crate::validation::Rule;

#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error(
        "validation failed: {}",
        violations.iter().map(|rule| rule.message()).collect::<Vec<_>>().join("; ")
    )]
    ValidationFailed { violations: Vec<Rule> },
}

pub type IntakeResult<T> = std::result::Result<T, IntakeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_lists_every_violation() {
        let err = IntakeError::ValidationFailed {
            violations: vec![Rule::NameRequired, Rule::SymptomRequired],
        };
        assert_eq!(
            err.to_string(),
            "validation failed: name is required; select at least one symptom"
        );
    }
}
