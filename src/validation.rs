//! Input validation for strike scenarios and GA configuration.
//!
//! Checks structural integrity before a run starts. Detects:
//! - Empty ATO or target list
//! - Duplicate mission numbers / JTAR numbers
//! - Scenarios with zero total target value (no destroyable assets)
//! - Unusable GA parameters
//!
//! All detected conditions are fatal at startup; `GaEngine::new` refuses
//! to construct on any of them.

use std::collections::HashSet;

use crate::ga::attrition::cost_constant;
use crate::ga::GaConfig;
use crate::models::Scenario;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The ATO has no sections (no gene positions).
    EmptyAto,
    /// The target list is empty (no valid gene values).
    EmptyTargetList,
    /// Two entities share the same identifier.
    DuplicateId,
    /// No target holds any destroyable value; the cost constant would be 0.
    ZeroTargetValue,
    /// Population size is zero.
    ZeroPopulation,
    /// Mutation rate is outside [0, 1].
    MutationRateOutOfRange,
    /// Selection retry bound is zero.
    ZeroRetryLimit,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a strike scenario.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_scenario(scenario: &Scenario) -> ValidationResult {
    let mut errors = Vec::new();

    if scenario.sections.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyAto,
            "ATO has no aircraft sections",
        ));
    }
    if scenario.targets.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyTargetList,
            "Scenario has no targets",
        ));
    }

    let mut msns = HashSet::new();
    for section in &scenario.sections {
        if !msns.insert(section.msn.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate mission number: {}", section.msn),
            ));
        }
    }

    let mut jtars = HashSet::new();
    for target in &scenario.targets {
        if !jtars.insert(target.num_jtar) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate JTAR number: {}", target.num_jtar),
            ));
        }
    }

    if !scenario.targets.is_empty() && cost_constant(&scenario.targets) == 0.0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::ZeroTargetValue,
            "No target holds destroyable value; fitness would be meaningless",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates GA run parameters.
pub fn validate_config(config: &GaConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if config.population_size == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::ZeroPopulation,
            "Population size must be positive",
        ));
    }
    if !(config.mutation_rate >= 0.0 && config.mutation_rate <= 1.0) {
        errors.push(ValidationError::new(
            ValidationErrorKind::MutationRateOutOfRange,
            format!("Mutation rate {} is outside [0, 1]", config.mutation_rate),
        ));
    }
    if config.selection_retries == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::ZeroRetryLimit,
            "Selection retry bound must be positive",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AircraftSection, Target};

    #[test]
    fn test_valid_standard_scenario() {
        assert!(validate_scenario(&Scenario::standard()).is_ok());
    }

    #[test]
    fn test_empty_scenario() {
        let errors = validate_scenario(&Scenario::new(Vec::new(), Vec::new())).unwrap_err();
        assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::EmptyAto));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyTargetList));
    }

    #[test]
    fn test_duplicate_mission_number() {
        let scenario = Scenario::new(
            vec![
                AircraftSection::rainbow("0001"),
                AircraftSection::shark("0001"),
            ],
            vec![Target::new(1).with_pers(5)],
        );
        let errors = validate_scenario(&scenario).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("mission")));
    }

    #[test]
    fn test_duplicate_jtar_number() {
        let scenario = Scenario::new(
            vec![AircraftSection::rainbow("0001")],
            vec![Target::new(7).with_pers(5), Target::new(7).with_iads(2)],
        );
        let errors = validate_scenario(&scenario).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("JTAR")));
    }

    #[test]
    fn test_zero_target_value() {
        let scenario = Scenario::new(
            vec![AircraftSection::rainbow("0001")],
            vec![Target::new(1), Target::new(3)],
        );
        let errors = validate_scenario(&scenario).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ZeroTargetValue));
    }

    #[test]
    fn test_valid_default_config() {
        assert!(validate_config(&GaConfig::default()).is_ok());
    }

    #[test]
    fn test_config_rejections() {
        let errors = validate_config(&GaConfig::default().with_population_size(0)).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ZeroPopulation));

        let errors = validate_config(&GaConfig::default().with_mutation_rate(1.5)).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::MutationRateOutOfRange));

        let errors = validate_config(&GaConfig::default().with_mutation_rate(f64::NAN)).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::MutationRateOutOfRange));

        let errors = validate_config(&GaConfig::default().with_selection_retries(0)).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ZeroRetryLimit));
    }

    #[test]
    fn test_multiple_errors_accumulate() {
        let scenario = Scenario::new(
            vec![
                AircraftSection::rainbow("0001"),
                AircraftSection::rainbow("0001"),
            ],
            vec![Target::new(1), Target::new(1)],
        );
        let errors = validate_scenario(&scenario).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
