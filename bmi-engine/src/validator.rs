use std::str::FromStr;

use bmi_model::{Gender, Measurement, RawMeasurement};
use itertools::Itertools;
use log::debug;

use crate::policy::ValidationPolicy;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Problem {
    Missing,
    NotANumber,
    OutOfRange,
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a valid age between {min} and {max}.")]
    InvalidAge { problem: Problem, min: u8, max: u8 },
    #[error("Height must be between {min}-{max} cm.")]
    InvalidHeight { problem: Problem, min: f64, max: f64 },
    #[error("Weight must be between {min}-{max} kg.")]
    InvalidWeight { problem: Problem, min: f64, max: f64 },
    #[error("Gender must be either male or female, got \"{value}\".")]
    InvalidGender { value: String },
}

impl ValidationError {
    pub fn problem(&self) -> Problem {
        match self {
            ValidationError::InvalidAge { problem, .. }
            | ValidationError::InvalidHeight { problem, .. }
            | ValidationError::InvalidWeight { problem, .. } => *problem,
            ValidationError::InvalidGender { .. } => Problem::OutOfRange,
        }
    }
}

/// Every field failure found in a single submission.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{}", .0.iter().join(" "))]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when at least one required field was left blank.
    pub fn has_missing(&self) -> bool {
        self.0.iter().any(|e| e.problem() == Problem::Missing)
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

fn parse_number<T: FromStr>(raw: &str) -> Result<T, Problem> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(Problem::Missing);
    }
    raw.parse().map_err(|_| Problem::NotANumber)
}

fn parse_real(raw: &str, (min, max): (f64, f64)) -> Result<f64, Problem> {
    let value: f64 = parse_number(raw)?;
    if !value.is_finite() {
        Err(Problem::NotANumber)
    } else if value <= 0.0 || value < min || value > max {
        Err(Problem::OutOfRange)
    } else {
        Ok(value)
    }
}

impl ValidationPolicy {
    pub fn validate_age(&self, raw: &str) -> Result<u8, ValidationError> {
        let (min, max) = self.age_years;
        parse_number::<i64>(raw)
            .and_then(|age| {
                u8::try_from(age)
                    .ok()
                    .filter(|age| (min..=max).contains(age))
                    .ok_or(Problem::OutOfRange)
            })
            .map_err(|problem| ValidationError::InvalidAge { problem, min, max })
    }

    pub fn validate_height(&self, raw: &str) -> Result<f64, ValidationError> {
        let (min, max) = self.height_cm;
        parse_real(raw, self.height_cm)
            .map_err(|problem| ValidationError::InvalidHeight { problem, min, max })
    }

    pub fn validate_weight(&self, raw: &str) -> Result<f64, ValidationError> {
        let (min, max) = self.weight_kg;
        parse_real(raw, self.weight_kg)
            .map_err(|problem| ValidationError::InvalidWeight { problem, min, max })
    }
}

pub fn validate_age(raw: &str) -> Result<u8, ValidationError> {
    ValidationPolicy::default().validate_age(raw)
}

pub fn validate_height(raw: &str) -> Result<f64, ValidationError> {
    ValidationPolicy::default().validate_height(raw)
}

pub fn validate_weight(raw: &str) -> Result<f64, ValidationError> {
    ValidationPolicy::default().validate_weight(raw)
}

/// Gender is optional; a blank value means it was not given.
pub fn validate_gender(raw: Option<&str>) -> Result<Option<Gender>, ValidationError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(value) => Gender::from_str(value)
            .map(Some)
            .map_err(|_| ValidationError::InvalidGender {
                value: value.to_owned(),
            }),
    }
}

/// Runs every field validator and reports all failures together.
pub fn validate(
    raw: &RawMeasurement,
    policy: &ValidationPolicy,
) -> Result<Measurement, ValidationErrors> {
    let age = policy.validate_age(&raw.age);
    let gender = validate_gender(raw.gender.as_deref());
    let height = policy.validate_height(&raw.height);
    let weight = policy.validate_weight(&raw.weight);

    match (age, gender, height, weight) {
        (Ok(age), Ok(gender), Ok(height), Ok(weight)) => {
            Ok(Measurement::new(age, gender, height, weight))
        }
        (age, gender, height, weight) => {
            let errors: Vec<_> = [age.err(), gender.err(), height.err(), weight.err()]
                .into_iter()
                .flatten()
                .collect();
            debug!("Rejected {:?}: {:?}", raw, errors);
            Err(ValidationErrors(errors))
        }
    }
}
