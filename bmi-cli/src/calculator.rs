use bmi_engine::{EngineError, ValidationErrors, ValidationPolicy};
use bmi_model::{BmiResult, RawMeasurement};
use log::{debug, info};

#[derive(Debug, thiserror::Error)]
pub enum CalculationError {
    #[error("Please fill in all fields")]
    Incomplete(ValidationErrors),
    #[error("{0}")]
    Invalid(ValidationErrors),
    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl CalculationError {
    /// Individual messages to show next to the form.
    pub fn messages(&self) -> Vec<String> {
        match self {
            CalculationError::Incomplete(errors) | CalculationError::Invalid(errors) => {
                errors.iter().map(ToString::to_string).collect()
            }
            CalculationError::Engine(e) => vec![e.to_string()],
        }
    }
}

/// Runs a form submission through validation and the engine.
pub struct Calculator {
    policy: ValidationPolicy,
}

impl Calculator {
    pub fn new(policy: ValidationPolicy) -> Self {
        Self { policy }
    }

    pub fn calculate(&self, raw: &RawMeasurement) -> Result<BmiResult, CalculationError> {
        let measurement = bmi_engine::validate(raw, &self.policy).map_err(|errors| {
            debug!("Validation failed with {} errors", errors.len());
            if errors.has_missing() {
                CalculationError::Incomplete(errors)
            } else {
                CalculationError::Invalid(errors)
            }
        })?;

        let result = bmi_engine::compute(&measurement)?;
        info!("BMI {:.2} ({})", result.value(), result.category());
        Ok(result)
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(ValidationPolicy::default())
    }
}
