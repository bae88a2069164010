use bmi_model::{BmiResult, Category, Measurement};
use log::{debug, error};

const HEALTHY_WEIGHT_FROM: f64 = 18.5;
const OVERWEIGHT_FROM: f64 = 25.0;
const OBESITY_FROM: f64 = 30.0;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum EngineError {
    #[error("invalid measurement: height {height_cm} cm, weight {weight_kg} kg")]
    InvalidMeasurement { height_cm: f64, weight_kg: f64 },
}

/// Maps a BMI value onto its band. Lower bounds are inclusive.
pub fn classify(bmi: f64) -> Category {
    if bmi < HEALTHY_WEIGHT_FROM {
        Category::Underweight
    } else if bmi < OVERWEIGHT_FROM {
        Category::HealthyWeight
    } else if bmi < OBESITY_FROM {
        Category::Overweight
    } else {
        Category::Obesity
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Computes the BMI of a validated measurement.
///
/// The value is rounded half away from zero to two decimal places before it
/// is classified, so the category always agrees with the displayed number.
/// Age and gender are ignored.
pub fn compute(measurement: &Measurement) -> Result<BmiResult, EngineError> {
    let height_cm = measurement.height_cm();
    let weight_kg = measurement.weight_kg();
    let is_valid = |x: f64| x.is_finite() && x > 0.0;
    if !is_valid(height_cm) || !is_valid(weight_kg) {
        error!("BMI requested for unvalidated measurement {:?}", measurement);
        return Err(EngineError::InvalidMeasurement {
            height_cm,
            weight_kg,
        });
    }

    let height_m = measurement.height_m();
    let bmi = round_to_hundredths(weight_kg / (height_m * height_m));
    let result = BmiResult::new(bmi, classify(bmi));
    debug!("Computed {:?} from {:?}", result, measurement);

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_boundaries() {
        let test_data = [
            (0.01, Category::Underweight),
            (18.49, Category::Underweight),
            (18.5, Category::HealthyWeight),
            (24.9, Category::HealthyWeight),
            (24.99, Category::HealthyWeight),
            (25.0, Category::Overweight),
            (29.9, Category::Overweight),
            (29.95, Category::Overweight),
            (30.0, Category::Obesity),
            (72.0, Category::Obesity),
        ];

        for (i, (bmi, expected_output)) in test_data.into_iter().enumerate() {
            assert_eq!(classify(bmi), expected_output, "Test case #{}", i);
        }
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_to_hundredths(24.394463), 24.39);
        assert_eq!(round_to_hundredths(15.432098), 15.43);
        assert_eq!(round_to_hundredths(35.15625), 35.16);
        assert_eq!(round_to_hundredths(29.9999), 30.0);
    }

    #[test]
    fn rejects_non_positive_measurements() {
        let test_data = [(0.0, 70.0), (170.0, 0.0), (-170.0, 70.0), (f64::NAN, 70.0)];

        for (i, (height_cm, weight_kg)) in test_data.into_iter().enumerate() {
            let measurement = Measurement::new(30, None, height_cm, weight_kg);
            assert!(
                matches!(
                    compute(&measurement),
                    Err(EngineError::InvalidMeasurement { .. })
                ),
                "Test case #{}",
                i
            );
        }
    }
}
