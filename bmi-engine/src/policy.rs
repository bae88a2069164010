pub const AGE_MIN_YEARS: u8 = 1;
pub const AGE_MAX_YEARS: u8 = 120;
pub const HEIGHT_MIN_CM: f64 = 1.0;
pub const HEIGHT_MAX_CM: f64 = 300.0;
pub const WEIGHT_MIN_KG: f64 = 1.0;
pub const WEIGHT_MAX_KG: f64 = 500.0;

/// Inclusive bounds applied to user input before a BMI is computed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValidationPolicy {
    pub age_years: (u8, u8),
    pub height_cm: (f64, f64),
    pub weight_kg: (f64, f64),
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            age_years: (AGE_MIN_YEARS, AGE_MAX_YEARS),
            height_cm: (HEIGHT_MIN_CM, HEIGHT_MAX_CM),
            weight_kg: (WEIGHT_MIN_KG, WEIGHT_MAX_KG),
        }
    }
}

impl ValidationPolicy {
    pub fn with_height_max_cm(mut self, max: f64) -> Self {
        self.height_cm.1 = max;
        self
    }

    pub fn with_weight_max_kg(mut self, max: f64) -> Self {
        self.weight_kg.1 = max;
        self
    }
}
