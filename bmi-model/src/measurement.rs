#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Gender {
    Male,
    Female,
}

/// Form values exactly as the user entered them. Nothing here has been
/// checked yet; see `bmi_engine::validator` for turning it into a
/// [`Measurement`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RawMeasurement {
    #[cfg_attr(feature = "serde", serde(deserialize_with = "raw::field"))]
    pub age: String,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "raw::optional_field"))]
    pub gender: Option<String>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "raw::field"))]
    pub height: String,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "raw::field"))]
    pub weight: String,
}

impl RawMeasurement {
    pub fn new(
        age: impl Into<String>,
        gender: Option<&str>,
        height: impl Into<String>,
        weight: impl Into<String>,
    ) -> Self {
        Self {
            age: age.into(),
            gender: gender.map(str::to_owned),
            height: height.into(),
            weight: weight.into(),
        }
    }
}

#[cfg(feature = "serde")]
mod raw {
    use std::fmt;

    use serde::{de::Visitor, Deserializer};

    struct RawVisitor;

    impl<'de> Visitor<'de> for RawVisitor {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "a number or a string containing one")
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(v.to_owned())
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(v.to_string())
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(v.to_string())
        }

        fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(v.to_string())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(String::new())
        }
    }

    pub fn field<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(RawVisitor)
    }

    pub fn optional_field<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = deserializer.deserialize_any(RawVisitor)?;
        Ok(Some(value).filter(|v| !v.is_empty()))
    }
}

/// A validated set of body measurements.
///
/// Age and gender are carried along with the measurement but take no part in
/// the BMI formula.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Measurement {
    age_years: u8,
    gender: Option<Gender>,
    height_cm: f64,
    weight_kg: f64,
}

impl Measurement {
    pub fn new(age_years: u8, gender: Option<Gender>, height_cm: f64, weight_kg: f64) -> Self {
        Self {
            age_years,
            gender,
            height_cm,
            weight_kg,
        }
    }

    pub fn age_years(&self) -> u8 {
        self.age_years
    }

    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }

    pub fn height_m(&self) -> f64 {
        self.height_cm / 100.0
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn gender_from_str() {
        let test_data = [
            ("male", Some(Gender::Male)),
            ("Female", Some(Gender::Female)),
            ("MALE", Some(Gender::Male)),
            ("other", None),
            ("", None),
        ];

        for (i, (input, expected_output)) in test_data.into_iter().enumerate() {
            assert_eq!(
                Gender::from_str(input).ok(),
                expected_output,
                "Test case #{}",
                i
            );
        }
    }

    #[test]
    fn height_is_converted_to_meters() {
        let measurement = Measurement::new(25, None, 170.0, 70.5);
        assert_eq!(measurement.height_m(), 1.7);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn raw_measurement_accepts_numbers_and_strings() {
        let raw: RawMeasurement = serde_json::from_str(
            r#"{"age": 25, "gender": "male", "height": "170", "weight": 70.5}"#,
        )
        .unwrap();

        assert_eq!(raw, RawMeasurement::new("25", Some("male"), "170", "70.5"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn raw_measurement_missing_fields_are_blank() {
        let raw: RawMeasurement = serde_json::from_str(r#"{"height": 180}"#).unwrap();

        assert_eq!(raw.age, "");
        assert_eq!(raw.gender, None);
        assert_eq!(raw.height, "180");
    }
}
