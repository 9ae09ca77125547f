use chrono::NaiveDate;
use nutriplan_core::domain::progress::entities::Circumferences;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RecordMeasurementValidator {
    /// Defaults to today.
    #[serde(default)]
    pub date: Option<NaiveDate>,

    #[validate(range(
        exclusive_min = 0.0,
        max = 500.0,
        message = "weight must be within (0, 500] kg"
    ))]
    pub weight_kg: f64,

    #[serde(default)]
    #[validate(range(min = 0.0, max = 100.0, message = "body fat must be within [0, 100]"))]
    pub body_fat_pct: Option<f64>,

    #[serde(default)]
    #[validate(range(min = 0.0, max = 100.0, message = "muscle must be within [0, 100]"))]
    pub muscle_pct: Option<f64>,

    #[serde(default)]
    pub circumferences: Circumferences,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(weight_kg: f64, body_fat_pct: Option<f64>) -> RecordMeasurementValidator {
        RecordMeasurementValidator {
            date: None,
            weight_kg,
            body_fat_pct,
            muscle_pct: None,
            circumferences: Circumferences::default(),
        }
    }

    #[test]
    fn weight_must_be_positive() {
        assert!(payload(0.0, None).validate().is_err());
        assert!(payload(-3.0, None).validate().is_err());
        assert!(payload(72.4, None).validate().is_ok());
    }

    #[test]
    fn percentages_are_bounded() {
        assert!(payload(72.4, Some(101.0)).validate().is_err());
        assert!(payload(72.4, Some(18.5)).validate().is_ok());
    }

    #[test]
    fn circumferences_are_optional() {
        let payload: RecordMeasurementValidator =
            serde_json::from_str(r#"{"weight_kg": 80.2}"#).expect("payload parses");

        assert_eq!(payload.circumferences, Circumferences::default());
        assert!(payload.date.is_none());
    }
}
