use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Body circumferences in centimetres.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Circumferences {
    pub waist_cm: Option<f64>,
    pub hip_cm: Option<f64>,
    pub chest_cm: Option<f64>,
    pub arm_cm: Option<f64>,
    pub thigh_cm: Option<f64>,
}

/// One weigh-in. At most one per user per calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BodyMeasurementSample {
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub weight_kg: f64,
    pub body_fat_pct: Option<f64>,
    pub muscle_pct: Option<f64>,
    pub circumferences: Circumferences,
    pub recorded_at: DateTime<Utc>,
}
