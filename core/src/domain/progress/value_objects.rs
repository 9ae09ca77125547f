use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{common::entities::app_errors::CoreError, progress::entities::Circumferences};

/// Inclusive calendar range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// The `days` calendar days ending on `end`, both ends included.
    pub fn ending_on(end: NaiveDate, days: u32) -> Self {
        let span = u64::from(days.max(1) - 1);
        let start = end.checked_sub_days(Days::new(span)).unwrap_or(NaiveDate::MIN);
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

#[derive(Debug, Clone)]
pub struct RecordMeasurementInput {
    pub date: NaiveDate,
    pub weight_kg: f64,
    pub body_fat_pct: Option<f64>,
    pub muscle_pct: Option<f64>,
    pub circumferences: Circumferences,
}

impl RecordMeasurementInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        if !(self.weight_kg > 0.0 && self.weight_kg <= 500.0) {
            return Err(CoreError::Invalid(format!(
                "weight must be within (0, 500] kg, got {}",
                self.weight_kg
            )));
        }

        for (name, value) in [("body fat", self.body_fat_pct), ("muscle", self.muscle_pct)] {
            if let Some(pct) = value
                && !(0.0..=100.0).contains(&pct)
            {
                return Err(CoreError::Invalid(format!(
                    "{name} percentage must be within [0, 100], got {pct}"
                )));
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct AnalyzeTrendInput {
    pub window_days: Option<u32>,
    pub end_date: Option<NaiveDate>,
}

/// Weight trend over a window. Averages are absent when the metric has no
/// samples in the window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TrendAnalysis {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub sample_count: usize,
    pub slope_kg_per_week: f64,
    pub avg_weight_kg: Option<f64>,
    pub avg_body_fat_pct: Option<f64>,
    pub avg_muscle_pct: Option<f64>,
    pub latest_weight_kg: Option<f64>,
}
