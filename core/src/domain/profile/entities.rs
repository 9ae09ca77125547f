use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, NaiveDate, NaiveTime, Utc, Weekday};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::catalog::entities::MealType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    VeryActive,
    ExtraActive,
}

impl ActivityLevel {
    /// TDEE multiplier over BMR.
    pub fn factor(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    LoseFat,
    GainMuscle,
    Maintain,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Pace {
    Fast,
    Moderate,
    Slow,
}

/// Daily protein expressed as grams per kg of body weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProteinRange {
    pub min_g_per_kg: f64,
    pub max_g_per_kg: f64,
}

impl ProteinRange {
    pub fn is_valid(&self) -> bool {
        self.min_g_per_kg > 0.0 && self.min_g_per_kg <= self.max_g_per_kg
    }
}

/// Everything the questionnaire stores about a user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserProfile {
    pub user_id: Uuid,
    pub sex: Option<Sex>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub birthdate: Option<NaiveDate>,
    pub activity_level: Option<ActivityLevel>,
    pub country: Option<String>,
    pub goal: Option<Goal>,
    pub target_weight_kg: Option<f64>,
    pub pace: Option<Pace>,
    #[schema(value_type = Vec<String>)]
    pub diet_days: Vec<Weekday>,
    pub protein_target_g: Option<f64>,
    pub protein_range: Option<ProteinRange>,
    pub enabled_meals: BTreeSet<MealType>,
    /// Preferred time of day per meal, used when a slot is (re)planned.
    #[schema(value_type = BTreeMap<String, String>)]
    pub meal_times: BTreeMap<MealType, NaiveTime>,
    pub food_preferences: Vec<String>,
    pub terms_accepted_at: Option<DateTime<Utc>>,
    pub plan_reviewed_at: Option<DateTime<Utc>>,
    pub advice_acknowledged_at: Option<DateTime<Utc>>,
}

impl UserProfile {
    pub fn empty(user_id: Uuid) -> Self {
        Self {
            user_id,
            ..Default::default()
        }
    }

    /// Whole years on `today`.
    pub fn age_on(&self, today: NaiveDate) -> Option<u32> {
        self.birthdate.and_then(|birthdate| today.years_since(birthdate))
    }
}
