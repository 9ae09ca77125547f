use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Daily energy and macro goals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MacroTargets {
    pub kcal: f64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub carb_g: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutritionTargets {
    pub user_id: Uuid,
    pub kcal: f64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub carb_g: f64,
    pub water_l: f64,
    pub updated_at: DateTime<Utc>,
}

impl NutritionTargets {
    pub fn new(user_id: Uuid, macros: MacroTargets, water_l: f64) -> Self {
        Self {
            user_id,
            kcal: macros.kcal,
            protein_g: macros.protein_g,
            fat_g: macros.fat_g,
            carb_g: macros.carb_g,
            water_l,
            updated_at: Utc::now(),
        }
    }
}
