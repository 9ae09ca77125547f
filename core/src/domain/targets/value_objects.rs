use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AdjustTargetsInput {
    pub window_days: Option<u32>,
}

/// Outcome of one controller step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TargetAdjustment {
    pub previous_kcal: f64,
    pub new_kcal: f64,
    pub new_protein_g: f64,
    pub new_fat_g: f64,
    pub new_carb_g: f64,
    pub observed_slope_kg_per_week: f64,
    pub target_slope_kg_per_week: f64,
}
