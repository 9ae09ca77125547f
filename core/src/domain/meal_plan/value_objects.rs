use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::catalog::entities::{Macros, MealType};

#[derive(Debug, Clone)]
pub struct GeneratePlanInput {
    pub meal_types: Vec<MealType>,
}

#[derive(Debug, Clone)]
pub struct SubstituteIngredientInput {
    pub meal_type: MealType,
    pub from_ingredient_id: Uuid,
    pub to_ingredient_id: Uuid,
}

/// Whether every line of the chosen recipe is approved, or only some.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Strict,
    Partial,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SlotAssignment {
    pub meal_type: MealType,
    pub recipe_id: Uuid,
    pub recipe_name: String,
    pub match_kind: MatchKind,
    pub matched_ingredients: usize,
    pub total_ingredients: usize,
    pub kcal: f64,
    #[schema(value_type = Option<String>)]
    pub scheduled_at: Option<NaiveTime>,
}

/// Outcome of a generation run. The two empty variants are expected states
/// the caller should turn into guidance, not failures.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanGeneration {
    Generated(Vec<SlotAssignment>),
    NoIngredientsConfigured,
    NoCompatibleRecipes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EffectiveLine {
    pub ingredient_id: Uuid,
    pub name: String,
    pub grams: f64,
    pub macros: Macros,
    /// Present only through an override, not in the recipe itself.
    pub added: bool,
}

/// A slot as eaten: recipe lines with overrides applied and totals derived
/// from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SlotDetails {
    pub meal_type: MealType,
    pub recipe_id: Uuid,
    pub recipe_name: String,
    pub serving_multiplier: f64,
    #[schema(value_type = Option<String>)]
    pub scheduled_at: Option<NaiveTime>,
    pub lines: Vec<EffectiveLine>,
    pub totals: Macros,
}
