use std::{
    collections::HashMap,
    fmt,
    ops::{Add, AddAssign},
    str::FromStr,
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::{entities::app_errors::CoreError, generate_timestamp, round1};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    /// Canonical slot order for a day.
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "breakfast" => Ok(MealType::Breakfast),
            "lunch" => Ok(MealType::Lunch),
            "dinner" => Ok(MealType::Dinner),
            "snack" => Ok(MealType::Snack),
            other => Err(CoreError::Invalid(format!("unknown meal type '{other}'"))),
        }
    }
}

/// Energy and macronutrients. Used both for per-100 g profiles and for totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Macros {
    pub kcal: f64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub carb_g: f64,
}

impl Macros {
    pub fn new(kcal: f64, protein_g: f64, fat_g: f64, carb_g: f64) -> Self {
        Self {
            kcal,
            protein_g,
            fat_g,
            carb_g,
        }
    }

    /// Contribution of `grams` of a food whose per-100 g profile is `self`.
    pub fn for_grams(&self, grams: f64) -> Macros {
        self.scale(grams / 100.0)
    }

    pub fn scale(&self, factor: f64) -> Macros {
        Macros {
            kcal: self.kcal * factor,
            protein_g: self.protein_g * factor,
            fat_g: self.fat_g * factor,
            carb_g: self.carb_g * factor,
        }
    }

    pub fn kcal_per_gram(&self) -> f64 {
        self.kcal / 100.0
    }

    /// kcal to whole units, gram macros to one decimal.
    pub fn rounded(&self) -> Macros {
        Macros {
            kcal: self.kcal.round(),
            protein_g: round1(self.protein_g),
            fat_g: round1(self.fat_g),
            carb_g: round1(self.carb_g),
        }
    }
}

impl Add for Macros {
    type Output = Macros;

    fn add(self, rhs: Macros) -> Macros {
        Macros {
            kcal: self.kcal + rhs.kcal,
            protein_g: self.protein_g + rhs.protein_g,
            fat_g: self.fat_g + rhs.fat_g,
            carb_g: self.carb_g + rhs.carb_g,
        }
    }
}

impl AddAssign for Macros {
    fn add_assign(&mut self, rhs: Macros) {
        *self = *self + rhs;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Ingredient {
    pub id: Uuid,
    pub name: String,
    pub category: Option<String>,
    /// Per 100 g.
    pub macros: Macros,
    pub created_at: DateTime<Utc>,
}

impl Ingredient {
    pub fn new(name: String, category: Option<String>, macros: Macros) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            name,
            category,
            macros,
            created_at: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeLine {
    pub ingredient_id: Uuid,
    pub grams: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    pub id: Uuid,
    pub name: String,
    pub meal_type: MealType,
    pub base_servings: u32,
    pub lines: Vec<RecipeLine>,
}

impl Recipe {
    pub fn new(
        name: String,
        meal_type: MealType,
        base_servings: u32,
        lines: Vec<RecipeLine>,
    ) -> Self {
        let (_, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            name,
            meal_type,
            base_servings,
            lines,
        }
    }

    pub fn ingredient_ids(&self) -> impl Iterator<Item = Uuid> + '_ {
        self.lines.iter().map(|line| line.ingredient_id)
    }

    pub fn line_for(&self, ingredient_id: Uuid) -> Option<&RecipeLine> {
        self.lines
            .iter()
            .find(|line| line.ingredient_id == ingredient_id)
    }

    /// Derived totals for the base composition. Lines whose ingredient is not
    /// in `ingredients` contribute nothing.
    pub fn macros(&self, ingredients: &HashMap<Uuid, Ingredient>) -> Macros {
        self.lines
            .iter()
            .filter_map(|line| {
                ingredients
                    .get(&line.ingredient_id)
                    .map(|ingredient| ingredient.macros.for_grams(line.grams))
            })
            .fold(Macros::default(), |acc, m| acc + m)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserIngredientConstraint {
    pub user_id: Uuid,
    pub ingredient_id: Uuid,
    pub category_override: Option<String>,
    pub priority: Option<i32>,
}
