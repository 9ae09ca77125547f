use tracing::warn;

use crate::{
    domain::catalog::entities::{
        Ingredient, Macros, MealType, Recipe, RecipeLine, UserIngredientConstraint,
    },
    entity::{ingredients, recipe_ingredients, recipes, user_ingredients},
};

impl From<&ingredients::Model> for Ingredient {
    fn from(model: &ingredients::Model) -> Self {
        Self {
            id: model.id,
            name: model.name.clone(),
            category: model.category.clone(),
            macros: Macros::new(
                model.kcal_per_100g,
                model.protein_g_per_100g,
                model.fat_g_per_100g,
                model.carb_g_per_100g,
            ),
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<ingredients::Model> for Ingredient {
    fn from(model: ingredients::Model) -> Self {
        Self::from(&model)
    }
}

impl From<&recipe_ingredients::Model> for RecipeLine {
    fn from(model: &recipe_ingredients::Model) -> Self {
        Self {
            ingredient_id: model.ingredient_id,
            grams: model.grams,
        }
    }
}

/// Build a recipe from its row and its lines, which must already be sorted by
/// position. Rows with an unknown meal type are skipped.
pub fn map_recipe(model: recipes::Model, lines: &[recipe_ingredients::Model]) -> Option<Recipe> {
    let meal_type = match model.meal_type.parse::<MealType>() {
        Ok(meal_type) => meal_type,
        Err(e) => {
            warn!(recipe_id = %model.id, "Skipping recipe: {}", e);
            return None;
        }
    };

    Some(Recipe {
        id: model.id,
        name: model.name,
        meal_type,
        base_servings: u32::try_from(model.base_servings).unwrap_or(1).max(1),
        lines: lines
            .iter()
            .filter(|line| line.recipe_id == model.id)
            .map(RecipeLine::from)
            .collect(),
    })
}

impl From<user_ingredients::Model> for UserIngredientConstraint {
    fn from(model: user_ingredients::Model) -> Self {
        Self {
            user_id: model.user_id,
            ingredient_id: model.ingredient_id,
            category_override: model.category_override,
            priority: model.priority,
        }
    }
}
