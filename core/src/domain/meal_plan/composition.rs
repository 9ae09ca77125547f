//! Effective slot composition and calorie-preserving substitution.

use std::collections::HashMap;

use tracing::warn;
use uuid::Uuid;

use crate::domain::{
    catalog::entities::{Ingredient, Macros, Recipe},
    meal_plan::{
        entities::{MealPlanSlot, SlotOverrides},
        value_objects::{EffectiveLine, SlotDetails},
    },
};

/// Floor for the kcal/g of a substitution target, so zero-calorie foods do
/// not divide by zero.
pub const MIN_KCAL_PER_GRAM: f64 = 0.01;

/// Upper bound for substituted grams.
pub const MAX_SUBSTITUTION_GRAMS: f64 = 1000.0;

/// Grams of an ingredient as currently eaten in the slot: its override when
/// one exists, else the recipe's base grams. `None` when the ingredient is
/// not part of the slot at all.
pub fn effective_grams(
    recipe: &Recipe,
    overrides: &SlotOverrides,
    ingredient_id: Uuid,
) -> Option<f64> {
    overrides
        .ingredient_grams(ingredient_id)
        .map(f64::from)
        .or_else(|| recipe.line_for(ingredient_id).map(|line| line.grams))
}

/// Grams of `to` carrying the same calories as `from_grams` of `from`,
/// rounded to the gram and clamped to `[0, MAX_SUBSTITUTION_GRAMS]`.
pub fn substitution_grams(from_grams: f64, from: &Macros, to: &Macros) -> u32 {
    let to_kcal_per_gram = to.kcal_per_gram().max(MIN_KCAL_PER_GRAM);
    let grams = (from_grams * from.kcal_per_gram() / to_kcal_per_gram).round();

    grams.clamp(0.0, MAX_SUBSTITUTION_GRAMS) as u32
}

/// Grams of the target after a substitution: what the slot already holds of
/// it plus the replacement, clamped to `MAX_SUBSTITUTION_GRAMS`.
pub fn merged_grams(existing: Option<f64>, replacement: u32) -> u32 {
    let total = existing.unwrap_or(0.0).max(0.0) + f64::from(replacement);

    total.round().clamp(0.0, MAX_SUBSTITUTION_GRAMS) as u32
}

/// (ingredient, grams, added) for every line that is actually eaten: recipe
/// lines with overrides applied, then ingredients that only exist through an
/// override. Removed lines are left out.
pub fn effective_composition(recipe: &Recipe, overrides: &SlotOverrides) -> Vec<(Uuid, f64, bool)> {
    let mut lines: Vec<(Uuid, f64, bool)> = recipe
        .lines
        .iter()
        .map(|line| {
            let grams = overrides
                .ingredient_grams(line.ingredient_id)
                .map(f64::from)
                .unwrap_or(line.grams);
            (line.ingredient_id, grams, false)
        })
        .filter(|(_, grams, _)| *grams > 0.0)
        .collect();

    lines.extend(
        overrides
            .ingredient_overrides()
            .filter(|(id, grams)| *grams > 0 && recipe.line_for(*id).is_none())
            .map(|(id, grams)| (id, f64::from(grams), true)),
    );

    lines
}

/// Every ingredient id the slot view needs to resolve.
pub fn referenced_ingredients(recipe: &Recipe, overrides: &SlotOverrides) -> Vec<Uuid> {
    let mut ids: Vec<Uuid> = recipe.ingredient_ids().collect();
    ids.extend(overrides.ingredient_overrides().map(|(id, _)| id));
    ids.sort();
    ids.dedup();
    ids
}

/// Build the eaten view of a slot. Totals are summed from unrounded line
/// values, scaled by the serving multiplier, then rounded.
pub fn compose_slot(
    slot: &MealPlanSlot,
    recipe: &Recipe,
    ingredients: &HashMap<Uuid, Ingredient>,
) -> SlotDetails {
    let mut totals = Macros::default();
    let mut lines = Vec::new();

    for (ingredient_id, grams, added) in effective_composition(recipe, &slot.overrides) {
        let Some(ingredient) = ingredients.get(&ingredient_id) else {
            warn!(%ingredient_id, recipe_id = %recipe.id, "Slot references unknown ingredient");
            continue;
        };

        let macros = ingredient.macros.for_grams(grams);
        totals += macros;
        lines.push(EffectiveLine {
            ingredient_id,
            name: ingredient.name.clone(),
            grams,
            macros: macros.rounded(),
            added,
        });
    }

    SlotDetails {
        meal_type: slot.meal_type,
        recipe_id: recipe.id,
        recipe_name: recipe.name.clone(),
        serving_multiplier: slot.serving_multiplier,
        scheduled_at: slot.overrides.scheduled_at(),
        lines,
        totals: totals.scale(slot.serving_multiplier).rounded(),
    }
}
