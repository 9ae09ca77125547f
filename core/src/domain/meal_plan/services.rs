use std::collections::HashMap;

use tracing::{info, instrument};
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    catalog::{
        entities::{Ingredient, MealType, Recipe},
        ports::{CatalogRepository, ConstraintRepository},
    },
    common::{entities::app_errors::CoreError, services::Service},
    meal_plan::{
        composition::{
            compose_slot, effective_grams, merged_grams, referenced_ingredients,
            substitution_grams,
        },
        entities::{MealPlanSlot, SlotOverrides},
        ports::{MealPlanRepository, MealPlanService},
        scoring::select_recipe,
        value_objects::{
            GeneratePlanInput, PlanGeneration, SlotAssignment, SlotDetails,
            SubstituteIngredientInput,
        },
    },
    profile::ports::ProfileRepository,
    progress::ports::MeasurementRepository,
    targets::ports::TargetsRepository,
};

impl<CA, UC, MP, MS, NT, UP> Service<CA, UC, MP, MS, NT, UP>
where
    CA: CatalogRepository,
{
    async fn ingredient_index(
        &self,
        ids: Vec<Uuid>,
    ) -> Result<HashMap<Uuid, Ingredient>, CoreError> {
        let ingredients = self.catalog_repository.find_ingredients_by_ids(ids).await?;

        Ok(ingredients
            .into_iter()
            .map(|ingredient| (ingredient.id, ingredient))
            .collect())
    }

    async fn slot_recipe(&self, slot: &MealPlanSlot) -> Result<Recipe, CoreError> {
        self.catalog_repository
            .get_recipe_by_id(slot.recipe_id)
            .await?
            .ok_or(CoreError::RecipeNotFound(slot.recipe_id))
    }
}

impl<CA, UC, MP, MS, NT, UP> MealPlanService for Service<CA, UC, MP, MS, NT, UP>
where
    CA: CatalogRepository,
    UC: ConstraintRepository,
    MP: MealPlanRepository,
    MS: MeasurementRepository,
    NT: TargetsRepository,
    UP: ProfileRepository,
{
    #[instrument(skip(self, input), fields(user_id = %identity.id()))]
    async fn generate_plan(
        &self,
        identity: Identity,
        input: GeneratePlanInput,
    ) -> Result<PlanGeneration, CoreError> {
        let user_id = identity.id();

        let approved = self
            .constraint_repository
            .get_user_ingredient_ids(user_id)
            .await?;
        if approved.is_empty() {
            info!("No approved ingredients, skipping plan generation");
            return Ok(PlanGeneration::NoIngredientsConfigured);
        }

        let profile = self.profile_repository.get_user_profile(user_id).await?;

        let mut assignments = Vec::new();

        for meal_type in MealType::ALL
            .into_iter()
            .filter(|meal_type| input.meal_types.contains(meal_type))
        {
            let recipes = self
                .catalog_repository
                .find_recipes_by_meal_type(meal_type)
                .await?;

            let mut ids: Vec<Uuid> = recipes.iter().flat_map(|r| r.ingredient_ids()).collect();
            ids.sort();
            ids.dedup();
            let ingredients = self.ingredient_index(ids).await?;

            let Some(chosen) = select_recipe(&recipes, &approved, &ingredients) else {
                info!(%meal_type, "No compatible recipe for slot");
                continue;
            };

            let previous = self.meal_plan_repository.get_slot(user_id, meal_type).await?;
            let scheduled_at = previous
                .as_ref()
                .and_then(|slot| slot.overrides.scheduled_at())
                .or_else(|| {
                    profile
                        .as_ref()
                        .and_then(|p| p.meal_times.get(&meal_type).copied())
                });

            let slot = match previous {
                Some(mut slot) => {
                    slot.recipe_id = chosen.recipe.id;
                    slot.serving_multiplier = 1.0;
                    slot.overrides = SlotOverrides::with_schedule(scheduled_at);
                    slot.touch();
                    slot
                }
                None => MealPlanSlot::new(
                    user_id,
                    meal_type,
                    chosen.recipe.id,
                    SlotOverrides::with_schedule(scheduled_at),
                ),
            };
            let slot = self.meal_plan_repository.upsert_slot(slot).await?;

            info!(
                %meal_type,
                recipe_id = %chosen.recipe.id,
                matched = chosen.matched,
                kind = ?chosen.kind,
                "Slot planned"
            );

            assignments.push(SlotAssignment {
                meal_type,
                recipe_id: chosen.recipe.id,
                recipe_name: chosen.recipe.name.clone(),
                match_kind: chosen.kind,
                matched_ingredients: chosen.matched,
                total_ingredients: chosen.recipe.lines.len(),
                kcal: chosen.kcal.round(),
                scheduled_at: slot.overrides.scheduled_at(),
            });
        }

        if assignments.is_empty() {
            return Ok(PlanGeneration::NoCompatibleRecipes);
        }

        Ok(PlanGeneration::Generated(assignments))
    }

    async fn get_slot_details(
        &self,
        identity: Identity,
        meal_type: MealType,
    ) -> Result<SlotDetails, CoreError> {
        let slot = self
            .meal_plan_repository
            .get_slot(identity.id(), meal_type)
            .await?
            .ok_or(CoreError::SlotNotFound(meal_type))?;
        let recipe = self.slot_recipe(&slot).await?;
        let ingredients = self
            .ingredient_index(referenced_ingredients(&recipe, &slot.overrides))
            .await?;

        Ok(compose_slot(&slot, &recipe, &ingredients))
    }

    #[instrument(skip(self, input), fields(user_id = %identity.id(), meal_type = %input.meal_type))]
    async fn substitute_ingredient(
        &self,
        identity: Identity,
        input: SubstituteIngredientInput,
    ) -> Result<SlotDetails, CoreError> {
        let user_id = identity.id();
        let from_id = input.from_ingredient_id;
        let to_id = input.to_ingredient_id;
        if from_id == to_id {
            return Err(CoreError::Invalid(
                "cannot substitute an ingredient with itself".to_string(),
            ));
        }

        let approved = self
            .constraint_repository
            .get_user_ingredient_ids(user_id)
            .await?;
        if !approved.contains(&to_id) {
            return Err(CoreError::IngredientNotInConstraints(to_id));
        }

        let mut slot = self
            .meal_plan_repository
            .get_slot(user_id, input.meal_type)
            .await?
            .ok_or(CoreError::SlotNotFound(input.meal_type))?;
        let recipe = self.slot_recipe(&slot).await?;

        let from_grams = effective_grams(&recipe, &slot.overrides, from_id)
            .filter(|grams| *grams > 0.0)
            .ok_or(CoreError::IngredientNotInRecipe(from_id))?;

        let pair = self.ingredient_index(vec![from_id, to_id]).await?;
        let from = pair
            .get(&from_id)
            .ok_or(CoreError::IngredientNotFound(from_id))?;
        let to = pair.get(&to_id).ok_or(CoreError::IngredientNotFound(to_id))?;

        let new_grams = substitution_grams(from_grams, &from.macros, &to.macros);
        if new_grams == 0 {
            return Err(CoreError::Invalid(format!(
                "{} carries no calories to replace",
                from.name
            )));
        }
        let to_grams = merged_grams(effective_grams(&recipe, &slot.overrides, to_id), new_grams);

        slot.overrides.set_ingredient_grams(from_id, 0);
        slot.overrides.set_ingredient_grams(to_id, to_grams);
        slot.touch();
        let slot = self.meal_plan_repository.upsert_slot(slot).await?;

        info!(
            from = %from.name,
            to = %to.name,
            from_grams,
            new_grams,
            to_grams,
            "Ingredient substituted"
        );

        let ingredients = self
            .ingredient_index(referenced_ingredients(&recipe, &slot.overrides))
            .await?;

        Ok(compose_slot(&slot, &recipe, &ingredients))
    }
}
