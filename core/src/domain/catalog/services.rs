use tracing::info;

use crate::domain::{
    authentication::value_objects::Identity,
    catalog::{
        entities::{Ingredient, Macros, UserIngredientConstraint},
        ports::{CatalogRepository, ConstraintRepository, ConstraintService},
        value_objects::ApproveIngredientInput,
    },
    common::{entities::app_errors::CoreError, services::Service},
    meal_plan::ports::MealPlanRepository,
    profile::ports::ProfileRepository,
    progress::ports::MeasurementRepository,
    targets::ports::TargetsRepository,
};

impl<CA, UC, MP, MS, NT, UP> ConstraintService for Service<CA, UC, MP, MS, NT, UP>
where
    CA: CatalogRepository,
    UC: ConstraintRepository,
    MP: MealPlanRepository,
    MS: MeasurementRepository,
    NT: TargetsRepository,
    UP: ProfileRepository,
{
    async fn approve_ingredient(
        &self,
        identity: Identity,
        input: ApproveIngredientInput,
    ) -> Result<UserIngredientConstraint, CoreError> {
        let name = input.name.trim().to_string();
        if name.is_empty() {
            return Err(CoreError::Invalid("ingredient name is required".to_string()));
        }

        let ingredient = match self
            .catalog_repository
            .find_ingredient_by_name(name.clone())
            .await?
        {
            Some(ingredient) => ingredient,
            None => {
                // Custom ingredient: the macro profile is filled in later by
                // catalog maintenance.
                let ingredient = Ingredient::new(name, input.category.clone(), Macros::default());
                let created = self.catalog_repository.create_ingredient(ingredient).await?;
                info!(
                    ingredient_id = %created.id,
                    name = %created.name,
                    "Custom ingredient added to catalog"
                );
                created
            }
        };

        let constraint = UserIngredientConstraint {
            user_id: identity.id(),
            ingredient_id: ingredient.id,
            category_override: input.category,
            priority: input.priority,
        };

        self.constraint_repository
            .upsert_constraint(constraint)
            .await
    }
}
