use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    sea_query::OnConflict,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        catalog::entities::MealType,
        common::entities::app_errors::CoreError,
        meal_plan::{
            entities::{MealPlanSlot, OverrideEntry},
            ports::MealPlanRepository,
        },
    },
    entity::meal_plan_slots::{ActiveModel, Column, Entity},
    infrastructure::meal_plan::mappers::map_slot,
};

#[derive(Debug, Clone)]
pub struct PostgresMealPlanRepository {
    pub db: DatabaseConnection,
}

impl PostgresMealPlanRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl MealPlanRepository for PostgresMealPlanRepository {
    async fn get_slot(
        &self,
        user_id: Uuid,
        meal_type: MealType,
    ) -> Result<Option<MealPlanSlot>, CoreError> {
        let model = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::MealType.eq(meal_type.as_str()))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get meal plan slot: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(model.and_then(map_slot))
    }

    async fn upsert_slot(&self, slot: MealPlanSlot) -> Result<MealPlanSlot, CoreError> {
        let overrides = serde_json::to_value::<Vec<OverrideEntry>>(slot.overrides.entries())
            .map_err(|e| {
                error!("Failed to serialize slot overrides: {}", e);
                CoreError::InternalServerError
            })?;

        let active_model = ActiveModel {
            id: Set(slot.id),
            user_id: Set(slot.user_id),
            meal_type: Set(slot.meal_type.as_str().to_string()),
            recipe_id: Set(slot.recipe_id),
            serving_multiplier: Set(slot.serving_multiplier),
            overrides: Set(overrides),
            created_at: Set(slot.created_at.fixed_offset()),
            updated_at: Set(slot.updated_at.fixed_offset()),
        };

        // The row id and created_at of an existing slot are kept.
        let stored = Entity::insert(active_model)
            .on_conflict(
                OnConflict::columns([Column::UserId, Column::MealType])
                    .update_columns([
                        Column::RecipeId,
                        Column::ServingMultiplier,
                        Column::Overrides,
                        Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to upsert meal plan slot: {}", e);
                CoreError::InternalServerError
            })?;

        map_slot(stored).ok_or(CoreError::InternalServerError)
    }
}
