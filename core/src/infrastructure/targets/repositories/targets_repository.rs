use chrono::Utc;
use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait, sea_query::OnConflict};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        targets::{
            entities::{MacroTargets, NutritionTargets},
            ports::TargetsRepository,
        },
    },
    entity::nutrition_targets::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresTargetsRepository {
    pub db: DatabaseConnection,
}

impl PostgresTargetsRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn upsert(
        &self,
        active_model: ActiveModel,
        update_columns: Vec<Column>,
    ) -> Result<NutritionTargets, CoreError> {
        let stored = Entity::insert(active_model)
            .on_conflict(
                OnConflict::column(Column::UserId)
                    .update_columns(update_columns)
                    .to_owned(),
            )
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to store nutrition targets: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(NutritionTargets::from(stored))
    }
}

impl TargetsRepository for PostgresTargetsRepository {
    async fn get_targets(&self, user_id: Uuid) -> Result<Option<NutritionTargets>, CoreError> {
        let model = Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get nutrition targets: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(model.map(NutritionTargets::from))
    }

    async fn set_targets(&self, user_id: Uuid, targets: MacroTargets) -> Result<(), CoreError> {
        let active_model = ActiveModel {
            user_id: Set(user_id),
            kcal: Set(targets.kcal),
            protein_g: Set(targets.protein_g),
            fat_g: Set(targets.fat_g),
            carb_g: Set(targets.carb_g),
            water_l: Set(0.0),
            updated_at: Set(Utc::now().fixed_offset()),
        };

        self.upsert(
            active_model,
            vec![
                Column::Kcal,
                Column::ProteinG,
                Column::FatG,
                Column::CarbG,
                Column::UpdatedAt,
            ],
        )
        .await?;

        Ok(())
    }

    async fn save_targets(&self, targets: NutritionTargets) -> Result<NutritionTargets, CoreError> {
        let active_model = ActiveModel {
            user_id: Set(targets.user_id),
            kcal: Set(targets.kcal),
            protein_g: Set(targets.protein_g),
            fat_g: Set(targets.fat_g),
            carb_g: Set(targets.carb_g),
            water_l: Set(targets.water_l),
            updated_at: Set(targets.updated_at.fixed_offset()),
        };

        self.upsert(
            active_model,
            vec![
                Column::Kcal,
                Column::ProteinG,
                Column::FatG,
                Column::CarbG,
                Column::WaterL,
                Column::UpdatedAt,
            ],
        )
        .await
    }
}
