use std::collections::BTreeSet;

use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QuerySelect,
    sea_query::OnConflict,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        catalog::{entities::UserIngredientConstraint, ports::ConstraintRepository},
        common::{entities::app_errors::CoreError, generate_timestamp},
    },
    entity::user_ingredients::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresConstraintRepository {
    pub db: DatabaseConnection,
}

impl PostgresConstraintRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ConstraintRepository for PostgresConstraintRepository {
    async fn get_user_ingredient_ids(&self, user_id: Uuid) -> Result<BTreeSet<Uuid>, CoreError> {
        let ids: Vec<Uuid> = Entity::find()
            .select_only()
            .column(Column::IngredientId)
            .filter(Column::UserId.eq(user_id))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get user ingredients: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(ids.into_iter().collect())
    }

    async fn upsert_constraint(
        &self,
        constraint: UserIngredientConstraint,
    ) -> Result<UserIngredientConstraint, CoreError> {
        let (now, timestamp) = generate_timestamp();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v7(timestamp)),
            user_id: Set(constraint.user_id),
            ingredient_id: Set(constraint.ingredient_id),
            category_override: Set(constraint.category_override.clone()),
            priority: Set(constraint.priority),
            created_at: Set(now.fixed_offset()),
            updated_at: Set(now.fixed_offset()),
        };

        let stored = Entity::insert(active_model)
            .on_conflict(
                OnConflict::columns([Column::UserId, Column::IngredientId])
                    .update_columns([Column::CategoryOverride, Column::Priority, Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to upsert user ingredient: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(UserIngredientConstraint::from(stored))
    }
}
