use sea_orm::{DatabaseConnection, EntityTrait};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        profile::{entities::UserProfile, ports::ProfileRepository},
    },
    entity::user_profiles::Entity,
};

#[derive(Debug, Clone)]
pub struct PostgresProfileRepository {
    pub db: DatabaseConnection,
}

impl PostgresProfileRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ProfileRepository for PostgresProfileRepository {
    async fn get_user_profile(&self, user_id: Uuid) -> Result<Option<UserProfile>, CoreError> {
        let model = Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get user profile: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(model.map(UserProfile::from))
    }
}
