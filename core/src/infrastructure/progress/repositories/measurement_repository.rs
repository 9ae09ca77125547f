use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    sea_query::OnConflict,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::{entities::app_errors::CoreError, generate_uuid_v7},
        progress::{
            entities::BodyMeasurementSample, ports::MeasurementRepository,
            value_objects::DateRange,
        },
    },
    entity::body_measurements::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresMeasurementRepository {
    pub db: DatabaseConnection,
}

impl PostgresMeasurementRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl MeasurementRepository for PostgresMeasurementRepository {
    async fn get_samples(
        &self,
        user_id: Uuid,
        range: DateRange,
    ) -> Result<Vec<BodyMeasurementSample>, CoreError> {
        let models = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::Date.between(range.start, range.end))
            .order_by_asc(Column::Date)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get body measurements: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(models.into_iter().map(BodyMeasurementSample::from).collect())
    }

    async fn upsert_sample(
        &self,
        sample: BodyMeasurementSample,
    ) -> Result<BodyMeasurementSample, CoreError> {
        let circumferences = sample.circumferences;
        let active_model = ActiveModel {
            id: Set(generate_uuid_v7()),
            user_id: Set(sample.user_id),
            date: Set(sample.date),
            weight_kg: Set(sample.weight_kg),
            body_fat_pct: Set(sample.body_fat_pct),
            muscle_pct: Set(sample.muscle_pct),
            waist_cm: Set(circumferences.waist_cm),
            hip_cm: Set(circumferences.hip_cm),
            chest_cm: Set(circumferences.chest_cm),
            arm_cm: Set(circumferences.arm_cm),
            thigh_cm: Set(circumferences.thigh_cm),
            recorded_at: Set(sample.recorded_at.fixed_offset()),
        };

        let stored = Entity::insert(active_model)
            .on_conflict(
                OnConflict::columns([Column::UserId, Column::Date])
                    .update_columns([
                        Column::WeightKg,
                        Column::BodyFatPct,
                        Column::MusclePct,
                        Column::WaistCm,
                        Column::HipCm,
                        Column::ChestCm,
                        Column::ArmCm,
                        Column::ThighCm,
                        Column::RecordedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to upsert body measurement: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(BodyMeasurementSample::from(stored))
    }
}
