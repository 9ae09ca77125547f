use chrono::Utc;
use tracing::info;

use crate::domain::{
    authentication::value_objects::Identity,
    catalog::ports::{CatalogRepository, ConstraintRepository},
    common::{entities::app_errors::CoreError, services::Service},
    meal_plan::ports::MealPlanRepository,
    profile::ports::ProfileRepository,
    progress::{
        entities::BodyMeasurementSample,
        ports::{MeasurementRepository, ProgressService},
        trend::analyze,
        value_objects::{AnalyzeTrendInput, DateRange, RecordMeasurementInput, TrendAnalysis},
    },
    targets::ports::TargetsRepository,
};

impl<CA, UC, MP, MS, NT, UP> ProgressService for Service<CA, UC, MP, MS, NT, UP>
where
    CA: CatalogRepository,
    UC: ConstraintRepository,
    MP: MealPlanRepository,
    MS: MeasurementRepository,
    NT: TargetsRepository,
    UP: ProfileRepository,
{
    async fn record_measurement(
        &self,
        identity: Identity,
        input: RecordMeasurementInput,
    ) -> Result<BodyMeasurementSample, CoreError> {
        input.validate()?;

        let sample = BodyMeasurementSample {
            user_id: identity.id(),
            date: input.date,
            weight_kg: input.weight_kg,
            body_fat_pct: input.body_fat_pct,
            muscle_pct: input.muscle_pct,
            circumferences: input.circumferences,
            recorded_at: Utc::now(),
        };

        let stored = self.measurement_repository.upsert_sample(sample).await?;
        info!(user_id = %stored.user_id, date = %stored.date, "Measurement recorded");

        Ok(stored)
    }

    async fn analyze_trend(
        &self,
        identity: Identity,
        input: AnalyzeTrendInput,
    ) -> Result<TrendAnalysis, CoreError> {
        let window = input
            .window_days
            .unwrap_or(self.planning.trend_window_days);
        if window == 0 {
            return Err(CoreError::Invalid("window must be at least one day".to_string()));
        }

        let end = input.end_date.unwrap_or_else(|| Utc::now().date_naive());
        let range = DateRange::ending_on(end, window);

        let samples = self
            .measurement_repository
            .get_samples(identity.id(), range)
            .await?;

        Ok(analyze(&samples, range))
    }
}
