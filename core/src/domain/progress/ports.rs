use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    progress::{
        entities::BodyMeasurementSample,
        value_objects::{AnalyzeTrendInput, DateRange, RecordMeasurementInput, TrendAnalysis},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait MeasurementRepository: Send + Sync {
    /// Samples within `range`, ascending by date.
    fn get_samples(
        &self,
        user_id: Uuid,
        range: DateRange,
    ) -> impl Future<Output = Result<Vec<BodyMeasurementSample>, CoreError>> + Send;

    /// Insert, or overwrite the sample already stored for that day.
    fn upsert_sample(
        &self,
        sample: BodyMeasurementSample,
    ) -> impl Future<Output = Result<BodyMeasurementSample, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ProgressService: Send + Sync {
    fn record_measurement(
        &self,
        identity: Identity,
        input: RecordMeasurementInput,
    ) -> impl Future<Output = Result<BodyMeasurementSample, CoreError>> + Send;

    fn analyze_trend(
        &self,
        identity: Identity,
        input: AnalyzeTrendInput,
    ) -> impl Future<Output = Result<TrendAnalysis, CoreError>> + Send;
}
