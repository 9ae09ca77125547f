use axum::extract::State;
use chrono::Utc;
use nutriplan_core::domain::progress::{
    entities::BodyMeasurementSample, ports::ProgressService,
    value_objects::RecordMeasurementInput,
};

use crate::application::http::progress::validators::RecordMeasurementValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::identity::RequiredIdentity;

#[utoipa::path(
    post,
    path = "",
    tag = "progress",
    summary = "Record measurement",
    description = "Stores a weigh-in for the given day. A second measurement on the same day replaces the first.",
    responses(
        (status = 201, body = BodyMeasurementSample),
        (status = 400, description = "Out of range values"),
    ),
    request_body = RecordMeasurementValidator
)]
pub async fn record_measurement(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<RecordMeasurementValidator>,
) -> Result<Response<BodyMeasurementSample>, ApiError> {
    let sample = state
        .service
        .record_measurement(
            identity,
            RecordMeasurementInput {
                date: payload.date.unwrap_or_else(|| Utc::now().date_naive()),
                weight_kg: payload.weight_kg,
                body_fat_pct: payload.body_fat_pct,
                muscle_pct: payload.muscle_pct,
                circumferences: payload.circumferences,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(sample))
}
