use axum::extract::State;
use nutriplan_core::domain::targets::{
    ports::TargetService,
    value_objects::{AdjustTargetsInput, TargetAdjustment},
};

use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::targets::validators::AdjustTargetsValidator;
use crate::application::identity::RequiredIdentity;

#[utoipa::path(
    post,
    path = "/adjust",
    tag = "targets",
    summary = "Adjust targets",
    description = "Compares the observed weight slope with the rate expected for the caller's goal and pace, then nudges the calorie target and re-derives macros. The body is optional.",
    responses(
        (status = 200, body = TargetAdjustment),
        (status = 409, description = "No calorie target to adjust yet"),
        (status = 422, description = "Profile lacks goal, pace or weight"),
    ),
    request_body = AdjustTargetsValidator
)]
pub async fn adjust_targets(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    payload: Option<ValidateJson<AdjustTargetsValidator>>,
) -> Result<Response<TargetAdjustment>, ApiError> {
    let window_days = payload.and_then(|ValidateJson(payload)| payload.window_days);

    let adjustment = state
        .service
        .adjust_targets(identity, AdjustTargetsInput { window_days })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(adjustment))
}
