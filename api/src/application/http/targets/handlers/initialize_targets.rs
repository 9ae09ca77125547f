use axum::extract::State;
use nutriplan_core::domain::targets::{entities::NutritionTargets, ports::TargetService};

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::identity::RequiredIdentity;

#[utoipa::path(
    post,
    path = "/initialize",
    tag = "targets",
    summary = "Initialize targets",
    description = "Estimates starting calorie, macro and water targets from the caller's profile.",
    responses(
        (status = 201, body = NutritionTargets),
        (status = 422, description = "Profile lacks data needed for the estimate"),
    ),
)]
pub async fn initialize_targets(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<NutritionTargets>, ApiError> {
    let targets = state
        .service
        .initialize_targets(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(targets))
}
