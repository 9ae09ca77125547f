use axum::extract::{Path, State};
use nutriplan_core::domain::{
    catalog::entities::MealType,
    meal_plan::{ports::MealPlanService, value_objects::SlotDetails},
};

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::identity::RequiredIdentity;

#[utoipa::path(
    get,
    path = "/slots/{meal_type}",
    tag = "meal-plan",
    summary = "Get meal slot",
    description = "Returns the planned recipe for one meal with ingredient overrides applied and macro totals computed.",
    params(
        ("meal_type" = MealType, Path, description = "breakfast, lunch, dinner or snack"),
    ),
    responses(
        (status = 200, body = SlotDetails),
        (status = 404, description = "No slot planned for this meal type"),
    ),
)]
pub async fn get_slot(
    Path(meal_type): Path<String>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<SlotDetails>, ApiError> {
    let meal_type: MealType = meal_type.parse().map_err(ApiError::from)?;

    let details = state
        .service
        .get_slot_details(identity, meal_type)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(details))
}
