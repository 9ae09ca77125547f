use axum::extract::State;
use nutriplan_core::domain::catalog::{
    entities::UserIngredientConstraint, ports::ConstraintService,
    value_objects::ApproveIngredientInput,
};

use crate::application::http::ingredient::validators::ApproveIngredientValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::identity::RequiredIdentity;

#[utoipa::path(
    post,
    path = "",
    tag = "ingredient",
    summary = "Approve ingredient",
    description = "Adds an ingredient to the caller's approved list. Unknown names are created in the catalog with zero macros.",
    responses(
        (status = 201, body = UserIngredientConstraint),
        (status = 400, description = "Invalid payload"),
    ),
    request_body = ApproveIngredientValidator
)]
pub async fn approve_ingredient(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<ApproveIngredientValidator>,
) -> Result<Response<UserIngredientConstraint>, ApiError> {
    let constraint = state
        .service
        .approve_ingredient(
            identity,
            ApproveIngredientInput {
                name: payload.name,
                category: payload.category,
                priority: payload.priority,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(constraint))
}
