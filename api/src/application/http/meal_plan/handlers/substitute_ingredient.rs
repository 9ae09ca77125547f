use axum::extract::{Path, State};
use nutriplan_core::domain::{
    catalog::entities::MealType,
    meal_plan::{
        ports::MealPlanService,
        value_objects::{SlotDetails, SubstituteIngredientInput},
    },
};

use crate::application::http::meal_plan::validators::SubstituteIngredientValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::identity::RequiredIdentity;

#[utoipa::path(
    post,
    path = "/slots/{meal_type}/substitutions",
    tag = "meal-plan",
    summary = "Substitute ingredient",
    description = "Swaps one ingredient of a planned meal for another approved ingredient, scaling grams so calories stay the same.",
    params(
        ("meal_type" = MealType, Path, description = "breakfast, lunch, dinner or snack"),
    ),
    responses(
        (status = 200, body = SlotDetails),
        (status = 400, description = "Ingredient not approved or not in the recipe"),
        (status = 404, description = "No slot planned for this meal type"),
    ),
    request_body = SubstituteIngredientValidator
)]
pub async fn substitute_ingredient(
    Path(meal_type): Path<String>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<SubstituteIngredientValidator>,
) -> Result<Response<SlotDetails>, ApiError> {
    let meal_type: MealType = meal_type.parse().map_err(ApiError::from)?;

    let details = state
        .service
        .substitute_ingredient(
            identity,
            SubstituteIngredientInput {
                meal_type,
                from_ingredient_id: payload.from_ingredient_id,
                to_ingredient_id: payload.to_ingredient_id,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(details))
}
