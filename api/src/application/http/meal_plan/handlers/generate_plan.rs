use axum::extract::State;
use nutriplan_core::domain::meal_plan::{
    ports::MealPlanService,
    value_objects::{GeneratePlanInput, PlanGeneration, SlotAssignment},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::meal_plan::validators::GeneratePlanValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::identity::RequiredIdentity;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GenerationStatus {
    Generated,
    NoIngredientsConfigured,
    NoCompatibleRecipes,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GeneratePlanResponse {
    pub status: GenerationStatus,
    pub slots: Vec<SlotAssignment>,
}

impl From<PlanGeneration> for GeneratePlanResponse {
    fn from(generation: PlanGeneration) -> Self {
        match generation {
            PlanGeneration::Generated(slots) => Self {
                status: GenerationStatus::Generated,
                slots,
            },
            PlanGeneration::NoIngredientsConfigured => Self {
                status: GenerationStatus::NoIngredientsConfigured,
                slots: Vec::new(),
            },
            PlanGeneration::NoCompatibleRecipes => Self {
                status: GenerationStatus::NoCompatibleRecipes,
                slots: Vec::new(),
            },
        }
    }
}

#[utoipa::path(
    post,
    path = "/generate",
    tag = "meal-plan",
    summary = "Generate meal plan",
    description = "Picks a recipe for each requested meal type from the caller's approved ingredients. An empty plan is reported through `status`, not as an error.",
    responses(
        (status = 200, body = GeneratePlanResponse),
        (status = 400, description = "Invalid payload"),
    ),
    request_body = GeneratePlanValidator
)]
pub async fn generate_plan(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<GeneratePlanValidator>,
) -> Result<Response<GeneratePlanResponse>, ApiError> {
    let generation = state
        .service
        .generate_plan(
            identity,
            GeneratePlanInput {
                meal_types: payload.meal_types,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(generation.into()))
}
