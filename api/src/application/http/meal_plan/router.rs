use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::generate_plan::{__path_generate_plan, generate_plan};
use super::handlers::get_slot::{__path_get_slot, get_slot};
use super::handlers::substitute_ingredient::{__path_substitute_ingredient, substitute_ingredient};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(generate_plan, get_slot, substitute_ingredient))]
pub struct MealPlanApiDoc;

pub fn meal_plan_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/meal-plan/generate", state.args.server.root_path),
            post(generate_plan),
        )
        .route(
            &format!(
                "{}/meal-plan/slots/{{meal_type}}",
                state.args.server.root_path
            ),
            get(get_slot),
        )
        .route(
            &format!(
                "{}/meal-plan/slots/{{meal_type}}/substitutions",
                state.args.server.root_path
            ),
            post(substitute_ingredient),
        )
}
