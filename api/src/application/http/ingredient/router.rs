use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::approve_ingredient::{__path_approve_ingredient, approve_ingredient};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(approve_ingredient))]
pub struct IngredientApiDoc;

pub fn ingredient_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/ingredients", state.args.server.root_path),
        post(approve_ingredient),
    )
}
