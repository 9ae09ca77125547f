use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::adjust_targets::{__path_adjust_targets, adjust_targets};
use super::handlers::initialize_targets::{__path_initialize_targets, initialize_targets};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(adjust_targets, initialize_targets))]
pub struct TargetsApiDoc;

pub fn targets_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/targets/adjust", state.args.server.root_path),
            post(adjust_targets),
        )
        .route(
            &format!("{}/targets/initialize", state.args.server.root_path),
            post(initialize_targets),
        )
}
