use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::get_next_step::{__path_get_next_step, get_next_step};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_next_step))]
pub struct OnboardingApiDoc;

pub fn onboarding_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/onboarding/next-step", state.args.server.root_path),
        get(get_next_step),
    )
}
