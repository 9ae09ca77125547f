use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::get_trend::{__path_get_trend, get_trend};
use super::handlers::record_measurement::{__path_record_measurement, record_measurement};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(record_measurement))]
pub struct MeasurementApiDoc;

#[derive(OpenApi)]
#[openapi(paths(get_trend))]
pub struct ProgressApiDoc;

pub fn progress_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/measurements", state.args.server.root_path),
            post(record_measurement),
        )
        .route(
            &format!("{}/progress/trend", state.args.server.root_path),
            get(get_trend),
        )
}
