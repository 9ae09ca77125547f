use axum::extract::{Query, State};
use chrono::NaiveDate;
use nutriplan_core::domain::progress::{
    ports::ProgressService,
    value_objects::{AnalyzeTrendInput, TrendAnalysis},
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::identity::RequiredIdentity;

#[derive(Debug, Deserialize, IntoParams)]
pub struct TrendQuery {
    /// Number of days in the window, ending on `end_date`.
    pub window_days: Option<u32>,
    /// Last day of the window. Defaults to today.
    pub end_date: Option<NaiveDate>,
}

#[utoipa::path(
    get,
    path = "/trend",
    tag = "progress",
    summary = "Weight trend",
    description = "Least-squares weight slope and metric averages over a window of days.",
    params(TrendQuery),
    responses(
        (status = 200, body = TrendAnalysis),
        (status = 400, description = "Invalid window"),
    ),
)]
pub async fn get_trend(
    Query(query): Query<TrendQuery>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<TrendAnalysis>, ApiError> {
    let analysis = state
        .service
        .analyze_trend(
            identity,
            AnalyzeTrendInput {
                window_days: query.window_days,
                end_date: query.end_date,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(analysis))
}
