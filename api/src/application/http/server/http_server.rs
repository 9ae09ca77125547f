use std::sync::Arc;

use axum::Router;
use axum::http::header::{ACCEPT, CONTENT_LENGTH, CONTENT_TYPE, HeaderName};
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum_prometheus::PrometheusMetricLayer;
use nutriplan_core::{application::create_service, domain::common::NutriplanConfig};
use tower_http::cors::CorsLayer;
use tracing::{debug, info_span, warn};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::http::health::router::health_routes;
use crate::application::http::ingredient::router::ingredient_routes;
use crate::application::http::meal_plan::router::meal_plan_routes;
use crate::application::http::onboarding::router::onboarding_routes;
use crate::application::http::progress::router::progress_routes;
use crate::application::http::server::app_state::AppState;
use crate::application::http::server::openapi::ApiDoc;
use crate::application::http::targets::router::targets_routes;
use crate::application::identity::USER_ID_HEADER;
use crate::args::Args;

pub async fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let config = NutriplanConfig::from(args.as_ref().clone());
    let service = create_service(config).await?;

    Ok(AppState::new(args, service))
}

/// Every resource route of the API, without documentation or metrics.
pub fn api_routes(state: AppState) -> Router<AppState> {
    let root_path = state.args.server.root_path.clone();

    Router::new()
        .merge(meal_plan_routes(state.clone()))
        .merge(ingredient_routes(state.clone()))
        .merge(progress_routes(state.clone()))
        .merge(targets_routes(state.clone()))
        .merge(onboarding_routes(state))
        .merge(health_routes(&root_path))
}

///  Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let allowed_origins = state
        .args
        .server
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid allowed origin: {}", origin);
                None
            }
        })
        .collect::<Vec<HeaderValue>>();

    debug!("Allowed origins: {:?}", allowed_origins);

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_origin(allowed_origins)
        .allow_headers([
            CONTENT_TYPE,
            CONTENT_LENGTH,
            ACCEPT,
            HeaderName::from_static(USER_ID_HEADER),
        ])
        .allow_credentials(true);

    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();

    let root_path = state.args.server.root_path.clone();

    let mut openapi = ApiDoc::openapi();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{root_path}{path}"), item))
        .collect();
    openapi.paths = paths;

    let api_docs_url = format!("{}/api-docs/openapi.json", root_path);

    let router = Router::new()
        .merge(Scalar::with_url(
            format!("{}/scalar", root_path),
            openapi.clone(),
        ))
        .merge(SwaggerUi::new(format!("{}/swagger-ui", root_path)).url(api_docs_url, openapi))
        .merge(api_routes(state.clone()))
        .route(
            &format!("{}/metrics", root_path),
            get(|| async move { metric_handle.render() }),
        )
        .layer(trace_layer)
        .layer(cors)
        .layer(prometheus_layer)
        .with_state(state);

    Ok(router)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use clap::Parser;
    use nutriplan_core::{
        domain::common::{PlanningConfig, services::Service},
        infrastructure::{
            catalog::{PostgresCatalogRepository, PostgresConstraintRepository},
            meal_plan::PostgresMealPlanRepository,
            profile::PostgresProfileRepository,
            progress::PostgresMeasurementRepository,
            targets::PostgresTargetsRepository,
        },
    };
    use sea_orm::DatabaseConnection;
    use serde_json::{Value, json};
    use uuid::Uuid;

    use super::*;

    /// Requests rejected before reaching a repository never touch the
    /// disconnected database.
    fn test_server() -> TestServer {
        let args = Arc::new(Args::parse_from(["nutriplan-api"]));
        let db = DatabaseConnection::Disconnected;
        let service = Service::new(
            PostgresCatalogRepository::new(db.clone()),
            PostgresConstraintRepository::new(db.clone()),
            PostgresMealPlanRepository::new(db.clone()),
            PostgresMeasurementRepository::new(db.clone()),
            PostgresTargetsRepository::new(db.clone()),
            PostgresProfileRepository::new(db),
            PlanningConfig::default(),
        );
        let state = AppState::new(args, service);

        TestServer::new(api_routes(state.clone()).with_state(state)).expect("server starts")
    }

    #[tokio::test]
    async fn health_is_public() {
        let server = test_server();

        let response = server.get("/health").await;

        response.assert_status_ok();
        response.assert_json(&json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn requests_without_identity_are_unauthorized() {
        let server = test_server();

        let response = server.get("/onboarding/next-step").await;

        response.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn unknown_meal_type_is_a_bad_request() {
        let server = test_server();

        let response = server
            .get("/meal-plan/slots/brunch")
            .add_header(USER_ID_HEADER, Uuid::new_v4().to_string())
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["code"], "E_INVALID");
    }

    #[tokio::test]
    async fn out_of_range_weight_is_rejected() {
        let server = test_server();

        let response = server
            .post("/measurements")
            .add_header(USER_ID_HEADER, Uuid::new_v4().to_string())
            .json(&json!({ "weight_kg": 0.0 }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["code"], "E_VALIDATION");
    }

    #[tokio::test]
    async fn plan_generation_needs_a_meal_type() {
        let server = test_server();

        let response = server
            .post("/meal-plan/generate")
            .add_header(USER_ID_HEADER, Uuid::new_v4().to_string())
            .json(&json!({ "meal_types": [] }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn substitution_needs_distinct_ingredients() {
        let server = test_server();
        let id = Uuid::new_v4();

        let response = server
            .post("/meal-plan/slots/lunch/substitutions")
            .add_header(USER_ID_HEADER, Uuid::new_v4().to_string())
            .json(&json!({ "from_ingredient_id": id, "to_ingredient_id": id }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn adjustment_window_is_validated_when_given() {
        let server = test_server();

        let response = server
            .post("/targets/adjust")
            .add_header(USER_ID_HEADER, Uuid::new_v4().to_string())
            .json(&json!({ "window_days": 0 }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["code"], "E_VALIDATION");
    }
}
