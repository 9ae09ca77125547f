use axum::extract::State;
use nutriplan_core::domain::onboarding::{OnboardingService, OnboardingStatus, OnboardingStep};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::identity::RequiredIdentity;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct NextStepResponse {
    /// Absent once every step is complete.
    pub step: Option<OnboardingStep>,
    pub complete: bool,
}

impl From<OnboardingStatus> for NextStepResponse {
    fn from(status: OnboardingStatus) -> Self {
        match status {
            OnboardingStatus::Pending(step) => Self {
                step: Some(step),
                complete: false,
            },
            OnboardingStatus::Complete => Self {
                step: None,
                complete: true,
            },
        }
    }
}

#[utoipa::path(
    get,
    path = "/next-step",
    tag = "onboarding",
    summary = "Next onboarding step",
    description = "Returns the first questionnaire step the caller has not completed.",
    responses(
        (status = 200, body = NextStepResponse)
    ),
)]
pub async fn get_next_step(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<NextStepResponse>, ApiError> {
    let status = state
        .service
        .next_step(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(status.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_status_names_the_step() {
        let response = NextStepResponse::from(OnboardingStatus::Pending(OnboardingStep::MealDays));

        let value = serde_json::to_value(&response).expect("response serializes");

        assert_eq!(value["step"], "meal-days");
        assert_eq!(value["complete"], false);
    }

    #[test]
    fn complete_status_has_no_step() {
        let response = NextStepResponse::from(OnboardingStatus::Complete);

        assert_eq!(response.step, None);
        assert!(response.complete);
    }
}
