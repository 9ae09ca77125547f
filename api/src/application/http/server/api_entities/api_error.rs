use axum::{
    Json,
    extract::{FromRequest, OptionalFromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use nutriplan_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{message}")]
    BadRequest { code: &'static str, message: String },
    #[error("{0}")]
    Unauthorized(String),
    #[error("{message}")]
    NotFound { code: &'static str, message: String },
    #[error("{message}")]
    Conflict { code: &'static str, message: String },
    #[error("{message}")]
    UnprocessableEntity { code: &'static str, message: String },
    #[error("{0}")]
    InternalServerError(String),
}

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    pub status: i64,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest {
            code: "E_BAD_REQUEST",
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::UnprocessableEntity { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::BadRequest { code, .. }
            | ApiError::NotFound { code, .. }
            | ApiError::Conflict { code, .. }
            | ApiError::UnprocessableEntity { code, .. } => *code,
            ApiError::Unauthorized(_) => "E_UNAUTHORIZED",
            ApiError::InternalServerError(_) => "E_INTERNAL_SERVER_ERROR",
        }
    }

    pub fn body(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.code().to_string(),
            message: self.to_string(),
            status: i64::from(self.status().as_u16()),
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        let message = error.to_string();
        match error {
            CoreError::IngredientNotInConstraints(_) => ApiError::BadRequest {
                code: "E_INGREDIENT_NOT_IN_CONSTRAINTS",
                message,
            },
            CoreError::IngredientNotInRecipe(_) => ApiError::BadRequest {
                code: "E_INGREDIENT_NOT_IN_RECIPE",
                message,
            },
            CoreError::Invalid(_) => ApiError::BadRequest {
                code: "E_INVALID",
                message,
            },
            CoreError::SlotNotFound(_) => ApiError::NotFound {
                code: "E_SLOT_NOT_FOUND",
                message,
            },
            CoreError::RecipeNotFound(_) | CoreError::IngredientNotFound(_) => ApiError::NotFound {
                code: "E_NOT_FOUND",
                message,
            },
            CoreError::NoKcalBaseline => ApiError::Conflict {
                code: "E_NO_KCAL_BASELINE",
                message,
            },
            CoreError::IncompleteProfile(_) => ApiError::UnprocessableEntity {
                code: "E_INCOMPLETE_PROFILE",
                message,
            },
            CoreError::InternalServerError => {
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::BadRequest {
            code: "E_VALIDATION",
            message: errors.to_string(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {}", self);
        }

        (status, Json(self.body())).into_response()
    }
}

/// JSON body extractor that also runs `validator` rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = <Json<T> as FromRequest<S>>::from_request(req, state).await?;
        value.validate()?;

        Ok(ValidateJson(value))
    }
}

/// A request without a `Content-Type` header yields `None`; a body that is
/// present must still parse and validate.
impl<T, S> OptionalFromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Option<Self>, Self::Rejection> {
        let Some(Json(value)) =
            <Json<T> as OptionalFromRequest<S>>::from_request(req, state).await?
        else {
            return Ok(None);
        };
        value.validate()?;

        Ok(Some(ValidateJson(value)))
    }
}

#[cfg(test)]
mod tests {
    use nutriplan_core::domain::catalog::entities::MealType;
    use uuid::Uuid;

    use super::*;

    #[test]
    fn domain_validation_errors_are_bad_requests() {
        let error = ApiError::from(CoreError::IngredientNotInConstraints(Uuid::nil()));
        assert_eq!(error.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error.code(), "E_INGREDIENT_NOT_IN_CONSTRAINTS");

        let error = ApiError::from(CoreError::IngredientNotInRecipe(Uuid::nil()));
        assert_eq!(error.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn missing_slot_is_not_found() {
        let error = ApiError::from(CoreError::SlotNotFound(MealType::Lunch));

        assert_eq!(error.status(), StatusCode::NOT_FOUND);
        assert_eq!(error.body().message, "no lunch slot planned for this user");
        assert_eq!(error.body().status, 404);
    }

    #[test]
    fn targets_preconditions_map_to_conflict_and_unprocessable() {
        assert_eq!(
            ApiError::from(CoreError::NoKcalBaseline).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::from(CoreError::IncompleteProfile("pace")).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn store_failures_hide_details() {
        let error = ApiError::from(CoreError::InternalServerError);

        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.body().code, "E_INTERNAL_SERVER_ERROR");
    }
}
