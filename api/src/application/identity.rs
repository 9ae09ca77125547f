use axum::{extract::FromRequestParts, http::request::Parts};
use nutriplan_core::domain::authentication::value_objects::Identity;
use uuid::Uuid;

use crate::application::http::server::api_entities::api_error::ApiError;

/// Header carrying the caller's user id, set by the upstream gateway.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Extractor for the caller's identity. Rejects requests without a valid
/// `x-user-id` header.
#[derive(Debug, Clone, Copy)]
pub struct RequiredIdentity(pub Identity);

impl<S> FromRequestParts<S> for RequiredIdentity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(identity) = parts.extensions.get::<Identity>() {
            return Ok(RequiredIdentity(*identity));
        }

        let header = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| {
                ApiError::Unauthorized(format!(
                    "Authentication required: missing {USER_ID_HEADER} header"
                ))
            })?;

        let user_id = Uuid::parse_str(header).map_err(|_| {
            ApiError::Unauthorized(format!("Invalid {USER_ID_HEADER} header"))
        })?;

        let identity = Identity::new(user_id);
        parts.extensions.insert(identity);

        Ok(RequiredIdentity(identity))
    }
}

#[cfg(test)]
mod tests {
    use axum::http::Request;

    use super::*;

    async fn extract(request: Request<()>) -> Result<RequiredIdentity, ApiError> {
        let (mut parts, _) = request.into_parts();
        RequiredIdentity::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn reads_user_id_header() {
        let user_id = Uuid::new_v4();
        let request = Request::builder()
            .header(USER_ID_HEADER, user_id.to_string())
            .body(())
            .expect("request builds");

        let RequiredIdentity(identity) = extract(request).await.expect("identity extracted");

        assert_eq!(identity.id(), user_id);
    }

    #[tokio::test]
    async fn missing_header_is_unauthorized() {
        let request = Request::builder().body(()).expect("request builds");

        let error = extract(request).await.expect_err("extraction fails");

        assert_eq!(error.status(), axum::http::StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn malformed_header_is_unauthorized() {
        let request = Request::builder()
            .header(USER_ID_HEADER, "not-a-uuid")
            .body(())
            .expect("request builds");

        let error = extract(request).await.expect_err("extraction fails");

        assert_eq!(error, ApiError::Unauthorized("Invalid x-user-id header".to_string()));
    }
}
