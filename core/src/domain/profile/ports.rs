use std::future::Future;

use uuid::Uuid;

use crate::domain::{common::entities::app_errors::CoreError, profile::entities::UserProfile};

#[cfg_attr(test, mockall::automock)]
pub trait ProfileRepository: Send + Sync {
    fn get_user_profile(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<UserProfile>, CoreError>> + Send;
}
