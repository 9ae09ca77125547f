use std::future::Future;

use crate::domain::{
    authentication::value_objects::Identity, common::entities::app_errors::CoreError,
    onboarding::entities::OnboardingStatus,
};

#[cfg_attr(test, mockall::automock)]
pub trait OnboardingService: Send + Sync {
    fn next_step(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<OnboardingStatus, CoreError>> + Send;
}
