use crate::domain::{
    authentication::value_objects::Identity,
    catalog::ports::{CatalogRepository, ConstraintRepository},
    common::{entities::app_errors::CoreError, services::Service},
    meal_plan::ports::MealPlanRepository,
    onboarding::{
        entities::OnboardingStatus, ports::OnboardingService,
        state_machine::next_onboarding_step,
    },
    profile::{entities::UserProfile, ports::ProfileRepository},
    progress::ports::MeasurementRepository,
    targets::ports::TargetsRepository,
};

impl<CA, UC, MP, MS, NT, UP> OnboardingService for Service<CA, UC, MP, MS, NT, UP>
where
    CA: CatalogRepository,
    UC: ConstraintRepository,
    MP: MealPlanRepository,
    MS: MeasurementRepository,
    NT: TargetsRepository,
    UP: ProfileRepository,
{
    async fn next_step(&self, identity: Identity) -> Result<OnboardingStatus, CoreError> {
        let profile = self
            .profile_repository
            .get_user_profile(identity.id())
            .await?
            .unwrap_or_else(|| UserProfile::empty(identity.id()));

        Ok(next_onboarding_step(&profile))
    }
}
