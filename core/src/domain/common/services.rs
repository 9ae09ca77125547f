use crate::domain::common::PlanningConfig;

/// The planning engine: every service trait is implemented on this one value,
/// built once per process with its store adapters injected.
#[derive(Clone)]
pub struct Service<CA, UC, MP, MS, NT, UP> {
    pub(crate) catalog_repository: CA,
    pub(crate) constraint_repository: UC,
    pub(crate) meal_plan_repository: MP,
    pub(crate) measurement_repository: MS,
    pub(crate) targets_repository: NT,
    pub(crate) profile_repository: UP,
    pub(crate) planning: PlanningConfig,
}

impl<CA, UC, MP, MS, NT, UP> Service<CA, UC, MP, MS, NT, UP> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        catalog_repository: CA,
        constraint_repository: UC,
        meal_plan_repository: MP,
        measurement_repository: MS,
        targets_repository: NT,
        profile_repository: UP,
        planning: PlanningConfig,
    ) -> Self {
        Self {
            catalog_repository,
            constraint_repository,
            meal_plan_repository,
            measurement_repository,
            targets_repository,
            profile_repository,
            planning,
        }
    }
}
