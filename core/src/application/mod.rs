use crate::{
    domain::common::{NutriplanConfig, PlanningConfig, services::Service},
    infrastructure::{
        catalog::{PostgresCatalogRepository, PostgresConstraintRepository},
        db::postgres::{Postgres, PostgresConfig},
        meal_plan::PostgresMealPlanRepository,
        memory::InMemoryRepository,
        profile::PostgresProfileRepository,
        progress::PostgresMeasurementRepository,
        targets::PostgresTargetsRepository,
    },
};

pub type NutriplanService = Service<
    PostgresCatalogRepository,
    PostgresConstraintRepository,
    PostgresMealPlanRepository,
    PostgresMeasurementRepository,
    PostgresTargetsRepository,
    PostgresProfileRepository,
>;

pub type InMemoryService = Service<
    InMemoryRepository,
    InMemoryRepository,
    InMemoryRepository,
    InMemoryRepository,
    InMemoryRepository,
    InMemoryRepository,
>;

/// Connect to Postgres, apply migrations and wire every repository into one
/// service.
pub async fn create_service(config: NutriplanConfig) -> Result<NutriplanService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
    })
    .await?;
    postgres.migrate().await?;

    let db = postgres.get_db();

    Ok(Service::new(
        PostgresCatalogRepository::new(db.clone()),
        PostgresConstraintRepository::new(db.clone()),
        PostgresMealPlanRepository::new(db.clone()),
        PostgresMeasurementRepository::new(db.clone()),
        PostgresTargetsRepository::new(db.clone()),
        PostgresProfileRepository::new(db),
        config.planning,
    ))
}

/// A service over one shared in-memory store.
pub fn create_in_memory_service(
    repository: InMemoryRepository,
    planning: PlanningConfig,
) -> InMemoryService {
    Service::new(
        repository.clone(),
        repository.clone(),
        repository.clone(),
        repository.clone(),
        repository.clone(),
        repository,
        planning,
    )
}
