pub mod mappers;
pub mod repositories;

pub use repositories::catalog_repository::PostgresCatalogRepository;
pub use repositories::constraint_repository::PostgresConstraintRepository;
