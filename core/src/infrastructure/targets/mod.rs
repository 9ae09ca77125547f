pub mod mappers;
pub mod repositories;

pub use repositories::targets_repository::PostgresTargetsRepository;
