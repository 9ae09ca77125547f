pub mod mappers;
pub mod repositories;

pub use repositories::profile_repository::PostgresProfileRepository;
