pub mod mappers;
pub mod repositories;

pub use repositories::measurement_repository::PostgresMeasurementRepository;
