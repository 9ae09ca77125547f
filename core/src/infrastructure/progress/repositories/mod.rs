pub mod measurement_repository;
