pub mod targets_repository;
