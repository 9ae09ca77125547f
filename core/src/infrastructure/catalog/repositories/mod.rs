pub mod catalog_repository;
pub mod constraint_repository;
