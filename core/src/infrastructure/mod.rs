pub mod catalog;
pub mod db;
pub mod meal_plan;
pub mod memory;
pub mod profile;
pub mod progress;
pub mod targets;
