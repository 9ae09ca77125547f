pub mod authentication;
pub mod catalog;
pub mod common;
pub mod meal_plan;
pub mod onboarding;
pub mod profile;
pub mod progress;
pub mod targets;
