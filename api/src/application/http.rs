pub mod health;
pub mod ingredient;
pub mod meal_plan;
pub mod onboarding;
pub mod progress;
pub mod server;
pub mod targets;
