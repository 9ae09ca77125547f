pub mod generate_plan;
pub mod get_slot;
pub mod substitute_ingredient;
