pub mod adjust_targets;
pub mod initialize_targets;
