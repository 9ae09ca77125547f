pub mod entities;
pub mod ports;
pub mod services;
pub mod state_machine;

pub use entities::*;
pub use ports::*;
pub use state_machine::next_onboarding_step;
