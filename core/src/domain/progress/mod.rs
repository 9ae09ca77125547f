pub mod entities;
pub mod ports;
pub mod services;
pub mod trend;
pub mod value_objects;

pub use entities::*;
pub use ports::*;
pub use value_objects::*;
