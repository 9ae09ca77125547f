pub mod http;
pub mod identity;
