pub mod get_trend;
pub mod record_measurement;
