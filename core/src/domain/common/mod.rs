use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

use crate::domain::targets::policy::AdaptivePolicy;

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct NutriplanConfig {
    pub database: DatabaseConfig,
    pub planning: PlanningConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
}

impl DatabaseConfig {
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.name
        )
    }
}

/// Tunables for the planning services.
#[derive(Clone, Debug)]
pub struct PlanningConfig {
    pub policy: AdaptivePolicy,
    /// Window used by `analyze_trend` when the caller gives none.
    pub trend_window_days: u32,
    /// Window used by `adjust_targets` when the caller gives none.
    pub adjustment_window_days: u32,
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self {
            policy: AdaptivePolicy::default(),
            trend_window_days: 7,
            adjustment_window_days: 7,
        }
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}

/// Round to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
