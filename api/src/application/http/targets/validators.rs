use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct AdjustTargetsValidator {
    /// Days of measurements to fit. Defaults to the server setting.
    #[serde(default)]
    #[validate(range(min = 1, max = 90, message = "window must span 1 to 90 days"))]
    pub window_days: Option<u32>,
}
