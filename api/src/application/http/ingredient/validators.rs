use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ApproveIngredientValidator {
    #[validate(length(min = 1, max = 120, message = "name is required"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 60, message = "category must not be empty"))]
    pub category: Option<String>,

    #[serde(default)]
    #[validate(range(min = 0, max = 100, message = "priority must be within [0, 100]"))]
    pub priority: Option<i32>,
}
