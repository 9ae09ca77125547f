#[derive(Debug, Clone)]
pub struct ApproveIngredientInput {
    pub name: String,
    pub category: Option<String>,
    pub priority: Option<i32>,
}
