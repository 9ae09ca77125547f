use thiserror::Error;
use uuid::Uuid;

use crate::domain::catalog::entities::MealType;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("ingredient {0} is not in the user's approved ingredients")]
    IngredientNotInConstraints(Uuid),

    #[error("ingredient {0} is not part of the slot's recipe")]
    IngredientNotInRecipe(Uuid),

    #[error("ingredient {0} not found")]
    IngredientNotFound(Uuid),

    #[error("recipe {0} not found")]
    RecipeNotFound(Uuid),

    #[error("no {0} slot planned for this user")]
    SlotNotFound(MealType),

    #[error("no kcal target to adjust from")]
    NoKcalBaseline,

    #[error("profile is missing {0}")]
    IncompleteProfile(&'static str),

    #[error("invalid input: {0}")]
    Invalid(String),

    #[error("Internal server error")]
    InternalServerError,
}
