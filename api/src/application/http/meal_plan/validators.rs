use nutriplan_core::domain::catalog::entities::MealType;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct GeneratePlanValidator {
    #[validate(length(min = 1, message = "at least one meal type is required"))]
    pub meal_types: Vec<MealType>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "distinct_ingredients"))]
pub struct SubstituteIngredientValidator {
    pub from_ingredient_id: Uuid,
    pub to_ingredient_id: Uuid,
}

fn distinct_ingredients(payload: &SubstituteIngredientValidator) -> Result<(), ValidationError> {
    if payload.from_ingredient_id == payload.to_ingredient_id {
        let mut error = ValidationError::new("distinct_ingredients");
        error.message = Some("cannot substitute an ingredient with itself".into());
        return Err(error);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_meal_type_list_is_rejected() {
        let payload = GeneratePlanValidator { meal_types: vec![] };

        assert!(payload.validate().is_err());
    }

    #[test]
    fn substitution_requires_two_ingredients() {
        let id = Uuid::new_v4();
        let same = SubstituteIngredientValidator {
            from_ingredient_id: id,
            to_ingredient_id: id,
        };
        let different = SubstituteIngredientValidator {
            from_ingredient_id: id,
            to_ingredient_id: Uuid::new_v4(),
        };

        assert!(same.validate().is_err());
        assert!(different.validate().is_ok());
    }
}
