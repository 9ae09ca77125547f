use std::{collections::BTreeSet, future::Future};

use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    catalog::{
        entities::{Ingredient, MealType, Recipe, UserIngredientConstraint},
        value_objects::ApproveIngredientInput,
    },
    common::entities::app_errors::CoreError,
};

/// Read access to the ingredient and recipe catalog.
#[cfg_attr(test, mockall::automock)]
pub trait CatalogRepository: Send + Sync {
    /// Recipes tagged with `meal_type`, in catalog order.
    fn find_recipes_by_meal_type(
        &self,
        meal_type: MealType,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    fn get_recipe_by_id(
        &self,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<Option<Recipe>, CoreError>> + Send;

    /// Unknown ids are silently skipped.
    fn find_ingredients_by_ids(
        &self,
        ids: Vec<Uuid>,
    ) -> impl Future<Output = Result<Vec<Ingredient>, CoreError>> + Send;

    /// Case-insensitive exact match on the name.
    fn find_ingredient_by_name(
        &self,
        name: String,
    ) -> impl Future<Output = Result<Option<Ingredient>, CoreError>> + Send;

    fn create_ingredient(
        &self,
        ingredient: Ingredient,
    ) -> impl Future<Output = Result<Ingredient, CoreError>> + Send;
}

/// The per-user set of approved ingredients.
#[cfg_attr(test, mockall::automock)]
pub trait ConstraintRepository: Send + Sync {
    fn get_user_ingredient_ids(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<BTreeSet<Uuid>, CoreError>> + Send;

    /// Insert or replace the row for (user, ingredient).
    fn upsert_constraint(
        &self,
        constraint: UserIngredientConstraint,
    ) -> impl Future<Output = Result<UserIngredientConstraint, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ConstraintService: Send + Sync {
    /// Approve an ingredient by name for the caller, adding it to the
    /// catalog when it is not known yet.
    fn approve_ingredient(
        &self,
        identity: Identity,
        input: ApproveIngredientInput,
    ) -> impl Future<Output = Result<UserIngredientConstraint, CoreError>> + Send;
}
