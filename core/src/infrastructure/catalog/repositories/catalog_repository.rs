use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    sea_query::{Expr, Func},
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        catalog::{
            entities::{Ingredient, MealType, Recipe},
            ports::CatalogRepository,
        },
        common::entities::app_errors::CoreError,
    },
    entity::{
        ingredients::{
            ActiveModel as IngredientActiveModel, Column as IngredientColumn,
            Entity as IngredientEntity,
        },
        recipe_ingredients::{Column as LineColumn, Entity as LineEntity},
        recipes::{self, Column as RecipeColumn, Entity as RecipeEntity},
    },
    infrastructure::catalog::mappers::map_recipe,
};

#[derive(Debug, Clone)]
pub struct PostgresCatalogRepository {
    pub db: DatabaseConnection,
}

impl PostgresCatalogRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn with_lines(&self, models: Vec<recipes::Model>) -> Result<Vec<Recipe>, CoreError> {
        if models.is_empty() {
            return Ok(Vec::new());
        }

        let recipe_ids: Vec<Uuid> = models.iter().map(|model| model.id).collect();
        let lines = LineEntity::find()
            .filter(LineColumn::RecipeId.is_in(recipe_ids))
            .order_by_asc(LineColumn::RecipeId)
            .order_by_asc(LineColumn::Position)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load recipe lines: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(models
            .into_iter()
            .filter_map(|model| map_recipe(model, &lines))
            .collect())
    }
}

impl CatalogRepository for PostgresCatalogRepository {
    async fn find_recipes_by_meal_type(
        &self,
        meal_type: MealType,
    ) -> Result<Vec<Recipe>, CoreError> {
        let models = RecipeEntity::find()
            .filter(RecipeColumn::MealType.eq(meal_type.as_str()))
            .order_by_asc(RecipeColumn::CreatedAt)
            .order_by_asc(RecipeColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to find recipes by meal type: {}", e);
                CoreError::InternalServerError
            })?;

        self.with_lines(models).await
    }

    async fn get_recipe_by_id(&self, recipe_id: Uuid) -> Result<Option<Recipe>, CoreError> {
        let model = RecipeEntity::find_by_id(recipe_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get recipe by id: {}", e);
                CoreError::InternalServerError
            })?;

        let Some(model) = model else {
            return Ok(None);
        };

        Ok(self.with_lines(vec![model]).await?.into_iter().next())
    }

    async fn find_ingredients_by_ids(&self, ids: Vec<Uuid>) -> Result<Vec<Ingredient>, CoreError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = IngredientEntity::find()
            .filter(IngredientColumn::Id.is_in(ids))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to find ingredients: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(models.into_iter().map(Ingredient::from).collect())
    }

    async fn find_ingredient_by_name(&self, name: String) -> Result<Option<Ingredient>, CoreError> {
        let lowered_name = Expr::expr(Func::lower(Expr::col(IngredientColumn::Name)));
        let model = IngredientEntity::find()
            .filter(lowered_name.eq(name.to_lowercase()))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to find ingredient by name: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(model.map(Ingredient::from))
    }

    async fn create_ingredient(&self, ingredient: Ingredient) -> Result<Ingredient, CoreError> {
        let active_model = IngredientActiveModel {
            id: Set(ingredient.id),
            name: Set(ingredient.name.clone()),
            category: Set(ingredient.category.clone()),
            kcal_per_100g: Set(ingredient.macros.kcal),
            protein_g_per_100g: Set(ingredient.macros.protein_g),
            fat_g_per_100g: Set(ingredient.macros.fat_g),
            carb_g_per_100g: Set(ingredient.macros.carb_g),
            created_at: Set(ingredient.created_at.fixed_offset()),
        };

        let created = IngredientEntity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create ingredient: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Ingredient::from(created))
    }
}
