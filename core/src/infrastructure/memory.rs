//! Store adapter keeping everything in process memory. Clones share state, so
//! one value can back every port of a `Service`.

use std::{
    collections::{BTreeMap, BTreeSet, HashMap},
    sync::Arc,
};

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{
    catalog::{
        entities::{Ingredient, MealType, Recipe, UserIngredientConstraint},
        ports::{CatalogRepository, ConstraintRepository},
    },
    common::entities::app_errors::CoreError,
    meal_plan::{entities::MealPlanSlot, ports::MealPlanRepository},
    profile::{entities::UserProfile, ports::ProfileRepository},
    progress::{
        entities::BodyMeasurementSample, ports::MeasurementRepository, value_objects::DateRange,
    },
    targets::{
        entities::{MacroTargets, NutritionTargets},
        ports::TargetsRepository,
    },
};

#[derive(Default)]
struct Store {
    ingredients: HashMap<Uuid, Ingredient>,
    /// Catalog order is insertion order.
    recipes: Vec<Recipe>,
    constraints: BTreeMap<(Uuid, Uuid), UserIngredientConstraint>,
    slots: BTreeMap<(Uuid, MealType), MealPlanSlot>,
    samples: BTreeMap<Uuid, BTreeMap<chrono::NaiveDate, BodyMeasurementSample>>,
    targets: HashMap<Uuid, NutritionTargets>,
    profiles: HashMap<Uuid, UserProfile>,
}

#[derive(Clone, Default)]
pub struct InMemoryRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_ingredient(&self, ingredient: Ingredient) {
        let mut store = self.store.write().await;
        store.ingredients.insert(ingredient.id, ingredient);
    }

    pub async fn add_recipe(&self, recipe: Recipe) {
        let mut store = self.store.write().await;
        store.recipes.push(recipe);
    }

    pub async fn put_profile(&self, profile: UserProfile) {
        let mut store = self.store.write().await;
        store.profiles.insert(profile.user_id, profile);
    }

    pub async fn slots_for(&self, user_id: Uuid) -> Vec<MealPlanSlot> {
        let store = self.store.read().await;
        store
            .slots
            .values()
            .filter(|slot| slot.user_id == user_id)
            .cloned()
            .collect()
    }
}

impl CatalogRepository for InMemoryRepository {
    async fn find_recipes_by_meal_type(
        &self,
        meal_type: MealType,
    ) -> Result<Vec<Recipe>, CoreError> {
        let store = self.store.read().await;
        Ok(store
            .recipes
            .iter()
            .filter(|recipe| recipe.meal_type == meal_type)
            .cloned()
            .collect())
    }

    async fn get_recipe_by_id(&self, recipe_id: Uuid) -> Result<Option<Recipe>, CoreError> {
        let store = self.store.read().await;
        Ok(store
            .recipes
            .iter()
            .find(|recipe| recipe.id == recipe_id)
            .cloned())
    }

    async fn find_ingredients_by_ids(&self, ids: Vec<Uuid>) -> Result<Vec<Ingredient>, CoreError> {
        let store = self.store.read().await;
        Ok(ids
            .iter()
            .filter_map(|id| store.ingredients.get(id))
            .cloned()
            .collect())
    }

    async fn find_ingredient_by_name(&self, name: String) -> Result<Option<Ingredient>, CoreError> {
        let store = self.store.read().await;
        Ok(store
            .ingredients
            .values()
            .find(|ingredient| ingredient.name.eq_ignore_ascii_case(&name))
            .cloned())
    }

    async fn create_ingredient(&self, ingredient: Ingredient) -> Result<Ingredient, CoreError> {
        let mut store = self.store.write().await;
        store.ingredients.insert(ingredient.id, ingredient.clone());
        Ok(ingredient)
    }
}

impl ConstraintRepository for InMemoryRepository {
    async fn get_user_ingredient_ids(&self, user_id: Uuid) -> Result<BTreeSet<Uuid>, CoreError> {
        let store = self.store.read().await;
        Ok(store
            .constraints
            .keys()
            .filter(|(owner, _)| *owner == user_id)
            .map(|(_, ingredient_id)| *ingredient_id)
            .collect())
    }

    async fn upsert_constraint(
        &self,
        constraint: UserIngredientConstraint,
    ) -> Result<UserIngredientConstraint, CoreError> {
        let mut store = self.store.write().await;
        store.constraints.insert(
            (constraint.user_id, constraint.ingredient_id),
            constraint.clone(),
        );
        Ok(constraint)
    }
}

impl MealPlanRepository for InMemoryRepository {
    async fn get_slot(
        &self,
        user_id: Uuid,
        meal_type: MealType,
    ) -> Result<Option<MealPlanSlot>, CoreError> {
        let store = self.store.read().await;
        Ok(store.slots.get(&(user_id, meal_type)).cloned())
    }

    async fn upsert_slot(&self, slot: MealPlanSlot) -> Result<MealPlanSlot, CoreError> {
        let mut store = self.store.write().await;
        let key = (slot.user_id, slot.meal_type);

        let stored = match store.slots.get(&key) {
            Some(existing) => MealPlanSlot {
                id: existing.id,
                created_at: existing.created_at,
                ..slot
            },
            None => slot,
        };
        store.slots.insert(key, stored.clone());

        Ok(stored)
    }
}

impl MeasurementRepository for InMemoryRepository {
    async fn get_samples(
        &self,
        user_id: Uuid,
        range: DateRange,
    ) -> Result<Vec<BodyMeasurementSample>, CoreError> {
        let store = self.store.read().await;
        Ok(store
            .samples
            .get(&user_id)
            .map(|samples| {
                samples
                    .range(range.start..=range.end)
                    .map(|(_, sample)| sample.clone())
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn upsert_sample(
        &self,
        sample: BodyMeasurementSample,
    ) -> Result<BodyMeasurementSample, CoreError> {
        let mut store = self.store.write().await;
        store
            .samples
            .entry(sample.user_id)
            .or_default()
            .insert(sample.date, sample.clone());
        Ok(sample)
    }
}

impl TargetsRepository for InMemoryRepository {
    async fn get_targets(&self, user_id: Uuid) -> Result<Option<NutritionTargets>, CoreError> {
        let store = self.store.read().await;
        Ok(store.targets.get(&user_id).cloned())
    }

    async fn set_targets(&self, user_id: Uuid, targets: MacroTargets) -> Result<(), CoreError> {
        let mut store = self.store.write().await;
        let water_l = store
            .targets
            .get(&user_id)
            .map(|existing| existing.water_l)
            .unwrap_or_default();
        store
            .targets
            .insert(user_id, NutritionTargets::new(user_id, targets, water_l));
        Ok(())
    }

    async fn save_targets(&self, targets: NutritionTargets) -> Result<NutritionTargets, CoreError> {
        let mut store = self.store.write().await;
        store.targets.insert(targets.user_id, targets.clone());
        Ok(targets)
    }
}

impl ProfileRepository for InMemoryRepository {
    async fn get_user_profile(&self, user_id: Uuid) -> Result<Option<UserProfile>, CoreError> {
        let store = self.store.read().await;
        Ok(store.profiles.get(&user_id).cloned())
    }
}
