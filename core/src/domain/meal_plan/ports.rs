use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    catalog::entities::MealType,
    common::entities::app_errors::CoreError,
    meal_plan::{
        entities::MealPlanSlot,
        value_objects::{GeneratePlanInput, PlanGeneration, SlotDetails, SubstituteIngredientInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait MealPlanRepository: Send + Sync {
    fn get_slot(
        &self,
        user_id: Uuid,
        meal_type: MealType,
    ) -> impl Future<Output = Result<Option<MealPlanSlot>, CoreError>> + Send;

    /// Insert or replace the slot keyed by (user, meal type).
    fn upsert_slot(
        &self,
        slot: MealPlanSlot,
    ) -> impl Future<Output = Result<MealPlanSlot, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait MealPlanService: Send + Sync {
    fn generate_plan(
        &self,
        identity: Identity,
        input: GeneratePlanInput,
    ) -> impl Future<Output = Result<PlanGeneration, CoreError>> + Send;

    fn get_slot_details(
        &self,
        identity: Identity,
        meal_type: MealType,
    ) -> impl Future<Output = Result<SlotDetails, CoreError>> + Send;

    fn substitute_ingredient(
        &self,
        identity: Identity,
        input: SubstituteIngredientInput,
    ) -> impl Future<Output = Result<SlotDetails, CoreError>> + Send;
}
