use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    targets::{
        entities::{MacroTargets, NutritionTargets},
        value_objects::{AdjustTargetsInput, TargetAdjustment},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait TargetsRepository: Send + Sync {
    fn get_targets(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<NutritionTargets>, CoreError>> + Send;

    /// Replace kcal and macros, keeping the stored water target.
    fn set_targets(
        &self,
        user_id: Uuid,
        targets: MacroTargets,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn save_targets(
        &self,
        targets: NutritionTargets,
    ) -> impl Future<Output = Result<NutritionTargets, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait TargetService: Send + Sync {
    fn adjust_targets(
        &self,
        identity: Identity,
        input: AdjustTargetsInput,
    ) -> impl Future<Output = Result<TargetAdjustment, CoreError>> + Send;

    fn initialize_targets(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<NutritionTargets, CoreError>> + Send;
}
