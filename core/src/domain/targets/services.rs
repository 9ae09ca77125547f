use chrono::Utc;
use tracing::{info, instrument};

use crate::domain::{
    authentication::value_objects::Identity,
    catalog::ports::{CatalogRepository, ConstraintRepository},
    common::{entities::app_errors::CoreError, services::Service},
    meal_plan::ports::MealPlanRepository,
    profile::ports::ProfileRepository,
    progress::{ports::MeasurementRepository, trend::analyze, value_objects::DateRange},
    targets::{
        controller::{self, ControllerInput, InitialEstimateInput},
        entities::NutritionTargets,
        ports::{TargetService, TargetsRepository},
        value_objects::{AdjustTargetsInput, TargetAdjustment},
    },
};

impl<CA, UC, MP, MS, NT, UP> TargetService for Service<CA, UC, MP, MS, NT, UP>
where
    CA: CatalogRepository,
    UC: ConstraintRepository,
    MP: MealPlanRepository,
    MS: MeasurementRepository,
    NT: TargetsRepository,
    UP: ProfileRepository,
{
    #[instrument(skip(self, input), fields(user_id = %identity.id()))]
    async fn adjust_targets(
        &self,
        identity: Identity,
        input: AdjustTargetsInput,
    ) -> Result<TargetAdjustment, CoreError> {
        let user_id = identity.id();

        let current = self
            .targets_repository
            .get_targets(user_id)
            .await?
            .filter(|targets| targets.kcal > 0.0)
            .ok_or(CoreError::NoKcalBaseline)?;

        let profile = self
            .profile_repository
            .get_user_profile(user_id)
            .await?
            .ok_or(CoreError::IncompleteProfile("goal"))?;
        let goal = profile.goal.ok_or(CoreError::IncompleteProfile("goal"))?;
        let pace = profile.pace.ok_or(CoreError::IncompleteProfile("pace"))?;

        let window = input
            .window_days
            .unwrap_or(self.planning.adjustment_window_days);
        if window == 0 {
            return Err(CoreError::Invalid("window must be at least one day".to_string()));
        }
        let range = DateRange::ending_on(Utc::now().date_naive(), window);
        let samples = self
            .measurement_repository
            .get_samples(user_id, range)
            .await?;
        let trend = analyze(&samples, range);

        let latest_weight_kg = trend
            .latest_weight_kg
            .or(profile.weight_kg)
            .filter(|weight| *weight > 0.0)
            .ok_or(CoreError::IncompleteProfile("weight"))?;

        let output = controller::adjust(
            &self.planning.policy,
            ControllerInput {
                goal,
                pace,
                current_kcal: current.kcal,
                observed_kg_per_week: trend.slope_kg_per_week,
                latest_weight_kg,
            },
        );

        self.targets_repository
            .set_targets(user_id, output.targets)
            .await?;

        info!(
            previous_kcal = current.kcal,
            new_kcal = output.targets.kcal,
            observed = trend.slope_kg_per_week,
            target = output.target_kg_per_week,
            "Nutrition targets adjusted"
        );

        Ok(TargetAdjustment {
            previous_kcal: current.kcal,
            new_kcal: output.targets.kcal,
            new_protein_g: output.targets.protein_g,
            new_fat_g: output.targets.fat_g,
            new_carb_g: output.targets.carb_g,
            observed_slope_kg_per_week: trend.slope_kg_per_week,
            target_slope_kg_per_week: output.target_kg_per_week,
        })
    }

    #[instrument(skip(self), fields(user_id = %identity.id()))]
    async fn initialize_targets(&self, identity: Identity) -> Result<NutritionTargets, CoreError> {
        let user_id = identity.id();

        let profile = self
            .profile_repository
            .get_user_profile(user_id)
            .await?
            .ok_or(CoreError::IncompleteProfile("sex"))?;

        let sex = profile.sex.ok_or(CoreError::IncompleteProfile("sex"))?;
        let (height_cm, weight_kg) = match (profile.height_cm, profile.weight_kg) {
            (Some(height), Some(weight)) if height > 0.0 && weight > 0.0 => (height, weight),
            _ => return Err(CoreError::IncompleteProfile("metrics")),
        };
        let age_years = profile
            .age_on(Utc::now().date_naive())
            .ok_or(CoreError::IncompleteProfile("birthdate"))?;
        let activity_level = profile
            .activity_level
            .ok_or(CoreError::IncompleteProfile("activity"))?;
        let goal = profile.goal.ok_or(CoreError::IncompleteProfile("objective"))?;

        let policy = &self.planning.policy;
        let macros = controller::initial_targets(
            policy,
            InitialEstimateInput {
                sex,
                weight_kg,
                height_cm,
                age_years,
                activity_level,
                goal,
            },
        );
        let water_l = controller::water_litres(policy, weight_kg);

        let stored = self
            .targets_repository
            .save_targets(NutritionTargets::new(user_id, macros, water_l))
            .await?;

        info!(kcal = stored.kcal, water_l = stored.water_l, "Nutrition targets initialized");

        Ok(stored)
    }
}
