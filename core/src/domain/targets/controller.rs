use crate::domain::{
    common::round1,
    profile::entities::{ActivityLevel, Goal, Pace, Sex},
    targets::{entities::MacroTargets, policy::AdaptivePolicy},
};

/// State the controller reads for one adjustment step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerInput {
    pub goal: Goal,
    pub pace: Pace,
    pub current_kcal: f64,
    pub observed_kg_per_week: f64,
    pub latest_weight_kg: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerOutput {
    pub target_kg_per_week: f64,
    pub targets: MacroTargets,
}

/// One closed-loop step: compare the observed trend with the goal rate and
/// move the kcal target by at most `max_step_kcal`, staying in the safe range.
pub fn adjust(policy: &AdaptivePolicy, input: ControllerInput) -> ControllerOutput {
    let target_kg_per_week =
        policy.target_kg_per_week(input.goal, input.pace, input.latest_weight_kg);
    let diff = input.observed_kg_per_week - target_kg_per_week;

    let delta = policy
        .correction(input.goal)
        .delta(diff)
        .clamp(-policy.max_step_kcal, policy.max_step_kcal);

    let kcal = policy.clamp_kcal((input.current_kcal + delta).round());

    ControllerOutput {
        target_kg_per_week,
        targets: derive_macros(policy, kcal, input.latest_weight_kg),
    }
}

/// Protein and fat scale with body weight; carbohydrate takes the remaining
/// energy and never goes negative.
pub fn derive_macros(policy: &AdaptivePolicy, kcal: f64, weight_kg: f64) -> MacroTargets {
    let protein_g = (policy.protein_g_per_kg * weight_kg).round();
    let fat_g = (policy.fat_g_per_kg * weight_kg).round();
    let carb_g = ((kcal - 4.0 * protein_g - 9.0 * fat_g) / 4.0).max(0.0).round();

    MacroTargets {
        kcal,
        protein_g,
        fat_g,
        carb_g,
    }
}

/// Mifflin-St Jeor basal metabolic rate in kcal/day.
pub fn basal_metabolic_rate(sex: Sex, weight_kg: f64, height_cm: f64, age_years: u32) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age_years);
    match sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    }
}

/// Body facts needed for the first estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialEstimateInput {
    pub sex: Sex,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age_years: u32,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
}

pub fn initial_targets(policy: &AdaptivePolicy, input: InitialEstimateInput) -> MacroTargets {
    let bmr = basal_metabolic_rate(input.sex, input.weight_kg, input.height_cm, input.age_years);
    let maintenance = bmr * input.activity_level.factor();
    let kcal = policy.clamp_kcal((maintenance + policy.initial_offset_kcal(input.goal)).round());

    derive_macros(policy, kcal, input.weight_kg)
}

/// Daily water in litres.
pub fn water_litres(policy: &AdaptivePolicy, weight_kg: f64) -> f64 {
    round1(policy.water_ml_per_kg * weight_kg / 1000.0)
}
