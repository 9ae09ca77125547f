use std::collections::BTreeMap;

use crate::domain::profile::entities::{Goal, Pace};

/// Dead-band correction for one goal. `diff` is observed minus target
/// kg/week: above `surplus_threshold` the user is gaining relative to plan
/// and loses `step_kcal`; below `deficit_threshold` they gain it back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrectionRule {
    pub step_kcal: f64,
    pub surplus_threshold: f64,
    pub deficit_threshold: f64,
}

impl CorrectionRule {
    pub fn delta(&self, diff: f64) -> f64 {
        if diff > self.surplus_threshold {
            -self.step_kcal
        } else if diff < self.deficit_threshold {
            self.step_kcal
        } else {
            0.0
        }
    }
}

/// Parameters of the adaptive controller and of the initial target estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct AdaptivePolicy {
    /// Target weekly change as a percentage of body weight.
    pub target_rates_pct: BTreeMap<(Goal, Pace), f64>,
    pub corrections: BTreeMap<Goal, CorrectionRule>,
    pub max_step_kcal: f64,
    pub min_kcal: f64,
    pub max_kcal: f64,
    pub protein_g_per_kg: f64,
    pub fat_g_per_kg: f64,
    /// Offset applied to maintenance energy when targets are first derived.
    pub initial_offsets_kcal: BTreeMap<Goal, f64>,
    pub water_ml_per_kg: f64,
}

impl AdaptivePolicy {
    pub fn target_rate_pct(&self, goal: Goal, pace: Pace) -> f64 {
        self.target_rates_pct
            .get(&(goal, pace))
            .copied()
            .unwrap_or(0.0)
    }

    /// Weekly kg change the plan aims for at `weight_kg`.
    pub fn target_kg_per_week(&self, goal: Goal, pace: Pace, weight_kg: f64) -> f64 {
        self.target_rate_pct(goal, pace) / 100.0 * weight_kg
    }

    /// Goals without a rule never move.
    pub fn correction(&self, goal: Goal) -> CorrectionRule {
        self.corrections.get(&goal).copied().unwrap_or(CorrectionRule {
            step_kcal: 0.0,
            surplus_threshold: 0.0,
            deficit_threshold: 0.0,
        })
    }

    pub fn initial_offset_kcal(&self, goal: Goal) -> f64 {
        self.initial_offsets_kcal.get(&goal).copied().unwrap_or(0.0)
    }

    pub fn clamp_kcal(&self, kcal: f64) -> f64 {
        kcal.clamp(self.min_kcal, self.max_kcal)
    }
}

impl Default for AdaptivePolicy {
    fn default() -> Self {
        let target_rates_pct = BTreeMap::from([
            ((Goal::LoseFat, Pace::Fast), -0.9),
            ((Goal::LoseFat, Pace::Moderate), -0.7),
            ((Goal::LoseFat, Pace::Slow), -0.5),
            ((Goal::GainMuscle, Pace::Fast), 0.25),
            ((Goal::GainMuscle, Pace::Moderate), 0.18),
            ((Goal::GainMuscle, Pace::Slow), 0.125),
            ((Goal::Maintain, Pace::Fast), 0.0),
            ((Goal::Maintain, Pace::Moderate), 0.0),
            ((Goal::Maintain, Pace::Slow), 0.0),
        ]);

        let corrections = BTreeMap::from([
            (
                Goal::LoseFat,
                CorrectionRule {
                    step_kcal: 125.0,
                    surplus_threshold: 0.15,
                    deficit_threshold: -0.25,
                },
            ),
            (
                Goal::GainMuscle,
                CorrectionRule {
                    step_kcal: 125.0,
                    surplus_threshold: 0.25,
                    deficit_threshold: -0.15,
                },
            ),
            (
                Goal::Maintain,
                CorrectionRule {
                    step_kcal: 75.0,
                    surplus_threshold: 0.1,
                    deficit_threshold: -0.1,
                },
            ),
        ]);

        Self {
            target_rates_pct,
            corrections,
            max_step_kcal: 300.0,
            min_kcal: 1200.0,
            max_kcal: 5000.0,
            protein_g_per_kg: 2.0,
            fat_g_per_kg: 0.8,
            initial_offsets_kcal: BTreeMap::from([
                (Goal::LoseFat, -500.0),
                (Goal::GainMuscle, 300.0),
                (Goal::Maintain, 0.0),
            ]),
            water_ml_per_kg: 35.0,
        }
    }
}
