use std::collections::HashSet;

use crate::domain::{
    onboarding::entities::{OnboardingStatus, OnboardingStep},
    profile::entities::UserProfile,
};

pub const MIN_DIET_DAYS: usize = 5;

fn positive(value: Option<f64>) -> bool {
    value.is_some_and(|v| v > 0.0)
}

/// Whether `profile` satisfies `step`.
pub fn is_step_complete(step: OnboardingStep, profile: &UserProfile) -> bool {
    match step {
        OnboardingStep::Sex => profile.sex.is_some(),
        OnboardingStep::Metrics => positive(profile.height_cm) && positive(profile.weight_kg),
        OnboardingStep::Birthdate => profile.birthdate.is_some(),
        OnboardingStep::Activity => profile.activity_level.is_some(),
        OnboardingStep::Country => profile
            .country
            .as_deref()
            .is_some_and(|country| !country.trim().is_empty()),
        OnboardingStep::Objective => profile.goal.is_some(),
        OnboardingStep::TargetWeight => positive(profile.target_weight_kg),
        OnboardingStep::Speed => profile.pace.is_some(),
        OnboardingStep::MealDays => {
            profile.diet_days.iter().collect::<HashSet<_>>().len() >= MIN_DIET_DAYS
        }
        OnboardingStep::ProteinTarget => {
            positive(profile.protein_target_g)
                || profile.protein_range.is_some_and(|range| range.is_valid())
        }
        OnboardingStep::MealsTerms => {
            !profile.enabled_meals.is_empty() && profile.terms_accepted_at.is_some()
        }
        OnboardingStep::Foods => !profile.food_preferences.is_empty(),
        OnboardingStep::Review => profile.plan_reviewed_at.is_some(),
        OnboardingStep::Advice => profile.advice_acknowledged_at.is_some(),
    }
}

/// The earliest unsatisfied step, or `Complete` when every step holds.
pub fn next_onboarding_step(profile: &UserProfile) -> OnboardingStatus {
    OnboardingStep::ORDER
        .into_iter()
        .find(|step| !is_step_complete(*step, profile))
        .map_or(OnboardingStatus::Complete, OnboardingStatus::Pending)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use chrono::{NaiveDate, Utc, Weekday};
    use uuid::Uuid;

    use super::*;
    use crate::domain::{
        catalog::entities::MealType,
        profile::entities::{ActivityLevel, Goal, Pace, ProteinRange, Sex},
    };

    /// Fills the field checked by `step`.
    fn satisfy(profile: &mut UserProfile, step: OnboardingStep) {
        match step {
            OnboardingStep::Sex => profile.sex = Some(Sex::Female),
            OnboardingStep::Metrics => {
                profile.height_cm = Some(165.0);
                profile.weight_kg = Some(62.0);
            }
            OnboardingStep::Birthdate => profile.birthdate = NaiveDate::from_ymd_opt(1994, 5, 17),
            OnboardingStep::Activity => profile.activity_level = Some(ActivityLevel::Light),
            OnboardingStep::Country => profile.country = Some("PT".to_string()),
            OnboardingStep::Objective => profile.goal = Some(Goal::Maintain),
            OnboardingStep::TargetWeight => profile.target_weight_kg = Some(60.0),
            OnboardingStep::Speed => profile.pace = Some(Pace::Slow),
            OnboardingStep::MealDays => {
                profile.diet_days = vec![
                    Weekday::Mon,
                    Weekday::Tue,
                    Weekday::Wed,
                    Weekday::Thu,
                    Weekday::Fri,
                ];
            }
            OnboardingStep::ProteinTarget => profile.protein_target_g = Some(120.0),
            OnboardingStep::MealsTerms => {
                profile.enabled_meals = BTreeSet::from([MealType::Breakfast]);
                profile.terms_accepted_at = Some(Utc::now());
            }
            OnboardingStep::Foods => profile.food_preferences = vec!["oats".to_string()],
            OnboardingStep::Review => profile.plan_reviewed_at = Some(Utc::now()),
            OnboardingStep::Advice => profile.advice_acknowledged_at = Some(Utc::now()),
        }
    }

    #[test]
    fn empty_profile_starts_at_sex() {
        let profile = UserProfile::empty(Uuid::new_v4());

        assert_eq!(
            next_onboarding_step(&profile),
            OnboardingStatus::Pending(OnboardingStep::Sex)
        );
    }

    #[test]
    fn filling_steps_in_order_advances_monotonically() {
        let mut profile = UserProfile::empty(Uuid::new_v4());

        for (index, step) in OnboardingStep::ORDER.into_iter().enumerate() {
            assert_eq!(next_onboarding_step(&profile), OnboardingStatus::Pending(step));
            satisfy(&mut profile, step);

            let expected = OnboardingStep::ORDER
                .get(index + 1)
                .copied()
                .map_or(OnboardingStatus::Complete, OnboardingStatus::Pending);
            assert_eq!(next_onboarding_step(&profile), expected);
        }

        assert!(next_onboarding_step(&profile).is_complete());
    }

    #[test]
    fn earliest_failing_step_wins_over_later_ones() {
        let mut profile = UserProfile::empty(Uuid::new_v4());
        for step in OnboardingStep::ORDER {
            satisfy(&mut profile, step);
        }
        profile.country = Some("   ".to_string());
        profile.food_preferences.clear();

        assert_eq!(
            next_onboarding_step(&profile),
            OnboardingStatus::Pending(OnboardingStep::Country)
        );
    }

    #[test]
    fn zero_metrics_are_incomplete() {
        let mut profile = UserProfile::empty(Uuid::new_v4());
        satisfy(&mut profile, OnboardingStep::Sex);
        profile.height_cm = Some(170.0);
        profile.weight_kg = Some(0.0);

        assert_eq!(
            next_onboarding_step(&profile),
            OnboardingStatus::Pending(OnboardingStep::Metrics)
        );
    }

    #[test]
    fn meal_days_count_distinct_weekdays() {
        let mut profile = UserProfile::empty(Uuid::new_v4());
        profile.diet_days = vec![
            Weekday::Mon,
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
        ];
        assert!(!is_step_complete(OnboardingStep::MealDays, &profile));

        profile.diet_days.push(Weekday::Sat);
        assert!(is_step_complete(OnboardingStep::MealDays, &profile));
    }

    #[test]
    fn protein_accepts_a_valid_range() {
        let mut profile = UserProfile::empty(Uuid::new_v4());
        assert!(!is_step_complete(OnboardingStep::ProteinTarget, &profile));

        profile.protein_range = Some(ProteinRange {
            min_g_per_kg: 2.0,
            max_g_per_kg: 1.6,
        });
        assert!(!is_step_complete(OnboardingStep::ProteinTarget, &profile));

        profile.protein_range = Some(ProteinRange {
            min_g_per_kg: 1.6,
            max_g_per_kg: 2.2,
        });
        assert!(is_step_complete(OnboardingStep::ProteinTarget, &profile));
    }

    #[test]
    fn meals_terms_needs_both_parts() {
        let mut profile = UserProfile::empty(Uuid::new_v4());
        profile.terms_accepted_at = Some(Utc::now());
        assert!(!is_step_complete(OnboardingStep::MealsTerms, &profile));

        profile.enabled_meals.insert(MealType::Dinner);
        assert!(is_step_complete(OnboardingStep::MealsTerms, &profile));
    }
}
