use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::{
    domain::profile::entities::{ProteinRange, UserProfile},
    entity::user_profiles,
};

/// Enum columns are stored as their serde name; unknown values read as unset.
fn parse_text<T: DeserializeOwned>(column: &str, value: Option<String>) -> Option<T> {
    let value = value?;
    match serde_json::from_value(Value::String(value.clone())) {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            warn!(column, value = %value, "Ignoring unknown profile value");
            None
        }
    }
}

fn parse_json<T: DeserializeOwned + Default>(column: &str, value: Value) -> T {
    if value.is_null() {
        return T::default();
    }

    serde_json::from_value(value).unwrap_or_else(|e| {
        warn!(column, "Ignoring unreadable profile value: {}", e);
        T::default()
    })
}

impl From<user_profiles::Model> for UserProfile {
    fn from(model: user_profiles::Model) -> Self {
        let protein_range = match (model.protein_min_g_per_kg, model.protein_max_g_per_kg) {
            (Some(min_g_per_kg), Some(max_g_per_kg)) => Some(ProteinRange {
                min_g_per_kg,
                max_g_per_kg,
            }),
            _ => None,
        };

        Self {
            user_id: model.user_id,
            sex: parse_text("sex", model.sex),
            height_cm: model.height_cm,
            weight_kg: model.weight_kg,
            birthdate: model.birthdate,
            activity_level: parse_text("activity_level", model.activity_level),
            country: model.country,
            goal: parse_text("goal", model.goal),
            target_weight_kg: model.target_weight_kg,
            pace: parse_text("pace", model.pace),
            diet_days: parse_json("diet_days", model.diet_days),
            protein_target_g: model.protein_target_g,
            protein_range,
            enabled_meals: parse_json("enabled_meals", model.enabled_meals),
            meal_times: parse_json("meal_times", model.meal_times),
            food_preferences: parse_json("food_preferences", model.food_preferences),
            terms_accepted_at: model.terms_accepted_at.map(|at| at.to_utc()),
            plan_reviewed_at: model.plan_reviewed_at.map(|at| at.to_utc()),
            advice_acknowledged_at: model.advice_acknowledged_at.map(|at| at.to_utc()),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveTime, Utc, Weekday};
    use serde_json::json;
    use uuid::Uuid;

    use super::*;
    use crate::domain::{
        catalog::entities::MealType,
        profile::entities::{Goal, Pace, Sex},
    };

    fn model() -> user_profiles::Model {
        user_profiles::Model {
            user_id: Uuid::new_v4(),
            sex: Some("female".to_string()),
            height_cm: Some(168.0),
            weight_kg: Some(64.0),
            birthdate: None,
            activity_level: Some("very_active".to_string()),
            country: Some("FR".to_string()),
            goal: Some("gain_muscle".to_string()),
            target_weight_kg: Some(67.0),
            pace: Some("warp".to_string()),
            diet_days: json!(["mon", "Tue", "wednesday"]),
            protein_target_g: None,
            protein_min_g_per_kg: Some(1.6),
            protein_max_g_per_kg: Some(2.0),
            enabled_meals: json!(["breakfast", "dinner"]),
            meal_times: json!({"breakfast": "07:30:00"}),
            food_preferences: Value::Null,
            terms_accepted_at: None,
            plan_reviewed_at: None,
            advice_acknowledged_at: None,
            updated_at: Utc::now().fixed_offset(),
        }
    }

    #[test]
    fn maps_stored_columns_to_profile() {
        let profile = UserProfile::from(model());

        assert_eq!(profile.sex, Some(Sex::Female));
        assert_eq!(profile.goal, Some(Goal::GainMuscle));
        assert_eq!(profile.diet_days, vec![Weekday::Mon, Weekday::Tue, Weekday::Wed]);
        assert!(profile.enabled_meals.contains(&MealType::Dinner));
        assert_eq!(
            profile.meal_times.get(&MealType::Breakfast),
            NaiveTime::from_hms_opt(7, 30, 0).as_ref()
        );
        assert!(profile.food_preferences.is_empty());
        assert!(profile.protein_range.is_some_and(|range| range.is_valid()));
    }

    #[test]
    fn unknown_enum_values_read_as_unset() {
        let profile = UserProfile::from(model());

        assert_eq!(profile.pace, None::<Pace>);
    }
}
