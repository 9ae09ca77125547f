use std::collections::BTreeMap;

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{catalog::entities::MealType, common::generate_timestamp};

/// What an override is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "ingredient_id", rename_all = "snake_case")]
pub enum OverrideKey {
    Ingredient(Uuid),
    Schedule,
}

/// A single adjustment layered over a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Override {
    Removed,
    Grams(u32),
    ScheduledAt(NaiveTime),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideEntry {
    pub key: OverrideKey,
    pub value: Override,
}

/// Overrides of one slot. `Removed`/`Grams` only live under ingredient keys
/// and `ScheduledAt` only under the schedule key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<OverrideEntry>", into = "Vec<OverrideEntry>")]
pub struct SlotOverrides {
    entries: BTreeMap<OverrideKey, Override>,
}

impl SlotOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_schedule(scheduled_at: Option<NaiveTime>) -> Self {
        let mut overrides = Self::new();
        if let Some(time) = scheduled_at {
            overrides.set_schedule(time);
        }
        overrides
    }

    /// Replacement grams for an ingredient; `Some(0)` when removed.
    pub fn ingredient_grams(&self, ingredient_id: Uuid) -> Option<u32> {
        match self.entries.get(&OverrideKey::Ingredient(ingredient_id)) {
            Some(Override::Removed) => Some(0),
            Some(Override::Grams(grams)) => Some(*grams),
            _ => None,
        }
    }

    pub fn set_ingredient_grams(&mut self, ingredient_id: Uuid, grams: u32) {
        let value = if grams == 0 {
            Override::Removed
        } else {
            Override::Grams(grams)
        };
        self.entries
            .insert(OverrideKey::Ingredient(ingredient_id), value);
    }

    pub fn scheduled_at(&self) -> Option<NaiveTime> {
        match self.entries.get(&OverrideKey::Schedule) {
            Some(Override::ScheduledAt(time)) => Some(*time),
            _ => None,
        }
    }

    pub fn set_schedule(&mut self, time: NaiveTime) {
        self.entries
            .insert(OverrideKey::Schedule, Override::ScheduledAt(time));
    }

    /// (ingredient, grams) for every ingredient override, removals as 0.
    pub fn ingredient_overrides(&self) -> impl Iterator<Item = (Uuid, u32)> + '_ {
        self.entries.iter().filter_map(|(key, value)| match (key, value) {
            (OverrideKey::Ingredient(id), Override::Removed) => Some((*id, 0)),
            (OverrideKey::Ingredient(id), Override::Grams(grams)) => Some((*id, *grams)),
            _ => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> Vec<OverrideEntry> {
        self.entries
            .iter()
            .map(|(key, value)| OverrideEntry {
                key: *key,
                value: *value,
            })
            .collect()
    }
}

impl From<Vec<OverrideEntry>> for SlotOverrides {
    fn from(entries: Vec<OverrideEntry>) -> Self {
        let mut overrides = SlotOverrides::new();
        for entry in entries {
            match (entry.key, entry.value) {
                (OverrideKey::Ingredient(id), Override::Removed) => {
                    overrides.set_ingredient_grams(id, 0)
                }
                (OverrideKey::Ingredient(id), Override::Grams(grams)) => {
                    overrides.set_ingredient_grams(id, grams)
                }
                (OverrideKey::Schedule, Override::ScheduledAt(time)) => {
                    overrides.set_schedule(time)
                }
                (key, value) => {
                    tracing::warn!(?key, ?value, "Dropping mismatched slot override");
                }
            }
        }
        overrides
    }
}

impl From<SlotOverrides> for Vec<OverrideEntry> {
    fn from(overrides: SlotOverrides) -> Self {
        overrides.entries()
    }
}

/// One user's assigned recipe for one meal type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlanSlot {
    pub id: Uuid,
    pub user_id: Uuid,
    pub meal_type: MealType,
    pub recipe_id: Uuid,
    pub serving_multiplier: f64,
    pub overrides: SlotOverrides,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MealPlanSlot {
    pub fn new(
        user_id: Uuid,
        meal_type: MealType,
        recipe_id: Uuid,
        overrides: SlotOverrides,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id,
            meal_type,
            recipe_id,
            serving_multiplier: 1.0,
            overrides,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_grams_is_stored_as_removed() {
        let id = Uuid::new_v4();
        let mut overrides = SlotOverrides::new();
        overrides.set_ingredient_grams(id, 0);

        assert_eq!(
            overrides.entries(),
            vec![OverrideEntry {
                key: OverrideKey::Ingredient(id),
                value: Override::Removed,
            }]
        );
        assert_eq!(overrides.ingredient_grams(id), Some(0));
    }

    #[test]
    fn schedule_is_independent_of_ingredient_overrides() {
        let id = Uuid::new_v4();
        let time = NaiveTime::from_hms_opt(7, 30, 0).unwrap();
        let mut overrides = SlotOverrides::with_schedule(Some(time));
        overrides.set_ingredient_grams(id, 120);

        assert_eq!(overrides.scheduled_at(), Some(time));
        assert_eq!(overrides.ingredient_overrides().collect::<Vec<_>>(), vec![(id, 120)]);
    }

    #[test]
    fn json_shape_is_a_tagged_list() {
        let id = Uuid::nil();
        let mut overrides = SlotOverrides::with_schedule(NaiveTime::from_hms_opt(13, 0, 0));
        overrides.set_ingredient_grams(id, 0);

        let json = serde_json::to_value(&overrides).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {
                    "key": { "kind": "ingredient", "ingredient_id": id },
                    "value": { "kind": "removed" }
                },
                {
                    "key": { "kind": "schedule" },
                    "value": { "kind": "scheduled_at", "value": "13:00:00" }
                }
            ])
        );

        let back: SlotOverrides = serde_json::from_value(json).unwrap();
        assert_eq!(back, overrides);
    }

    #[test]
    fn mismatched_entries_are_dropped_on_load() {
        let json = serde_json::json!([
            { "key": { "kind": "schedule" }, "value": { "kind": "grams", "value": 40 } }
        ]);

        let overrides: SlotOverrides = serde_json::from_value(json).unwrap();
        assert!(overrides.is_empty());
    }
}
