use tracing::warn;

use crate::{
    domain::{
        catalog::entities::MealType,
        meal_plan::entities::{MealPlanSlot, OverrideEntry, SlotOverrides},
    },
    entity::meal_plan_slots,
};

pub fn map_slot(model: meal_plan_slots::Model) -> Option<MealPlanSlot> {
    let meal_type = match model.meal_type.parse::<MealType>() {
        Ok(meal_type) => meal_type,
        Err(e) => {
            warn!(slot_id = %model.id, "Skipping slot: {}", e);
            return None;
        }
    };

    let overrides = serde_json::from_value::<Vec<OverrideEntry>>(model.overrides)
        .map(SlotOverrides::from)
        .unwrap_or_else(|e| {
            warn!(slot_id = %model.id, "Unreadable slot overrides, ignoring them: {}", e);
            SlotOverrides::new()
        });

    Some(MealPlanSlot {
        id: model.id,
        user_id: model.user_id,
        meal_type,
        recipe_id: model.recipe_id,
        serving_multiplier: model.serving_multiplier,
        overrides,
        created_at: model.created_at.to_utc(),
        updated_at: model.updated_at.to_utc(),
    })
}
