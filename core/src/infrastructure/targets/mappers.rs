use crate::{domain::targets::entities::NutritionTargets, entity::nutrition_targets};

impl From<nutrition_targets::Model> for NutritionTargets {
    fn from(model: nutrition_targets::Model) -> Self {
        Self {
            user_id: model.user_id,
            kcal: model.kcal,
            protein_g: model.protein_g,
            fat_g: model.fat_g,
            carb_g: model.carb_g,
            water_l: model.water_l,
            updated_at: model.updated_at.to_utc(),
        }
    }
}
