use crate::{
    domain::progress::entities::{BodyMeasurementSample, Circumferences},
    entity::body_measurements,
};

impl From<&body_measurements::Model> for BodyMeasurementSample {
    fn from(model: &body_measurements::Model) -> Self {
        Self {
            user_id: model.user_id,
            date: model.date,
            weight_kg: model.weight_kg,
            body_fat_pct: model.body_fat_pct,
            muscle_pct: model.muscle_pct,
            circumferences: Circumferences {
                waist_cm: model.waist_cm,
                hip_cm: model.hip_cm,
                chest_cm: model.chest_cm,
                arm_cm: model.arm_cm,
                thigh_cm: model.thigh_cm,
            },
            recorded_at: model.recorded_at.to_utc(),
        }
    }
}

impl From<body_measurements::Model> for BodyMeasurementSample {
    fn from(model: body_measurements::Model) -> Self {
        Self::from(&model)
    }
}
