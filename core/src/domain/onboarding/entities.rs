use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

/// Questionnaire steps in the order a user walks through them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum OnboardingStep {
    Sex,
    Metrics,
    Birthdate,
    Activity,
    Country,
    Objective,
    TargetWeight,
    Speed,
    MealDays,
    ProteinTarget,
    MealsTerms,
    Foods,
    Review,
    Advice,
}

impl OnboardingStep {
    pub const ORDER: [OnboardingStep; 14] = [
        OnboardingStep::Sex,
        OnboardingStep::Metrics,
        OnboardingStep::Birthdate,
        OnboardingStep::Activity,
        OnboardingStep::Country,
        OnboardingStep::Objective,
        OnboardingStep::TargetWeight,
        OnboardingStep::Speed,
        OnboardingStep::MealDays,
        OnboardingStep::ProteinTarget,
        OnboardingStep::MealsTerms,
        OnboardingStep::Foods,
        OnboardingStep::Review,
        OnboardingStep::Advice,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OnboardingStep::Sex => "sex",
            OnboardingStep::Metrics => "metrics",
            OnboardingStep::Birthdate => "birthdate",
            OnboardingStep::Activity => "activity",
            OnboardingStep::Country => "country",
            OnboardingStep::Objective => "objective",
            OnboardingStep::TargetWeight => "target-weight",
            OnboardingStep::Speed => "speed",
            OnboardingStep::MealDays => "meal-days",
            OnboardingStep::ProteinTarget => "protein-target",
            OnboardingStep::MealsTerms => "meals-terms",
            OnboardingStep::Foods => "foods",
            OnboardingStep::Review => "review",
            OnboardingStep::Advice => "advice",
        }
    }
}

impl fmt::Display for OnboardingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Either the step the user must complete next, or `complete`. Serialized as
/// a bare string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingStatus {
    Pending(OnboardingStep),
    Complete,
}

impl OnboardingStatus {
    pub fn is_complete(&self) -> bool {
        matches!(self, OnboardingStatus::Complete)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OnboardingStatus::Pending(step) => step.as_str(),
            OnboardingStatus::Complete => "complete",
        }
    }
}

impl fmt::Display for OnboardingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OnboardingStatus {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value == "complete" {
            return Ok(OnboardingStatus::Complete);
        }

        OnboardingStep::ORDER
            .into_iter()
            .find(|step| step.as_str() == value)
            .map(OnboardingStatus::Pending)
            .ok_or_else(|| CoreError::Invalid(format!("unknown onboarding step: {value}")))
    }
}

impl Serialize for OnboardingStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for OnboardingStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_as_bare_string() {
        let pending = OnboardingStatus::Pending(OnboardingStep::TargetWeight);
        assert_eq!(
            serde_json::to_string(&pending).expect("serializes"),
            "\"target-weight\""
        );
        assert_eq!(
            serde_json::to_string(&OnboardingStatus::Complete).expect("serializes"),
            "\"complete\""
        );

        let parsed: OnboardingStatus = serde_json::from_str("\"complete\"").expect("parses");
        assert!(parsed.is_complete());

        let parsed: OnboardingStatus = serde_json::from_str("\"meal-days\"").expect("parses");
        assert_eq!(parsed, OnboardingStatus::Pending(OnboardingStep::MealDays));
        assert!(serde_json::from_str::<OnboardingStatus>("\"done\"").is_err());
    }

    #[test]
    fn order_matches_declaration_order() {
        assert!(OnboardingStep::ORDER.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
