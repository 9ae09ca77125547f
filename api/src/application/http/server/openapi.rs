use utoipa::OpenApi;

use crate::application::http::{
    health::router::__path_health, ingredient::router::IngredientApiDoc,
    meal_plan::router::MealPlanApiDoc, onboarding::router::OnboardingApiDoc,
    progress::router::{MeasurementApiDoc, ProgressApiDoc},
    targets::router::TargetsApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Nutriplan API"
    ),
    paths(health),
    nest(
        (path = "/meal-plan", api = MealPlanApiDoc),
        (path = "/ingredients", api = IngredientApiDoc),
        (path = "/measurements", api = MeasurementApiDoc),
        (path = "/progress", api = ProgressApiDoc),
        (path = "/targets", api = TargetsApiDoc),
        (path = "/onboarding", api = OnboardingApiDoc),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_route() {
        let openapi = ApiDoc::openapi();

        for path in [
            "/health",
            "/meal-plan/generate",
            "/meal-plan/slots/{meal_type}",
            "/meal-plan/slots/{meal_type}/substitutions",
            "/ingredients",
            "/measurements",
            "/progress/trend",
            "/targets/adjust",
            "/targets/initialize",
            "/onboarding/next-step",
        ] {
            assert!(openapi.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
