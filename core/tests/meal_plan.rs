use std::collections::BTreeSet;

use chrono::NaiveTime;
use nutriplan_core::{
    application::{InMemoryService, create_in_memory_service},
    domain::{
        authentication::value_objects::Identity,
        catalog::{
            entities::{Ingredient, Macros, MealType, Recipe, RecipeLine},
            ports::{ConstraintService, CatalogRepository},
            value_objects::ApproveIngredientInput,
        },
        common::{PlanningConfig, entities::app_errors::CoreError},
        meal_plan::{
            ports::MealPlanService,
            value_objects::{
                GeneratePlanInput, MatchKind, PlanGeneration, SubstituteIngredientInput,
            },
        },
        profile::entities::UserProfile,
    },
    infrastructure::memory::InMemoryRepository,
};
use uuid::Uuid;

struct Kitchen {
    repository: InMemoryRepository,
    service: InMemoryService,
    oats: Ingredient,
    banana: Ingredient,
    milk: Ingredient,
    honey: Ingredient,
    eggs: Ingredient,
    cheese: Ingredient,
    tofu: Ingredient,
}

fn ingredient(name: &str, kcal: f64, protein: f64, fat: f64, carb: f64) -> Ingredient {
    Ingredient::new(name.to_string(), None, Macros::new(kcal, protein, fat, carb))
}

fn line(ingredient: &Ingredient, grams: f64) -> RecipeLine {
    RecipeLine {
        ingredient_id: ingredient.id,
        grams,
    }
}

async fn kitchen() -> Kitchen {
    let repository = InMemoryRepository::new();

    let oats = ingredient("Oats", 380.0, 13.0, 7.0, 60.0);
    let banana = ingredient("Banana", 89.0, 1.1, 0.3, 23.0);
    let milk = ingredient("Milk", 60.0, 3.4, 3.2, 4.8);
    let honey = ingredient("Honey", 304.0, 0.3, 0.0, 82.0);
    let eggs = ingredient("Eggs", 155.0, 13.0, 11.0, 1.1);
    let cheese = ingredient("Cheese", 400.0, 25.0, 33.0, 1.3);
    let tofu = ingredient("Tofu", 76.0, 8.0, 4.8, 1.9);

    for item in [&oats, &banana, &milk, &honey, &eggs, &cheese, &tofu] {
        repository.add_ingredient(item.clone()).await;
    }

    repository
        .add_recipe(Recipe::new(
            "Oat bowl".to_string(),
            MealType::Breakfast,
            1,
            vec![
                line(&oats, 60.0),
                line(&banana, 100.0),
                line(&milk, 200.0),
                line(&honey, 10.0),
            ],
        ))
        .await;
    repository
        .add_recipe(Recipe::new(
            "Cheese omelette".to_string(),
            MealType::Breakfast,
            1,
            vec![line(&eggs, 120.0), line(&cheese, 30.0)],
        ))
        .await;
    repository
        .add_recipe(Recipe::new(
            "Scrambled tofu".to_string(),
            MealType::Lunch,
            1,
            vec![line(&tofu, 200.0), line(&milk, 50.0)],
        ))
        .await;

    let service = create_in_memory_service(repository.clone(), PlanningConfig::default());

    Kitchen {
        repository,
        service,
        oats,
        banana,
        milk,
        honey,
        eggs,
        cheese,
        tofu,
    }
}

async fn approve(service: &InMemoryService, identity: Identity, names: &[&str]) {
    for name in names {
        service
            .approve_ingredient(
                identity,
                ApproveIngredientInput {
                    name: name.to_string(),
                    category: None,
                    priority: None,
                },
            )
            .await
            .expect("ingredient approved");
    }
}

fn all_meals() -> GeneratePlanInput {
    GeneratePlanInput {
        meal_types: MealType::ALL.to_vec(),
    }
}

#[tokio::test]
async fn generation_without_approved_ingredients_writes_nothing() {
    let kitchen = kitchen().await;
    let identity = Identity::new(Uuid::new_v4());

    let outcome = kitchen
        .service
        .generate_plan(identity, all_meals())
        .await
        .expect("generation runs");

    assert_eq!(outcome, PlanGeneration::NoIngredientsConfigured);
    assert!(kitchen.repository.slots_for(identity.id()).await.is_empty());
}

#[tokio::test]
async fn generation_reports_when_no_recipe_fits() {
    let kitchen = kitchen().await;
    let identity = Identity::new(Uuid::new_v4());
    approve(&kitchen.service, identity, &["Saffron"]).await;

    let outcome = kitchen
        .service
        .generate_plan(identity, all_meals())
        .await
        .expect("generation runs");

    assert_eq!(outcome, PlanGeneration::NoCompatibleRecipes);
}

#[tokio::test]
async fn partial_match_is_used_when_no_recipe_is_fully_approved() {
    let kitchen = kitchen().await;
    let identity = Identity::new(Uuid::new_v4());
    approve(&kitchen.service, identity, &["oats", "BANANA", "Milk"]).await;

    let outcome = kitchen
        .service
        .generate_plan(
            identity,
            GeneratePlanInput {
                meal_types: vec![MealType::Breakfast],
            },
        )
        .await
        .expect("generation runs");

    let PlanGeneration::Generated(assignments) = outcome else {
        panic!("expected a generated plan, got {outcome:?}");
    };
    assert_eq!(assignments.len(), 1);
    assert_eq!(assignments[0].recipe_name, "Oat bowl");
    assert_eq!(assignments[0].match_kind, MatchKind::Partial);
    assert_eq!(assignments[0].matched_ingredients, 3);
    assert_eq!(assignments[0].total_ingredients, 4);
}

#[tokio::test]
async fn generation_is_idempotent_and_keeps_slot_identity() {
    let kitchen = kitchen().await;
    let identity = Identity::new(Uuid::new_v4());
    approve(&kitchen.service, identity, &["Eggs", "Cheese", "Tofu", "Milk"]).await;

    let first = kitchen
        .service
        .generate_plan(identity, all_meals())
        .await
        .expect("generation runs");
    let slots_before = kitchen.repository.slots_for(identity.id()).await;

    let second = kitchen
        .service
        .generate_plan(identity, all_meals())
        .await
        .expect("generation runs");
    let slots_after = kitchen.repository.slots_for(identity.id()).await;

    assert_eq!(first, second);
    assert_eq!(slots_before.len(), 2);
    let ids_before: BTreeSet<Uuid> = slots_before.iter().map(|slot| slot.id).collect();
    let ids_after: BTreeSet<Uuid> = slots_after.iter().map(|slot| slot.id).collect();
    assert_eq!(ids_before, ids_after);

    let PlanGeneration::Generated(assignments) = second else {
        panic!("expected a generated plan");
    };
    let meals: Vec<MealType> = assignments.iter().map(|a| a.meal_type).collect();
    assert_eq!(meals, vec![MealType::Breakfast, MealType::Lunch]);
    assert!(assignments.iter().all(|a| a.match_kind == MatchKind::Strict));
}

#[tokio::test]
async fn profile_meal_time_becomes_schedule_override() {
    let kitchen = kitchen().await;
    let identity = Identity::new(Uuid::new_v4());
    approve(&kitchen.service, identity, &["Eggs", "Cheese"]).await;

    let seven_thirty = NaiveTime::from_hms_opt(7, 30, 0);
    let mut profile = UserProfile::empty(identity.id());
    if let Some(time) = seven_thirty {
        profile.meal_times.insert(MealType::Breakfast, time);
    }
    kitchen.repository.put_profile(profile).await;

    kitchen
        .service
        .generate_plan(identity, all_meals())
        .await
        .expect("generation runs");

    let details = kitchen
        .service
        .get_slot_details(identity, MealType::Breakfast)
        .await
        .expect("slot exists");
    assert_eq!(details.scheduled_at, seven_thirty);
    assert_eq!(details.recipe_name, "Cheese omelette");
}

#[tokio::test]
async fn substitution_keeps_calories_close_and_updates_totals() {
    let kitchen = kitchen().await;
    let identity = Identity::new(Uuid::new_v4());
    approve(&kitchen.service, identity, &["Eggs", "Cheese", "Tofu"]).await;

    kitchen
        .service
        .generate_plan(identity, all_meals())
        .await
        .expect("generation runs");

    let before = kitchen
        .service
        .get_slot_details(identity, MealType::Breakfast)
        .await
        .expect("slot exists");

    let after = kitchen
        .service
        .substitute_ingredient(
            identity,
            SubstituteIngredientInput {
                meal_type: MealType::Breakfast,
                from_ingredient_id: kitchen.cheese.id,
                to_ingredient_id: kitchen.tofu.id,
            },
        )
        .await
        .expect("substitution succeeds");

    // 30 g cheese at 4 kcal/g is 120 kcal, tofu at 0.76 kcal/g needs 158 g
    let tofu_line = after
        .lines
        .iter()
        .find(|line| line.ingredient_id == kitchen.tofu.id)
        .expect("tofu was added");
    assert_eq!(tofu_line.grams, 158.0);
    assert!(tofu_line.added);
    assert!(after.lines.iter().all(|line| line.ingredient_id != kitchen.cheese.id));
    assert!((after.totals.kcal - before.totals.kcal).abs() <= 1.0);

    let reread = kitchen
        .service
        .get_slot_details(identity, MealType::Breakfast)
        .await
        .expect("slot exists");
    assert_eq!(reread, after);
}

#[tokio::test]
async fn substitution_into_an_existing_line_adds_to_it() {
    let kitchen = kitchen().await;
    let identity = Identity::new(Uuid::new_v4());
    approve(&kitchen.service, identity, &["Oats", "Banana", "Milk", "Honey"]).await;

    kitchen
        .service
        .generate_plan(identity, all_meals())
        .await
        .expect("generation runs");

    let before = kitchen
        .service
        .get_slot_details(identity, MealType::Breakfast)
        .await
        .expect("slot exists");

    let after = kitchen
        .service
        .substitute_ingredient(
            identity,
            SubstituteIngredientInput {
                meal_type: MealType::Breakfast,
                from_ingredient_id: kitchen.banana.id,
                to_ingredient_id: kitchen.oats.id,
            },
        )
        .await
        .expect("substitution succeeds");

    // 100 g banana is 89 kcal, worth 23 g of oats on top of the base 60 g
    let oats_line = after
        .lines
        .iter()
        .find(|line| line.ingredient_id == kitchen.oats.id)
        .expect("oats stay in the bowl");
    assert_eq!(oats_line.grams, 83.0);
    assert!(!oats_line.added);
    assert!(after.lines.iter().all(|line| line.ingredient_id != kitchen.banana.id));
    let drift = (after.totals.kcal - before.totals.kcal).abs();
    assert!(drift <= kitchen.oats.macros.kcal_per_gram());
}

#[tokio::test]
async fn substituting_a_zero_calorie_ingredient_leaves_the_slot_untouched() {
    let kitchen = kitchen().await;
    let identity = Identity::new(Uuid::new_v4());

    let water = ingredient("Water", 0.0, 0.0, 0.0, 0.0);
    kitchen.repository.add_ingredient(water.clone()).await;
    kitchen
        .repository
        .add_recipe(Recipe::new(
            "Tofu broth".to_string(),
            MealType::Dinner,
            1,
            vec![line(&water, 300.0), line(&kitchen.tofu, 100.0)],
        ))
        .await;
    approve(&kitchen.service, identity, &["Water", "Tofu", "Milk"]).await;

    kitchen
        .service
        .generate_plan(
            identity,
            GeneratePlanInput {
                meal_types: vec![MealType::Dinner],
            },
        )
        .await
        .expect("generation runs");

    let before = kitchen
        .service
        .get_slot_details(identity, MealType::Dinner)
        .await
        .expect("slot exists");

    let result = kitchen
        .service
        .substitute_ingredient(
            identity,
            SubstituteIngredientInput {
                meal_type: MealType::Dinner,
                from_ingredient_id: water.id,
                to_ingredient_id: kitchen.tofu.id,
            },
        )
        .await;
    assert!(matches!(result, Err(CoreError::Invalid(_))));

    let after = kitchen
        .service
        .get_slot_details(identity, MealType::Dinner)
        .await
        .expect("slot exists");
    assert_eq!(after, before);
}

#[tokio::test]
async fn substitution_rejects_unapproved_target() {
    let kitchen = kitchen().await;
    let identity = Identity::new(Uuid::new_v4());
    approve(&kitchen.service, identity, &["Eggs", "Cheese"]).await;
    kitchen
        .service
        .generate_plan(identity, all_meals())
        .await
        .expect("generation runs");

    let result = kitchen
        .service
        .substitute_ingredient(
            identity,
            SubstituteIngredientInput {
                meal_type: MealType::Breakfast,
                from_ingredient_id: kitchen.cheese.id,
                to_ingredient_id: kitchen.honey.id,
            },
        )
        .await;

    assert_eq!(result, Err(CoreError::IngredientNotInConstraints(kitchen.honey.id)));
}

#[tokio::test]
async fn removed_ingredient_cannot_be_substituted_again() {
    let kitchen = kitchen().await;
    let identity = Identity::new(Uuid::new_v4());
    approve(&kitchen.service, identity, &["Eggs", "Cheese", "Tofu", "Milk"]).await;
    kitchen
        .service
        .generate_plan(identity, all_meals())
        .await
        .expect("generation runs");

    let swap = |from: Uuid, to: Uuid| SubstituteIngredientInput {
        meal_type: MealType::Breakfast,
        from_ingredient_id: from,
        to_ingredient_id: to,
    };

    kitchen
        .service
        .substitute_ingredient(identity, swap(kitchen.cheese.id, kitchen.tofu.id))
        .await
        .expect("first substitution succeeds");

    let again = kitchen
        .service
        .substitute_ingredient(identity, swap(kitchen.cheese.id, kitchen.milk.id))
        .await;
    assert_eq!(again, Err(CoreError::IngredientNotInRecipe(kitchen.cheese.id)));

    let absent = kitchen
        .service
        .substitute_ingredient(identity, swap(kitchen.oats.id, kitchen.milk.id))
        .await;
    assert_eq!(absent, Err(CoreError::IngredientNotInRecipe(kitchen.oats.id)));
}

#[tokio::test]
async fn substitution_without_a_slot_is_not_found() {
    let kitchen = kitchen().await;
    let identity = Identity::new(Uuid::new_v4());
    approve(&kitchen.service, identity, &["Banana"]).await;

    let result = kitchen
        .service
        .substitute_ingredient(
            identity,
            SubstituteIngredientInput {
                meal_type: MealType::Dinner,
                from_ingredient_id: kitchen.eggs.id,
                to_ingredient_id: kitchen.banana.id,
            },
        )
        .await;

    assert_eq!(result, Err(CoreError::SlotNotFound(MealType::Dinner)));
}

#[tokio::test]
async fn approving_an_unknown_name_adds_it_to_the_catalog() {
    let kitchen = kitchen().await;
    let identity = Identity::new(Uuid::new_v4());

    let constraint = kitchen
        .service
        .approve_ingredient(
            identity,
            ApproveIngredientInput {
                name: "  Tempeh ".to_string(),
                category: Some("protein".to_string()),
                priority: Some(1),
            },
        )
        .await
        .expect("ingredient approved");

    let created = kitchen
        .repository
        .find_ingredient_by_name("tempeh".to_string())
        .await
        .expect("lookup succeeds")
        .expect("ingredient exists");
    assert_eq!(created.id, constraint.ingredient_id);
    assert_eq!(created.name, "Tempeh");
    assert_eq!(created.macros, Macros::default());

    let known = kitchen
        .service
        .approve_ingredient(
            identity,
            ApproveIngredientInput {
                name: "milk".to_string(),
                category: None,
                priority: None,
            },
        )
        .await
        .expect("ingredient approved");
    assert_eq!(known.ingredient_id, kitchen.milk.id);
}
