//! Candidate selection for automatic plan generation.
//!
//! A recipe is a *strict* candidate when every ingredient line is approved
//! and a *partial* one when at least one is. Strict candidates always win;
//! partial ones are only considered when no strict candidate exists.

use std::collections::{BTreeSet, HashMap};

use tracing::debug;
use uuid::Uuid;

use crate::domain::{
    catalog::entities::{Ingredient, Recipe},
    meal_plan::value_objects::MatchKind,
};

#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate<'a> {
    pub recipe: &'a Recipe,
    pub matched: usize,
    pub kcal: f64,
    pub kind: MatchKind,
}

/// Number of lines whose ingredient is approved.
pub fn matched_lines(recipe: &Recipe, approved: &BTreeSet<Uuid>) -> usize {
    recipe
        .ingredient_ids()
        .filter(|id| approved.contains(id))
        .count()
}

/// Pick the best recipe: most approved lines first, then fewest calories.
/// Remaining ties keep the order of `recipes`.
pub fn select_recipe<'a>(
    recipes: &'a [Recipe],
    approved: &BTreeSet<Uuid>,
    ingredients: &HashMap<Uuid, Ingredient>,
) -> Option<ScoredCandidate<'a>> {
    let candidates: Vec<ScoredCandidate<'a>> = recipes
        .iter()
        .filter_map(|recipe| {
            let matched = matched_lines(recipe, approved);
            if matched == 0 {
                return None;
            }

            let kind = if matched == recipe.lines.len() {
                MatchKind::Strict
            } else {
                MatchKind::Partial
            };

            Some(ScoredCandidate {
                recipe,
                matched,
                kcal: recipe.macros(ingredients).kcal,
                kind,
            })
        })
        .collect();

    let has_strict = candidates.iter().any(|c| c.kind == MatchKind::Strict);
    let mut pool: Vec<ScoredCandidate<'a>> = candidates
        .into_iter()
        .filter(|c| !has_strict || c.kind == MatchKind::Strict)
        .collect();

    // Stable: equal keys keep catalog order.
    pool.sort_by(|a, b| {
        b.matched
            .cmp(&a.matched)
            .then_with(|| a.kcal.total_cmp(&b.kcal))
    });

    debug!(
        candidates = pool.len(),
        strict = has_strict,
        "Scored recipe candidates"
    );

    pool.into_iter().next()
}
