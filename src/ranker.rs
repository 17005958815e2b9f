use std::collections::BTreeSet;

use crate::data_models::{Recipe, ScoredRecipe};
use crate::matcher::{normalize, MatchStrategy, SubstringContainment};

/// Scores every candidate recipe against a pantry ingredient list and
/// produces a deterministically ordered result.
///
/// The ranking itself is a pure in-memory pass: no I/O, no shared state,
/// no failure modes. One `Ranker` can be shared read-only across concurrent
/// requests.
pub struct Ranker {
    strategy: Box<dyn MatchStrategy>,
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new(Box::new(SubstringContainment))
    }
}

impl Ranker {
    pub fn new(strategy: Box<dyn MatchStrategy>) -> Self {
        Self { strategy }
    }

    /// Ranks `recipes` by pantry coverage.
    ///
    /// Every user and recipe token is normalized before comparison, recipe
    /// ingredients are deduplicated via set construction, and a recipe
    /// ingredient counts as covered when the strategy accepts it against any
    /// user term. Recipes with no ingredients or a zero score are dropped.
    /// Survivors are sorted by score descending, then time ascending; the
    /// sort is stable so full ties keep the corpus order.
    pub fn rank(&self, user_ingredients: &[String], recipes: &[Recipe]) -> Vec<ScoredRecipe> {
        let user_set: BTreeSet<String> = user_ingredients
            .iter()
            .map(|i| normalize(i))
            .filter(|i| !i.is_empty())
            .collect();

        if user_set.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<ScoredRecipe> = Vec::new();

        for recipe in recipes {
            let recipe_set: BTreeSet<String> = recipe
                .ingredients
                .iter()
                .map(|i| normalize(i))
                .collect();

            if recipe_set.is_empty() {
                continue;
            }

            let mut matching = BTreeSet::new();
            let mut missing = BTreeSet::new();

            for ring in &recipe_set {
                let covered = user_set.iter().any(|uing| self.strategy.is_covered(uing, ring));
                if covered {
                    matching.insert(ring.clone());
                } else {
                    missing.insert(ring.clone());
                }
            }

            if matching.is_empty() {
                continue;
            }

            let score = matching.len() as f64 / recipe_set.len() as f64;
            scored.push(ScoredRecipe::new(recipe.clone(), score, matching, missing));
        }

        // score desc, time asc; stable so corpus order breaks remaining ties
        scored.sort_by(|a, b| {
            b.match_score
                .total_cmp(&a.match_score)
                .then(a.recipe.time.cmp(&b.recipe.time))
        });

        scored
    }
}
