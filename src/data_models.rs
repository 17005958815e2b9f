use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A recipe as it appears in the JSON corpus. Built once at load time and
/// never mutated afterwards; ranking works on clones.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Recipe {
    pub id: u32,
    pub title: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    /// Cooking time in minutes.
    pub time: u32,
    pub cuisine: String,
    pub veg_bool: bool,
}

/// A recipe annotated with the per-query match results. Constructed fresh for
/// every search and discarded after the response is rendered.
#[derive(Serialize, Debug, Clone)]
pub struct ScoredRecipe {
    #[serde(flatten)]
    pub recipe: Recipe,
    /// Fraction of the recipe's distinct normalized ingredients covered by
    /// the user's pantry. Always in (0, 1] for recipes that survive ranking.
    pub match_score: f64,
    pub matching_ingredients: BTreeSet<String>,
    pub missing_ingredients: BTreeSet<String>,
}

impl ScoredRecipe {
    pub fn new(
        recipe: Recipe,
        match_score: f64,
        matching_ingredients: BTreeSet<String>,
        missing_ingredients: BTreeSet<String>,
    ) -> ScoredRecipe {
        ScoredRecipe {
            recipe,
            match_score,
            matching_ingredients,
            missing_ingredients,
        }
    }
}
