use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::corpus::DietFilter;

/// Results per page; the original UI loads twelve cards at a time.
pub const DEFAULT_PAGE_SIZE: usize = 12;

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub ingredients: Vec<String>,
    pub cuisines: Option<Vec<String>>,
    pub max_time: Option<u32>,
    #[serde(default)]
    pub diet: DietFilter,
    #[serde(default)]
    pub offset: usize,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub ingredients: Vec<String>,
    pub results: Vec<RecipeResult>,
    /// Total matches before pagination.
    pub total_matches: usize,
    pub offset: usize,
    pub limit: usize,
    pub processing_time_ms: u128,
}

#[derive(Debug, Serialize)]
pub struct RecipeResult {
    pub id: u32,
    pub title: String,
    pub match_percent: u32,
    pub match_score: f64,
    pub matching_ingredients: BTreeSet<String>,
    pub missing_ingredients: BTreeSet<String>,
    pub steps: Vec<String>,
    pub time: u32,
    pub cuisine: String,
    pub veg_bool: bool,
}

#[derive(Debug, Serialize)]
pub struct CuisinesResponse {
    pub cuisines: Vec<String>,
}
