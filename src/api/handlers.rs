use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;
use std::time::Instant;

use crate::corpus::CorpusFilter;

use super::models::{
    CuisinesResponse, RecipeResult, SearchRequest, SearchResponse, DEFAULT_PAGE_SIZE,
};
use super::SearchContext;

pub async fn search_handler(
    State(ctx): State<Arc<SearchContext>>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, (StatusCode, String)> {
    let start = Instant::now();

    if request.ingredients.iter().all(|i| i.trim().is_empty()) {
        return Err((
            StatusCode::BAD_REQUEST,
            "Ingredient list cannot be empty".to_string(),
        ));
    }

    // Cuisine/time/diet filters narrow the corpus before ranking.
    let filter = CorpusFilter {
        cuisines: request.cuisines.clone(),
        max_time: request.max_time,
        diet: request.diet,
    };
    let candidates = ctx.corpus.filter(&filter);

    let matches = ctx.ranker.rank(&request.ingredients, &candidates);
    let total_matches = matches.len();

    let limit = request.limit.unwrap_or(DEFAULT_PAGE_SIZE);
    let page: Vec<RecipeResult> = matches
        .into_iter()
        .skip(request.offset)
        .take(limit)
        .map(|scored| RecipeResult {
            id: scored.recipe.id,
            title: scored.recipe.title,
            match_percent: (scored.match_score * 100.0) as u32,
            match_score: scored.match_score,
            matching_ingredients: scored.matching_ingredients,
            missing_ingredients: scored.missing_ingredients,
            steps: scored.recipe.steps,
            time: scored.recipe.time,
            cuisine: scored.recipe.cuisine,
            veg_bool: scored.recipe.veg_bool,
        })
        .collect();

    let processing_time_ms = start.elapsed().as_millis();

    Ok(Json(SearchResponse {
        ingredients: request.ingredients,
        results: page,
        total_matches,
        offset: request.offset,
        limit,
        processing_time_ms,
    }))
}

pub async fn cuisines_handler(
    State(ctx): State<Arc<SearchContext>>,
) -> Json<CuisinesResponse> {
    Json(CuisinesResponse {
        cuisines: ctx.corpus.cuisines(),
    })
}
