use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use mealprep::api::{create_router, SearchContext};
use mealprep::corpus::Corpus;
use mealprep::data_models::Recipe;
use mealprep::ranker::Ranker;

mod test_helpers {
    use super::*;

    pub fn recipe(id: u32, ingredients: &[&str], time: u32, cuisine: &str, veg: bool) -> Recipe {
        Recipe {
            id,
            title: format!("Recipe {id}"),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            steps: vec!["Cook.".to_string()],
            time,
            cuisine: cuisine.to_string(),
            veg_bool: veg,
        }
    }

    pub fn router_with(recipes: Vec<Recipe>) -> axum::Router {
        let corpus: &'static Corpus =
            Box::leak(Box::new(Corpus::from_recipes(recipes).unwrap()));
        create_router(Arc::new(SearchContext {
            corpus,
            ranker: Ranker::default(),
        }))
    }

    /// Twenty single-egg recipes with distinct times, so every one matches a
    /// pantry of ["egg"] at score 1.0 and the order is time ascending.
    pub fn twenty_egg_recipes() -> Vec<Recipe> {
        (1..=20)
            .map(|id| recipe(id, &["egg"], id, "Italian", true))
            .collect()
    }

    pub async fn post_search(router: axum::Router, body: Value) -> (StatusCode, Value) {
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/search")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
        (status, value)
    }
}

use test_helpers::*;

#[tokio::test]
async fn test_search_empty_ingredients_is_bad_request() {
    let router = router_with(twenty_egg_recipes());
    let (status, _) = post_search(router, json!({"ingredients": []})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_search_whitespace_only_ingredients_is_bad_request() {
    let router = router_with(twenty_egg_recipes());
    let (status, _) = post_search(router, json!({"ingredients": ["  ", "\t"]})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_search_returns_scored_results() {
    let router = router_with(vec![
        recipe(1, &["egg", "tomato", "onion"], 20, "Italian", true),
        recipe(2, &["banana", "milk"], 10, "American", true),
    ]);

    let (status, body) = post_search(router, json!({"ingredients": ["egg"]})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_matches"], 1);
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["id"], 1);
    assert_eq!(results[0]["match_percent"], 33);
    assert_eq!(results[0]["matching_ingredients"], json!(["egg"]));
    assert_eq!(results[0]["missing_ingredients"], json!(["onion", "tomato"]));
}

#[tokio::test]
async fn test_search_default_page_size_is_twelve() {
    let router = router_with(twenty_egg_recipes());

    let (status, body) = post_search(router, json!({"ingredients": ["egg"]})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_matches"], 20);
    assert_eq!(body["limit"], 12);
    assert_eq!(body["offset"], 0);
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 12);
    // Equal scores, so times (== ids here) ascend across the page.
    let ids: Vec<u64> = results.iter().map(|r| r["id"].as_u64().unwrap()).collect();
    assert_eq!(ids, (1..=12).collect::<Vec<u64>>());
}

#[tokio::test]
async fn test_search_offset_continues_where_the_page_ended() {
    let router = router_with(twenty_egg_recipes());

    let (status, body) =
        post_search(router, json!({"ingredients": ["egg"], "offset": 12})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_matches"], 20);
    let ids: Vec<u64> = body["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, (13..=20).collect::<Vec<u64>>());
}

#[tokio::test]
async fn test_search_offset_past_the_end_is_empty_not_an_error() {
    let router = router_with(twenty_egg_recipes());

    let (status, body) =
        post_search(router, json!({"ingredients": ["egg"], "offset": 100})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_matches"], 20);
    assert!(body["results"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_search_explicit_limit_is_respected() {
    let router = router_with(twenty_egg_recipes());

    let (status, body) = post_search(
        router,
        json!({"ingredients": ["egg"], "offset": 2, "limit": 3}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["limit"], 3);
    let ids: Vec<u64> = body["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![3, 4, 5]);
}

#[tokio::test]
async fn test_search_filters_narrow_the_corpus_before_ranking() {
    let router = router_with(vec![
        recipe(1, &["egg"], 20, "Italian", true),
        recipe(2, &["egg"], 90, "Italian", true),
        recipe(3, &["egg"], 20, "Asian", false),
    ]);

    let (status, body) = post_search(
        router,
        json!({
            "ingredients": ["egg"],
            "max_time": 60,
            "diet": "vegetarian_only"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_matches"], 1);
    assert_eq!(body["results"][0]["id"], 1);
}

#[tokio::test]
async fn test_search_cuisine_filter() {
    let router = router_with(vec![
        recipe(1, &["egg"], 20, "Italian", true),
        recipe(2, &["egg"], 20, "Asian", true),
    ]);

    let (status, body) = post_search(
        router,
        json!({"ingredients": ["egg"], "cuisines": ["Asian"]}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_matches"], 1);
    assert_eq!(body["results"][0]["id"], 2);
}

#[tokio::test]
async fn test_cuisines_endpoint_lists_sorted_distinct_cuisines() {
    let router = router_with(vec![
        recipe(1, &["egg"], 20, "Mexican", true),
        recipe(2, &["egg"], 20, "Asian", true),
        recipe(3, &["egg"], 20, "Mexican", true),
    ]);

    let response = router
        .oneshot(
            Request::builder()
                .uri("/api/cuisines")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["cuisines"], json!(["Asian", "Mexican"]));
}
