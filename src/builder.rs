use std::fs;
use std::path::Path;

use rand::Rng;
use serde_json::Value;

use crate::data_models::Recipe;
use crate::generator;

/// Cuisines recognized when mapping raw dataset tags; anything else becomes
/// "International".
const KNOWN_CUISINES: &[&str] = &[
    "Italian",
    "Mexican",
    "Asian",
    "American",
    "Mediterranean",
    "Indian",
    "French",
    "Thai",
    "Greek",
    "Japanese",
];

/// Forkgasm entries carry no explicit cooking time.
const FORKGASM_DEFAULT_TIME: u32 = 45;

/// Fallback when a dummyjson entry has no usable cook/prep minutes.
const DUMMYJSON_DEFAULT_TIME: u32 = 30;

pub const DEFAULT_TARGET_COUNT: u32 = 1000;

/// Normalizes a raw forkgasm dump into corpus records.
///
/// Ingredient names are flattened from both the top-level `ingredient` list
/// and every `ingredientGroup`; steps come from `step[].description`; the
/// cuisine is the first recognized tag, and Vegetarian/Vegan tags set the
/// veg flag. Entries missing a field are kept with that field empty rather
/// than dropped.
pub fn normalize_forkgasm(data: &Value, start_id: u32) -> Vec<Recipe> {
    let mut normalized = Vec::new();
    let Some(recipes) = data.get("recipe").and_then(Value::as_array) else {
        return normalized;
    };

    for r in recipes {
        let mut ingredients = Vec::new();
        if let Some(items) = r.get("ingredient").and_then(Value::as_array) {
            ingredients.extend(ingredient_names(items));
        }
        if let Some(groups) = r.get("ingredientGroup").and_then(Value::as_array) {
            for group in groups {
                if let Some(items) = group.get("ingredient").and_then(Value::as_array) {
                    ingredients.extend(ingredient_names(items));
                }
            }
        }

        let steps: Vec<String> = r
            .get("step")
            .and_then(Value::as_array)
            .map(|steps| {
                steps
                    .iter()
                    .filter_map(|s| s.get("description").and_then(Value::as_str))
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let tags: Vec<&str> = r
            .get("tag")
            .and_then(Value::as_array)
            .map(|tags| tags.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default();

        let cuisine = tags
            .iter()
            .find(|t| KNOWN_CUISINES.contains(t))
            .map(|t| t.to_string())
            .unwrap_or_else(|| "International".to_string());

        let veg_bool = tags.contains(&"Vegetarian") || tags.contains(&"Vegan");

        normalized.push(Recipe {
            id: start_id + normalized.len() as u32,
            title: r
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or("Unknown Recipe")
                .to_string(),
            ingredients,
            steps,
            time: FORKGASM_DEFAULT_TIME,
            cuisine,
            veg_bool,
        });
    }

    normalized
}

fn ingredient_names(items: &[Value]) -> Vec<String> {
    items
        .iter()
        .filter_map(|item| item.get("name").and_then(Value::as_str))
        .map(str::to_string)
        .collect()
}

/// Normalizes a raw dummyjson dump into corpus records.
///
/// `time` is cook plus prep minutes; entries where both come out to zero get
/// the dummyjson default so the loader's positive-time validation holds.
pub fn normalize_dummyjson(data: &Value, start_id: u32) -> Vec<Recipe> {
    let mut normalized = Vec::new();
    let Some(recipes) = data.get("recipes").and_then(Value::as_array) else {
        return normalized;
    };

    for r in recipes {
        let cook = r
            .get("cookTimeMinutes")
            .and_then(Value::as_u64)
            .unwrap_or(DUMMYJSON_DEFAULT_TIME as u64) as u32;
        let prep = r.get("prepTimeMinutes").and_then(Value::as_u64).unwrap_or(0) as u32;
        let mut time = cook + prep;
        if time == 0 {
            time = DUMMYJSON_DEFAULT_TIME;
        }

        let tags: Vec<&str> = r
            .get("tags")
            .and_then(Value::as_array)
            .map(|tags| tags.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default();

        normalized.push(Recipe {
            id: start_id + normalized.len() as u32,
            title: r
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or("Unknown Recipe")
                .to_string(),
            ingredients: string_array(r.get("ingredients")),
            steps: string_array(r.get("instructions")),
            time,
            cuisine: r
                .get("cuisine")
                .and_then(Value::as_str)
                .unwrap_or("International")
                .to_string(),
            veg_bool: tags.contains(&"Vegetarian"),
        });
    }

    normalized
}

fn string_array(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Builds a corpus from the fetched raw datasets, then fills to
/// `target_count` with synthetic recipes. Ids are assigned sequentially from
/// 1 across all sources. A missing or unreadable raw file is logged and
/// skipped; the remaining sources still contribute.
pub fn build_corpus<R: Rng>(
    raw_dir: impl AsRef<Path>,
    target_count: u32,
    rng: &mut R,
) -> Vec<Recipe> {
    let raw_dir = raw_dir.as_ref();
    let mut all: Vec<Recipe> = Vec::new();
    let mut current_id: u32 = 1;

    let normalizers: [(&str, fn(&Value, u32) -> Vec<Recipe>); 2] = [
        ("forkgasm", normalize_forkgasm),
        ("dummyjson", normalize_dummyjson),
    ];

    for (name, normalize) in normalizers {
        let path = raw_dir.join(format!("raw_{name}.json"));
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(source = name, path = %path.display(), error = %e, "skipping raw dataset");
                continue;
            }
        };
        match serde_json::from_str::<Value>(&raw) {
            Ok(data) => {
                let recipes = normalize(&data, current_id);
                tracing::info!(source = name, count = recipes.len(), "normalized raw dataset");
                current_id += recipes.len() as u32;
                all.extend(recipes);
            }
            Err(e) => {
                tracing::error!(source = name, error = %e, "failed to parse raw dataset");
            }
        }
    }

    let needed = target_count.saturating_sub(all.len() as u32);
    if needed > 0 {
        tracing::info!(needed, "filling corpus with synthetic recipes");
        for _ in 0..needed {
            all.push(generator::generate_recipe(current_id, rng));
            current_id += 1;
        }
    }

    all
}
