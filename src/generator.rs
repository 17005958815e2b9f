use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::data_models::Recipe;

const INGREDIENTS: &[&str] = &[
    "egg",
    "chicken",
    "rice",
    "pasta",
    "tomato",
    "potato",
    "onion",
    "garlic",
    "cheese",
    "bread",
    "milk",
    "butter",
    "carrot",
    "beef",
    "pork",
    "fish",
    "spinach",
    "flour",
    "sugar",
    "salt",
    "pepper",
    "olive oil",
    "soy sauce",
    "lemon",
    "ginger",
    "chili",
];

const CUISINES: &[&str] = &[
    "Italian",
    "Mexican",
    "Asian",
    "American",
    "Mediterranean",
    "Indian",
];

const ADJECTIVES: &[&str] = &[
    "Spicy", "Savory", "Quick", "Earthy", "Cheesy", "Fresh", "Classic", "Hearty",
];

const DISH_TYPES: &[&str] = &[
    "Stew",
    "Stir-fry",
    "Salad",
    "Bake",
    "Soup",
    "Casserole",
    "Roast",
    "Toast",
    "Omelet",
];

const NON_VEG_ITEMS: &[&str] = &["chicken", "beef", "pork", "fish"];

const TIMES: &[u32] = &[15, 30, 45, 60, 90];

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Generates one synthetic recipe: 3-8 ingredients sampled without
/// replacement, a templated title and steps, and veg_bool derived from the
/// presence of any meat item.
pub fn generate_recipe<R: Rng>(id: u32, rng: &mut R) -> Recipe {
    let num_ingredients = rng.gen_range(3..=8);
    let ingredients: Vec<String> = INGREDIENTS
        .choose_multiple(rng, num_ingredients)
        .map(|s| s.to_string())
        .collect();

    let main_ingredient = capitalize(&ingredients[0]);
    let cuisine = *CUISINES.choose(rng).expect("cuisine pool is non-empty");
    let adjective = *ADJECTIVES.choose(rng).expect("adjective pool is non-empty");
    let dish_type = *DISH_TYPES.choose(rng).expect("dish type pool is non-empty");
    let title = format!("{adjective} {cuisine} {main_ingredient} {dish_type}");

    let is_veg = !ingredients
        .iter()
        .any(|i| NON_VEG_ITEMS.contains(&i.as_str()));

    let steps = vec![
        format!("Chop {} and {}.", ingredients[0], ingredients[1]),
        "Heat pan and add oil.".to_string(),
        "Cook ingredients for 10 minutes.".to_string(),
        "Serve hot.".to_string(),
    ];

    Recipe {
        id,
        title,
        ingredients,
        steps,
        time: *TIMES.choose(rng).expect("time pool is non-empty"),
        cuisine: cuisine.to_string(),
        veg_bool: is_veg,
    }
}

/// Generates a synthetic corpus with sequential ids starting at 1.
pub fn generate_recipes<R: Rng>(count: u32, rng: &mut R) -> Vec<Recipe> {
    (1..=count).map(|id| generate_recipe(id, rng)).collect()
}

/// Serializes a corpus to pretty-printed JSON, creating parent directories
/// as needed.
pub fn write_corpus(path: impl AsRef<Path>, recipes: &[Recipe]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(recipes).context("failed to serialize corpus")?;
    fs::write(path, json)
        .with_context(|| format!("failed to write corpus to {}", path.display()))?;
    tracing::info!(count = recipes.len(), path = %path.display(), "wrote recipe corpus");
    Ok(())
}
