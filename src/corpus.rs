use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use once_cell::sync::OnceCell;
use serde::Deserialize;
use thiserror::Error;

use crate::config::CONFIG;
use crate::data_models::Recipe;

/// Global corpus instance, loaded once and read-only afterwards.
static CORPUS: OnceCell<Corpus> = OnceCell::new();

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read recipe file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse recipe file {path}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid recipe {id} ({title}): {reason}")]
    Invalid {
        id: u32,
        title: String,
        reason: String,
    },
    #[error("corpus already initialized")]
    AlreadyInitialized,
}

/// The full collection of recipes available to the ranker, held in memory.
/// Records are validated at load time so the ranking core can assume
/// well-formed input.
#[derive(Debug)]
pub struct Corpus {
    recipes: Vec<Recipe>,
}

impl Corpus {
    /// Loads and validates a corpus from a JSON array file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CorpusError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| CorpusError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let recipes: Vec<Recipe> =
            serde_json::from_str(&raw).map_err(|source| CorpusError::Parse {
                path: path.display().to_string(),
                source,
            })?;

        for recipe in &recipes {
            validate(recipe)?;
        }

        tracing::info!(count = recipes.len(), path = %path.display(), "loaded recipe corpus");

        Ok(Self { recipes })
    }

    /// Builds a corpus from already-loaded records, with the same validation
    /// as `load`. Useful when the records don't come from a file.
    pub fn from_recipes(recipes: Vec<Recipe>) -> Result<Self, CorpusError> {
        for recipe in &recipes {
            validate(recipe)?;
        }
        Ok(Self { recipes })
    }

    /// Initialize the global corpus from the configured recipes path.
    /// Call this once at application startup.
    pub fn init_global() -> Result<&'static Corpus, CorpusError> {
        let corpus = Self::load(&CONFIG.recipes_path)?;
        CORPUS
            .set(corpus)
            .map_err(|_| CorpusError::AlreadyInitialized)?;
        Ok(CORPUS.get().unwrap())
    }

    /// Get the global corpus instance.
    /// Panics if the corpus hasn't been initialized.
    pub fn get() -> &'static Corpus {
        CORPUS
            .get()
            .expect("Corpus not initialized. Call Corpus::init_global() first.")
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Distinct cuisines in the corpus, sorted. Drives the cuisine filter.
    pub fn cuisines(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self.recipes.iter().map(|r| r.cuisine.as_str()).collect();
        set.into_iter().map(|c| c.to_string()).collect()
    }

    /// Applies the pre-ranking corpus filters: cuisine, max time, diet.
    pub fn filter(&self, filter: &CorpusFilter) -> Vec<Recipe> {
        self.recipes
            .iter()
            .filter(|r| filter.accepts(r))
            .cloned()
            .collect()
    }
}

fn validate(recipe: &Recipe) -> Result<(), CorpusError> {
    if recipe.time == 0 {
        return Err(CorpusError::Invalid {
            id: recipe.id,
            title: recipe.title.clone(),
            reason: "time must be a positive number of minutes".to_string(),
        });
    }
    Ok(())
}

/// Diet preference applied before ranking.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietFilter {
    #[default]
    All,
    VegetarianOnly,
    NonVegetarian,
}

/// Filters applied to the corpus before the ranker sees it. All fields are
/// optional; an empty filter passes every recipe through.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct CorpusFilter {
    /// Keep only these cuisines. `None` means all cuisines.
    pub cuisines: Option<Vec<String>>,
    /// Keep only recipes taking at most this many minutes.
    pub max_time: Option<u32>,
    #[serde(default)]
    pub diet: DietFilter,
}

impl CorpusFilter {
    pub fn accepts(&self, recipe: &Recipe) -> bool {
        if let Some(cuisines) = &self.cuisines {
            if !cuisines.iter().any(|c| c == &recipe.cuisine) {
                return false;
            }
        }
        if let Some(max_time) = self.max_time {
            if recipe.time > max_time {
                return false;
            }
        }
        match self.diet {
            DietFilter::All => true,
            DietFilter::VegetarianOnly => recipe.veg_bool,
            DietFilter::NonVegetarian => !recipe.veg_bool,
        }
    }
}
