//! Catalog loading.
//!
//! Recipes are materialized from JSON: a caller-supplied file, a raw
//! string, or the embedded sample set. The engine itself never fetches
//! anything.

use std::path::Path;
use std::sync::LazyLock;

use tracing::warn;

use crate::error::CatalogError;
use crate::types::Recipe;

/// Embedded sample catalog, parsed once.
static SAMPLE: LazyLock<Vec<Recipe>> = LazyLock::new(|| {
    let json = include_str!("../data/recipes.json");
    serde_json::from_str(json).expect("recipes.json should be valid JSON")
});

/// Parse a catalog from a JSON array of recipe records.
///
/// A record with no ingredients is a data-quality problem upstream; it is
/// kept (the scorer guards against it) but logged.
pub fn from_json(json: &str) -> Result<Vec<Recipe>, CatalogError> {
    let recipes: Vec<Recipe> = serde_json::from_str(json)?;

    for recipe in &recipes {
        if recipe.ingredients.is_empty() {
            warn!(recipe = %recipe.name, "catalog recipe has no ingredients");
        }
    }

    Ok(recipes)
}

/// Read and parse a catalog file.
pub fn from_file(path: impl AsRef<Path>) -> Result<Vec<Recipe>, CatalogError> {
    let json = std::fs::read_to_string(path)?;
    from_json(&json)
}

/// The embedded sample catalog.
pub fn sample() -> Vec<Recipe> {
    SAMPLE.clone()
}
