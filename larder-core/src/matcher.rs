//! Recipe match scoring.
//!
//! Scores one recipe against the set of on-hand ingredients and partitions
//! the recipe's ingredient list into matched and missing.

use crate::substitutions::ingredients_similar;
use crate::types::{Recipe, ScoredRecipe};

/// Normalize an ingredient name for comparison: lower-case, trimmed.
pub fn normalize_ingredient(name: &str) -> String {
    name.to_lowercase().trim().to_string()
}

/// Score a recipe against the available ingredients.
///
/// Both sides are normalized per call; stored data is never mutated. A
/// recipe ingredient counts as matched when it contains an available
/// ingredient as a substring (or vice versa), or when the two share a
/// substitution group. One available ingredient may satisfy any number of
/// recipe ingredients.
///
/// With no available ingredients the recipe scores 0% and every ingredient
/// is reported missing.
pub fn score_recipe(recipe: &Recipe, available: &[String]) -> ScoredRecipe {
    let recipe_ingredients: Vec<String> = recipe
        .ingredients
        .iter()
        .map(|i| normalize_ingredient(&i.name))
        .collect();

    if available.is_empty() {
        return ScoredRecipe {
            recipe: recipe.clone(),
            match_percentage: 0,
            matched_ingredients: Vec::new(),
            missing_ingredients: recipe_ingredients,
        };
    }

    let normalized_available: Vec<String> =
        available.iter().map(|i| normalize_ingredient(i)).collect();

    let (matched, missing): (Vec<String>, Vec<String>) =
        recipe_ingredients.into_iter().partition(|recipe_ing| {
            normalized_available
                .iter()
                .any(|avail_ing| ingredient_matches(recipe_ing, avail_ing))
        });

    let total = recipe.ingredients.len();
    // A zero-ingredient recipe is out of contract; score it 0 rather than
    // dividing by zero.
    let match_percentage = if total == 0 {
        0
    } else {
        (matched.len() as f64 / total as f64 * 100.0).round() as u8
    };

    ScoredRecipe {
        recipe: recipe.clone(),
        match_percentage,
        matched_ingredients: matched,
        missing_ingredients: missing,
    }
}

/// Matching predicate between one normalized recipe ingredient and one
/// normalized available ingredient. Empty strings never match.
fn ingredient_matches(recipe_ing: &str, avail_ing: &str) -> bool {
    if recipe_ing.is_empty() || avail_ing.is_empty() {
        return false;
    }

    recipe_ing.contains(avail_ing)
        || avail_ing.contains(recipe_ing)
        || ingredients_similar(recipe_ing, avail_ing)
}
