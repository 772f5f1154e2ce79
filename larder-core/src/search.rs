//! The composed discovery pipeline: score every catalog recipe, filter,
//! then rank.
//!
//! Every stage is a pure transform over a snapshot of its inputs, so a
//! caller re-running on each input change simply replaces the previous
//! result.

use tracing::debug;

use crate::types::{Difficulty, Recipe, ScoredRecipe};
use crate::{filters, matcher};

/// Parameters for one search run.
#[derive(Debug, Clone)]
pub struct SearchParams {
    /// Ingredients on hand. With none, everything scores 0%.
    pub available: Vec<String>,
    /// Dietary tags every result must carry. Empty means no constraint.
    pub dietary: Vec<String>,
    /// Difficulty constraint. `None` means any difficulty.
    pub difficulty: Option<Difficulty>,
    /// Inclusive cooking-time bound in minutes.
    pub max_cooking_time: u32,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            available: Vec::new(),
            dietary: Vec::new(),
            difficulty: None,
            max_cooking_time: 120,
        }
    }
}

/// Sort scored recipes by descending match percentage, tie-broken by
/// ascending cooking time.
///
/// The sort is stable, so full ties keep their catalog order.
pub fn rank(mut recipes: Vec<ScoredRecipe>) -> Vec<ScoredRecipe> {
    recipes.sort_by(|a, b| {
        b.match_percentage
            .cmp(&a.match_percentage)
            .then(a.recipe.cooking_time.cmp(&b.recipe.cooking_time))
    });
    recipes
}

/// Run the full pipeline over a catalog snapshot.
pub fn search(catalog: &[Recipe], params: &SearchParams) -> Vec<ScoredRecipe> {
    let scored: Vec<ScoredRecipe> = catalog
        .iter()
        .map(|recipe| matcher::score_recipe(recipe, &params.available))
        .collect();

    let filtered = filters::by_dietary(scored, &params.dietary);
    let filtered = filters::by_difficulty(filtered, params.difficulty);
    let filtered = filters::by_max_time(filtered, params.max_cooking_time);

    let ranked = rank(filtered);
    debug!(
        catalog = catalog.len(),
        results = ranked.len(),
        "recipe search complete"
    );
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Ingredient;
    use uuid::Uuid;

    fn scored(name: &str, match_percentage: u8, cooking_time: u32) -> ScoredRecipe {
        ScoredRecipe {
            recipe: Recipe {
                id: Uuid::new_v4(),
                name: name.to_string(),
                description: String::new(),
                cuisine: "Test".to_string(),
                difficulty: Difficulty::Easy,
                cooking_time,
                servings: 2,
                ingredients: vec![Ingredient {
                    name: "water".to_string(),
                    amount: "1 cup".to_string(),
                }],
                instructions: vec![],
                dietary_tags: vec![],
                calories: 0,
                protein: 0,
                carbs: 0,
                fat: 0,
            },
            match_percentage,
            matched_ingredients: vec![],
            missing_ingredients: vec![],
        }
    }

    fn names(recipes: &[ScoredRecipe]) -> Vec<&str> {
        recipes.iter().map(|r| r.recipe.name.as_str()).collect()
    }

    #[test]
    fn test_rank_by_match_percentage_descending() {
        let result = rank(vec![
            scored("low", 40, 10),
            scored("high", 90, 60),
            scored("mid", 70, 5),
        ]);
        assert_eq!(names(&result), ["high", "mid", "low"]);
    }

    #[test]
    fn test_rank_ties_broken_by_cooking_time() {
        let result = rank(vec![scored("slow", 80, 45), scored("quick", 80, 20)]);
        assert_eq!(names(&result), ["quick", "slow"]);
    }

    #[test]
    fn test_rank_full_ties_keep_input_order() {
        let result = rank(vec![
            scored("first", 80, 30),
            scored("second", 80, 30),
            scored("third", 80, 30),
        ]);
        assert_eq!(names(&result), ["first", "second", "third"]);
    }
}
