//! Filter stages for scored recipe lists.
//!
//! Each filter consumes a list and returns the surviving subsequence in
//! order. The no-constraint cases (empty preferences, no difficulty) are
//! defined as identity, not as filters that happen to keep everything.

use crate::types::{Difficulty, ScoredRecipe};

/// Keep recipes carrying every requested dietary tag.
///
/// Tags combine with logical AND: a recipe tagged only "vegan" does not
/// survive a ["vegan", "gluten-free"] preference list. An empty preference
/// list returns the input unchanged.
pub fn by_dietary(recipes: Vec<ScoredRecipe>, preferences: &[String]) -> Vec<ScoredRecipe> {
    if preferences.is_empty() {
        return recipes;
    }

    recipes
        .into_iter()
        .filter(|r| {
            preferences
                .iter()
                .all(|pref| r.recipe.dietary_tags.iter().any(|tag| tag == pref))
        })
        .collect()
}

/// Keep recipes at exactly the requested difficulty.
///
/// `None` is the no-constraint case and returns the input unchanged.
pub fn by_difficulty(
    recipes: Vec<ScoredRecipe>,
    difficulty: Option<Difficulty>,
) -> Vec<ScoredRecipe> {
    let Some(level) = difficulty else {
        return recipes;
    };

    recipes
        .into_iter()
        .filter(|r| r.recipe.difficulty == level)
        .collect()
}

/// Keep recipes whose cooking time is within the bound (inclusive).
///
/// There is no sentinel for "no limit"; callers pass the largest time they
/// will accept.
pub fn by_max_time(recipes: Vec<ScoredRecipe>, max_minutes: u32) -> Vec<ScoredRecipe> {
    recipes
        .into_iter()
        .filter(|r| r.recipe.cooking_time <= max_minutes)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Ingredient, Recipe};
    use uuid::Uuid;

    fn scored(name: &str, difficulty: Difficulty, cooking_time: u32, tags: &[&str]) -> ScoredRecipe {
        ScoredRecipe {
            recipe: Recipe {
                id: Uuid::new_v4(),
                name: name.to_string(),
                description: String::new(),
                cuisine: "Test".to_string(),
                difficulty,
                cooking_time,
                servings: 2,
                ingredients: vec![Ingredient {
                    name: "water".to_string(),
                    amount: "1 cup".to_string(),
                }],
                instructions: vec![],
                dietary_tags: tags.iter().map(|t| (*t).to_string()).collect(),
                calories: 0,
                protein: 0,
                carbs: 0,
                fat: 0,
            },
            match_percentage: 0,
            matched_ingredients: vec![],
            missing_ingredients: vec!["water".to_string()],
        }
    }

    fn names(recipes: &[ScoredRecipe]) -> Vec<&str> {
        recipes.iter().map(|r| r.recipe.name.as_str()).collect()
    }

    fn prefs(tags: &[&str]) -> Vec<String> {
        tags.iter().map(|t| (*t).to_string()).collect()
    }

    #[test]
    fn test_dietary_empty_preferences_is_identity() {
        let input = vec![
            scored("a", Difficulty::Easy, 10, &["vegan"]),
            scored("b", Difficulty::Easy, 10, &[]),
        ];
        let result = by_dietary(input, &[]);
        assert_eq!(names(&result), ["a", "b"]);
    }

    #[test]
    fn test_dietary_requires_every_tag() {
        let input = vec![
            scored("vegan-only", Difficulty::Easy, 10, &["vegan"]),
            scored("both", Difficulty::Easy, 10, &["vegan", "gluten-free"]),
        ];

        let result = by_dietary(input.clone(), &prefs(&["vegan", "gluten-free"]));
        assert_eq!(names(&result), ["both"]);

        let result = by_dietary(input, &prefs(&["vegan"]));
        assert_eq!(names(&result), ["vegan-only", "both"]);
    }

    #[test]
    fn test_dietary_tags_are_exact_strings() {
        let input = vec![scored("a", Difficulty::Easy, 10, &["Vegan"])];
        let result = by_dietary(input, &prefs(&["vegan"]));
        assert!(result.is_empty());
    }

    #[test]
    fn test_difficulty_none_is_identity() {
        let input = vec![
            scored("easy", Difficulty::Easy, 10, &[]),
            scored("hard", Difficulty::Hard, 10, &[]),
        ];
        let result = by_difficulty(input, None);
        assert_eq!(names(&result), ["easy", "hard"]);
    }

    #[test]
    fn test_difficulty_exact_match() {
        let input = vec![
            scored("easy", Difficulty::Easy, 10, &[]),
            scored("medium", Difficulty::Medium, 10, &[]),
            scored("hard", Difficulty::Hard, 10, &[]),
        ];
        let result = by_difficulty(input, Some(Difficulty::Medium));
        assert_eq!(names(&result), ["medium"]);
    }

    #[test]
    fn test_max_time_bound_is_inclusive() {
        let input = vec![
            scored("quick", Difficulty::Easy, 20, &[]),
            scored("exact", Difficulty::Easy, 45, &[]),
            scored("slow", Difficulty::Easy, 46, &[]),
        ];
        let result = by_max_time(input, 45);
        assert_eq!(names(&result), ["quick", "exact"]);
    }
}
