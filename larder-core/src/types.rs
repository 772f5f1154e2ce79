use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Recipe difficulty level.
///
/// Serialized exactly as "Easy" / "Medium" / "Hard", matching the catalog
/// file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// A single recipe ingredient: name plus a display amount ("2 cups").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ingredient {
    pub name: String,
    pub amount: String,
}

/// One numbered instruction step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InstructionStep {
    pub step: u32,
    pub instruction: String,
}

/// A recipe as supplied by the catalog. Immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub cuisine: String,
    pub difficulty: Difficulty,
    /// Total cooking time in minutes.
    pub cooking_time: u32,
    pub servings: u32,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<InstructionStep>,
    /// Free-form tags such as "vegetarian" or "gluten-free".
    pub dietary_tags: Vec<String>,
    pub calories: u32,
    /// Grams per serving.
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
}

/// A recipe annotated with how well it matches the available ingredients.
///
/// `matched_ingredients` and `missing_ingredients` hold the recipe's
/// normalized ingredient names, in recipe order; together they partition
/// the full ingredient list. Derived per search run, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredRecipe {
    #[serde(flatten)]
    pub recipe: Recipe,
    /// Share of the recipe's ingredients satisfied, 0-100.
    pub match_percentage: u8,
    pub matched_ingredients: Vec<String>,
    pub missing_ingredients: Vec<String>,
}
