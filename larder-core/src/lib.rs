//! Pantry-driven recipe discovery.
//!
//! Pure, synchronous matching of a recipe catalog against the ingredients
//! on hand: score each recipe, filter by dietary tags, difficulty, and
//! cooking time, then rank by match quality. Catalogs are plain JSON; the
//! engine performs no I/O beyond loading them.

pub mod catalog;
pub mod error;
pub mod filters;
pub mod matcher;
pub mod search;
pub mod substitutions;
pub mod types;

pub use error::CatalogError;
pub use matcher::{normalize_ingredient, score_recipe};
pub use search::{rank, search, SearchParams};
pub use substitutions::{ingredients_similar, suggestions_for};
pub use types::{Difficulty, Ingredient, InstructionStep, Recipe, ScoredRecipe};
