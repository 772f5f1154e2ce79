//! Static ingredient substitution tables.
//!
//! Two separate tables: similarity groups widen the scorer's matching
//! predicate, and the suggestion table proposes stand-ins for a missing
//! ingredient. First match wins in both, so entry order matters and the
//! tables are fixed slices rather than maps.

use crate::matcher::normalize_ingredient;

/// Similarity groups: a canonical ingredient name plus known variants.
/// Two ingredients count as interchangeable when both fall in the same group.
const SIMILARITY_GROUPS: &[(&str, &[&str])] = &[
    ("tomato", &["tomatoes", "tomato sauce"]),
    ("cheese", &["cheddar", "mozzarella", "parmesan", "feta"]),
    ("pasta", &["spaghetti", "linguine", "noodles"]),
    ("chicken", &["chicken breast", "chicken thigh"]),
    ("oil", &["olive oil", "vegetable oil", "sesame oil"]),
    ("onion", &["red onion", "white onion", "onions"]),
    ("pepper", &["bell pepper", "black pepper"]),
];

/// Suggested substitutes for common missing ingredients, in preference order.
const SUBSTITUTIONS: &[(&str, &[&str])] = &[
    ("heavy cream", &["milk + butter", "coconut cream", "greek yogurt"]),
    ("sour cream", &["greek yogurt", "plain yogurt"]),
    ("butter", &["margarine", "coconut oil", "olive oil"]),
    ("eggs", &["flax eggs", "chia seeds", "applesauce"]),
    ("white wine", &["chicken broth", "apple juice", "white grape juice"]),
    ("fish sauce", &["soy sauce", "worcestershire sauce"]),
    ("parmesan cheese", &["pecorino", "nutritional yeast", "aged cheddar"]),
];

/// Check whether two normalized ingredient names share a similarity group.
///
/// Each side is tested against the group independently, so loose pairings
/// like "black pepper" vs "bell pepper" (both contain a "pepper" group
/// member) do match.
pub fn ingredients_similar(ing1: &str, ing2: &str) -> bool {
    SIMILARITY_GROUPS.iter().any(|&(base, variations)| {
        in_group(ing1, base, variations) && in_group(ing2, base, variations)
    })
}

fn in_group(ingredient: &str, base: &str, variations: &[&str]) -> bool {
    ingredient.contains(base) || variations.iter().any(|v| ingredient.contains(v))
}

/// Look up substitution suggestions for a missing ingredient.
///
/// The input is normalized, then entries are scanned in table order; the
/// first key that contains the input or is contained by it wins. Returns an
/// empty slice when nothing matches.
pub fn suggestions_for(missing_ingredient: &str) -> &'static [&'static str] {
    let normalized = normalize_ingredient(missing_ingredient);
    if normalized.is_empty() {
        return &[];
    }

    for &(ingredient, subs) in SUBSTITUTIONS {
        if normalized.contains(ingredient) || ingredient.contains(&normalized) {
            return subs;
        }
    }

    &[]
}
