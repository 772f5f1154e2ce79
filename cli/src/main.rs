use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use larder_core::{catalog, search, suggestions_for, Difficulty, Recipe, ScoredRecipe, SearchParams};

#[derive(Parser)]
#[command(name = "larder")]
#[command(about = "Find recipes for the ingredients you have", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank catalog recipes by how well they match your ingredients
    Search {
        /// An ingredient you have on hand (repeatable)
        #[arg(long = "have", value_name = "INGREDIENT")]
        have: Vec<String>,
        /// A dietary tag every result must carry (repeatable)
        #[arg(long = "diet", value_name = "TAG")]
        diet: Vec<String>,
        /// Difficulty filter
        #[arg(long, value_enum, default_value = "all")]
        difficulty: DifficultyArg,
        /// Maximum cooking time in minutes (inclusive)
        #[arg(long, default_value_t = 120)]
        max_time: u32,
        /// Catalog JSON file (defaults to the built-in sample catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// Print the scored results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show one recipe in full
    Show {
        /// Recipe name (case-insensitive)
        name: String,
        /// An ingredient you have on hand; missing ones get substitution
        /// suggestions (repeatable)
        #[arg(long = "have", value_name = "INGREDIENT")]
        have: Vec<String>,
        /// Catalog JSON file (defaults to the built-in sample catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Suggest substitutes for an ingredient
    Substitutes {
        /// The ingredient you are missing
        ingredient: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum DifficultyArg {
    All,
    Easy,
    Medium,
    Hard,
}

impl DifficultyArg {
    fn to_filter(self) -> Option<Difficulty> {
        match self {
            DifficultyArg::All => None,
            DifficultyArg::Easy => Some(Difficulty::Easy),
            DifficultyArg::Medium => Some(Difficulty::Medium),
            DifficultyArg::Hard => Some(Difficulty::Hard),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            have,
            diet,
            difficulty,
            max_time,
            catalog,
            json,
        } => {
            let recipes = load_catalog(catalog.as_deref())?;
            let params = SearchParams {
                available: have,
                dietary: diet,
                difficulty: difficulty.to_filter(),
                max_cooking_time: max_time,
            };
            let results = search(&recipes, &params);

            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                print_results(&results, !params.available.is_empty());
            }
        }
        Commands::Show {
            name,
            have,
            catalog,
        } => {
            let recipes = load_catalog(catalog.as_deref())?;
            show_recipe(&recipes, &name, &have)?;
        }
        Commands::Substitutes { ingredient } => {
            let subs = suggestions_for(&ingredient);
            if subs.is_empty() {
                println!("No substitutes known for {ingredient}");
            } else {
                println!("Instead of {ingredient}, try:");
                for sub in subs {
                    println!("  - {sub}");
                }
            }
        }
    }

    Ok(())
}

fn load_catalog(path: Option<&Path>) -> Result<Vec<Recipe>> {
    match path {
        Some(path) => catalog::from_file(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display())),
        None => Ok(catalog::sample()),
    }
}

fn print_results(results: &[ScoredRecipe], show_match: bool) {
    if results.is_empty() {
        println!("No recipes match your criteria.");
        return;
    }

    let plural = if results.len() == 1 { "" } else { "s" };
    println!("Found {} recipe{plural}\n", results.len());

    for result in results {
        let recipe = &result.recipe;
        if show_match {
            println!(
                "{:>3}%  {:<24} {:>3} min  {:<6}  {}/{} ingredients",
                result.match_percentage,
                recipe.name,
                recipe.cooking_time,
                recipe.difficulty,
                result.matched_ingredients.len(),
                recipe.ingredients.len(),
            );
        } else {
            println!(
                "      {:<24} {:>3} min  {}",
                recipe.name, recipe.cooking_time, recipe.difficulty,
            );
        }
    }
}

fn show_recipe(recipes: &[Recipe], name: &str, have: &[String]) -> Result<()> {
    let Some(recipe) = recipes
        .iter()
        .find(|r| r.name.eq_ignore_ascii_case(name.trim()))
    else {
        bail!("No recipe named {name:?} in the catalog");
    };

    println!("{} ({})", recipe.name, recipe.cuisine);
    println!("{}\n", recipe.description);
    println!(
        "Time: {} min    Servings: {}    Difficulty: {}",
        recipe.cooking_time, recipe.servings, recipe.difficulty
    );
    println!(
        "Calories: {}    Protein: {}g    Carbs: {}g    Fat: {}g\n",
        recipe.calories, recipe.protein, recipe.carbs, recipe.fat
    );

    println!("Ingredients:");
    for ingredient in &recipe.ingredients {
        println!("  - {} ({})", ingredient.name, ingredient.amount);
    }

    println!("\nInstructions:");
    for step in &recipe.instructions {
        println!("  {}. {}", step.step, step.instruction);
    }

    if !recipe.dietary_tags.is_empty() {
        println!("\nDietary: {}", recipe.dietary_tags.join(", "));
    }

    if !have.is_empty() {
        let scored = larder_core::score_recipe(recipe, have);
        println!("\nMatch: {}%", scored.match_percentage);
        if !scored.missing_ingredients.is_empty() {
            println!("Missing:");
            for missing in &scored.missing_ingredients {
                let subs = suggestions_for(missing);
                if subs.is_empty() {
                    println!("  - {missing}");
                } else {
                    println!("  - {missing} (try: {})", subs.join(", "));
                }
            }
        }
    }

    Ok(())
}
