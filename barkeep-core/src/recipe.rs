//! Recipe data model and TSV dataset parsing.
//!
//! The dataset is tab-separated, one ingredient requirement per line:
//! recipe name, ingredient, amount, role tag, glass, method. Consecutive
//! lines sharing a recipe name accumulate into one recipe.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use rand::seq::IteratorRandom;
use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::similarity;

/// Similarity cutoff for recipe name suggestions on a failed lookup.
const SUGGEST_CUTOFF: f64 = 0.6;

/// Role of an ingredient within a recipe, parsed from the dataset's tag
/// field. Only `Build` is essential; every other tag marks an ingredient
/// whose absence downgrades a match rather than ruling the recipe out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Build,
    /// Non-essential role, carrying the original tag text ("Garnish",
    /// "Muddle", "Top", ...) for display.
    Optional(String),
}

impl Role {
    pub fn parse(tag: &str) -> Self {
        if tag == "Build" {
            Role::Build
        } else {
            Role::Optional(tag.to_string())
        }
    }

    pub fn is_essential(&self) -> bool {
        matches!(self, Role::Build)
    }
}

/// One ingredient requirement of a recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    pub ingredient: String,
    pub amount: String,
    pub role: Role,
}

/// A cocktail recipe. Built once at load time, immutable thereafter.
/// Ingredient order is preserved for display and for positional alignment
/// with match plans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub ingredients: Vec<Requirement>,
    pub glass: String,
    pub method: String,
}

/// The loaded recipe collection, keyed by lowercase recipe name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipeBook {
    recipes: BTreeMap<String, Recipe>,
}

impl RecipeBook {
    pub fn load(path: &Path) -> Result<Self, ParseError> {
        let input = fs::read_to_string(path).map_err(|source| ParseError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&input)
    }

    /// Parse the TSV dataset. Blank lines and `#` comments are skipped;
    /// anything else must split into exactly six fields. Glass and method
    /// are overwritten on every line for a recipe, so the last line wins.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let mut recipes: BTreeMap<String, Recipe> = BTreeMap::new();
        for (idx, line) in input.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }
            let fields: Vec<&str> = line.split('\t').collect();
            let &[name, ingredient, amount, tag, glass, method] = fields.as_slice() else {
                return Err(ParseError::FieldCount {
                    line: idx + 1,
                    found: fields.len(),
                });
            };
            let key = name.to_lowercase();
            let recipe = recipes.entry(key).or_insert_with(|| Recipe {
                name: name.to_lowercase(),
                ingredients: Vec::new(),
                glass: String::new(),
                method: String::new(),
            });
            recipe.glass = glass.trim().to_string();
            recipe.method = method.trim().to_string();
            recipe.ingredients.push(Requirement {
                ingredient: ingredient.to_string(),
                amount: amount.to_string(),
                role: Role::parse(tag),
            });
        }
        // Dataset convention: a record named "drink" is the column-header row.
        recipes.remove("drink");
        Ok(Self { recipes })
    }

    /// Case-insensitive lookup by recipe name.
    pub fn get(&self, name: &str) -> Option<&Recipe> {
        self.recipes.get(&name.to_lowercase())
    }

    /// The closest-named recipe above the suggestion cutoff, for misspelled
    /// lookups ("gin and tonic" vs "gin & tonic").
    pub fn suggest(&self, name: &str) -> Option<&Recipe> {
        let best = similarity::best_match(&name.to_lowercase(), self.names(), SUGGEST_CUTOFF)?;
        self.recipes.get(best)
    }

    /// A uniformly random recipe, or `None` if the book is empty.
    pub fn random(&self) -> Option<&Recipe> {
        self.recipes.values().choose(&mut rand::thread_rng())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.recipes.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.values()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Every distinct ingredient name appearing in the book.
    pub fn all_ingredients(&self) -> BTreeSet<&str> {
        self.recipes
            .values()
            .flat_map(|recipe| recipe.ingredients.iter())
            .map(|req| req.ingredient.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATA: &str = "drink\tingredient\tamount\ttype\tglass\tmethod\n\
        # sours\n\
        Gin Fizz\tgin\t50ml\tBuild\thighball\tShake and strain.\n\
        gin fizz\tlemon slice\t1\tGarnish\thighball\tShake, strain, top with soda.\n\
        \n\
        negroni\tgin\t30ml\tBuild\trocks\tStir over ice.\n";

    #[test]
    fn test_parse_accumulates_by_name() {
        let book = RecipeBook::parse(DATA).unwrap();
        assert_eq!(book.len(), 2);
        let fizz = book.get("Gin Fizz").unwrap();
        assert_eq!(fizz.ingredients.len(), 2);
        assert_eq!(fizz.ingredients[0].ingredient, "gin");
        assert_eq!(fizz.ingredients[1].role, Role::Optional("Garnish".to_string()));
    }

    #[test]
    fn test_parse_last_line_wins_for_method() {
        let book = RecipeBook::parse(DATA).unwrap();
        let fizz = book.get("gin fizz").unwrap();
        assert_eq!(fizz.method, "Shake, strain, top with soda.");
        assert_eq!(fizz.glass, "highball");
    }

    #[test]
    fn test_parse_drops_header_row() {
        let book = RecipeBook::parse(DATA).unwrap();
        assert!(book.get("drink").is_none());
    }

    #[test]
    fn test_parse_rejects_wrong_arity() {
        let err = RecipeBook::parse("negroni\tgin\t30ml\n").unwrap_err();
        match err {
            ParseError::FieldCount { line, found } => {
                assert_eq!(line, 1);
                assert_eq!(found, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_get_is_case_insensitive() {
        let book = RecipeBook::parse(DATA).unwrap();
        assert!(book.get("NEGRONI").is_some());
    }

    #[test]
    fn test_suggest_close_name() {
        let book = RecipeBook::parse(DATA).unwrap();
        let suggestion = book.suggest("gin fiz").unwrap();
        assert_eq!(suggestion.name, "gin fizz");
        assert!(book.suggest("completely unrelated").is_none());
    }

    #[test]
    fn test_random_draws_known_recipes() {
        let book = RecipeBook::parse(DATA).unwrap();
        let names: Vec<&str> = book.names().collect();
        for _ in 0..50 {
            let pick = book.random().unwrap();
            assert!(names.contains(&pick.name.as_str()));
        }
    }

    #[test]
    fn test_all_ingredients_deduplicates() {
        let book = RecipeBook::parse(DATA).unwrap();
        let ingredients = book.all_ingredients();
        // "gin" appears in both recipes but only once here.
        assert_eq!(ingredients.len(), 2);
        assert!(ingredients.contains("gin"));
        assert!(ingredients.contains("lemon slice"));
    }

    #[test]
    fn test_role_parse() {
        assert!(Role::parse("Build").is_essential());
        assert!(!Role::parse("Garnish").is_essential());
        assert!(!Role::parse("Muddle").is_essential());
    }
}
