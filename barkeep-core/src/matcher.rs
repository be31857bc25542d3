//! Recipe matching against a user's available ingredients.
//!
//! The user's free-text ingredient list is reduced to an availability map
//! (category -> one representative ingredient), then every recipe is
//! evaluated against that map: Full when every requirement's category is
//! covered, Partial when only non-essential requirements are missing,
//! Impossible as soon as an essential requirement has no covering category.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::category::CategoryIndex;
use crate::recipe::{Recipe, RecipeBook};

/// Implicit staples appended to every interactive ingredient query.
pub const DEFAULT_INGREDIENTS: &[&str] = &["water", "sugar"];

/// One representative user ingredient per inferred category.
/// Last write wins when two ingredients share a category.
pub type AvailabilityMap = BTreeMap<String, String>;

/// What covers a required ingredient in a match plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Substitute {
    /// The user ingredient assigned to this requirement.
    Have(String),
    /// Non-essential requirement with no covering category.
    Missing,
}

/// One entry of a match plan, positionally aligned with the recipe's
/// ingredient sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignment {
    pub required: String,
    pub substitute: Substitute,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    Full(Vec<Assignment>),
    Partial(Vec<Assignment>),
    Impossible,
}

/// Match plans for a whole recipe book, partitioned by classification.
/// Impossible recipes are discarded.
#[derive(Debug, Clone, Default)]
pub struct Matches {
    pub full: BTreeMap<String, Vec<Assignment>>,
    pub partial: BTreeMap<String, Vec<Assignment>>,
}

/// Build the availability map for a user's ingredient list. Classification
/// is lossy here so that misspelled ingredients still land in a category.
pub fn availability<I, S>(index: &CategoryIndex, ingredients: I) -> AvailabilityMap
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut map = AvailabilityMap::new();
    for item in ingredients {
        let item = item.as_ref();
        let category = index.classify(item, true);
        map.insert(category, item.to_string());
    }
    map
}

/// Evaluate one recipe against an availability map.
///
/// Requirements are checked in recipe order. An essential requirement whose
/// category is absent short-circuits to Impossible; a non-essential one is
/// recorded as missing and evaluation continues.
pub fn evaluate(
    recipe: &Recipe,
    index: &CategoryIndex,
    available: &AvailabilityMap,
) -> MatchResult {
    let mut plan = Vec::with_capacity(recipe.ingredients.len());
    let mut missing = false;
    for req in &recipe.ingredients {
        let category = index.classify(&req.ingredient, false);
        match available.get(&category) {
            Some(have) => plan.push(Assignment {
                required: req.ingredient.clone(),
                substitute: Substitute::Have(have.clone()),
            }),
            None if req.role.is_essential() => return MatchResult::Impossible,
            None => {
                missing = true;
                plan.push(Assignment {
                    required: req.ingredient.clone(),
                    substitute: Substitute::Missing,
                });
            }
        }
    }
    if missing {
        MatchResult::Partial(plan)
    } else {
        MatchResult::Full(plan)
    }
}

/// Evaluate every recipe in the book against one ingredient list.
pub fn find_all<I, S>(book: &RecipeBook, index: &CategoryIndex, ingredients: I) -> Matches
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let available = availability(index, ingredients);
    let mut matches = Matches::default();
    for recipe in book.iter() {
        match evaluate(recipe, index, &available) {
            MatchResult::Full(plan) => {
                matches.full.insert(recipe.name.clone(), plan);
            }
            MatchResult::Partial(plan) => {
                matches.partial.insert(recipe.name.clone(), plan);
            }
            MatchResult::Impossible => {}
        }
    }
    tracing::debug!(
        full = matches.full.len(),
        partial = matches.partial.len(),
        "evaluated recipe book"
    );
    matches
}
