//! Ingredient categorization.
//!
//! Maps free-text ingredient names (e.g. "12-Year Aged Scotch Whisky") to a
//! small set of canonical categories ("whiskey") so that matching can compare
//! categories instead of individual product names. Unknown ingredients fall
//! back to "misc".

use std::collections::{BTreeMap, BTreeSet};

use crate::similarity;

/// Catch-all category for ingredients that fit nowhere else.
pub const MISC: &str = "misc";

/// Similarity cutoff for the lossy classification fallback.
pub const LOSSY_CUTOFF: f64 = 0.5;

/// Canonical categories, in scan order. When an ingredient name contains
/// tokens matching two different categories, the first one in this list wins.
/// The order is a documented contract; changing it changes classification.
const CANONICAL_CATEGORIES: &[&str] = &[
    "whiskey",
    "bourbon",
    "soju",
    "wine",
    "vodka",
    "gin",
    "port",
    "brandy",
    "rum",
    "tequila",
    "champagne",
    "prosecco",
    "absinthe",
    "ale",
    "cognac",
    "sake",
    "sherry",
    "pisco",
    "suze",
    "syrup",
    "vermouth",
    "chartreuse",
    "tonic",
    "soda",
    "coca-cola",
    "water",
    "bitters",
    "preserves",
    "egg",
    "cucumber",
    "lemon",
    "lime",
    "orange",
    "strawberry",
    "grapefruit",
    "cinnamon",
    "mint",
    "salt",
    "sugar",
    "ginger beer",
    "tea",
];

/// Index of known ingredient names, bucketed by canonical category.
///
/// Seeded so every canonical category contains its own name; "misc" starts
/// empty. Membership sets grow as ingredient names are registered and are
/// never removed. Passed explicitly into classification calls rather than
/// living in a global, so tests get a fresh index each.
#[derive(Debug, Clone)]
pub struct CategoryIndex {
    labels: Vec<String>,
    members: BTreeMap<String, BTreeSet<String>>,
}

impl CategoryIndex {
    pub fn new() -> Self {
        let mut labels = Vec::with_capacity(CANONICAL_CATEGORIES.len() + 1);
        let mut members = BTreeMap::new();
        labels.push(MISC.to_string());
        members.insert(MISC.to_string(), BTreeSet::new());
        for &category in CANONICAL_CATEGORIES {
            labels.push(category.to_string());
            let mut seed = BTreeSet::new();
            seed.insert(category.to_string());
            members.insert(category.to_string(), seed);
        }
        Self { labels, members }
    }

    /// Classify an ingredient name into a category.
    ///
    /// Special-case rules run first (brand names that don't literally contain
    /// their category word), then an exact-token scan over the labels in
    /// their fixed order. With `lossy`, a similarity fallback picks the
    /// closest label above [`LOSSY_CUTOFF`] before giving up on "misc".
    ///
    /// Pure with respect to the index; membership sets are only mutated by
    /// [`CategoryIndex::register`].
    pub fn classify(&self, item: &str, lossy: bool) -> String {
        let lowered = item.to_lowercase();
        let tokens: Vec<&str> = lowered.split_whitespace().collect();

        if let Some(special) = special_case(&tokens) {
            return special.to_string();
        }

        for label in &self.labels {
            if tokens.iter().any(|token| *token == label.as_str()) {
                return label.clone();
            }
        }

        if lossy {
            if let Some(guess) =
                similarity::best_match(item, self.labels.iter().map(String::as_str), LOSSY_CUTOFF)
            {
                tracing::debug!(item, guess, "lossy category guess");
                return guess.to_string();
            }
        }

        MISC.to_string()
    }

    /// Insert each ingredient name into the membership set of its (non-lossy)
    /// category. Idempotent.
    pub fn register<I, S>(&mut self, items: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for item in items {
            let item = item.as_ref();
            let category = self.classify(item, false);
            self.members
                .entry(category)
                .or_default()
                .insert(item.to_string());
        }
    }

    /// Category labels in scan order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    /// Known ingredient names for a category, if the category exists.
    pub fn members(&self, label: &str) -> Option<&BTreeSet<String>> {
        self.members.get(label)
    }
}

impl Default for CategoryIndex {
    fn default() -> Self {
        Self::new()
    }
}

/// Hand-maintained rules for products whose names don't contain their
/// category word. Checked before the generic token scan; the ordering
/// resolves ambiguity deterministically (e.g. "Angostura Bitters" must hit
/// the bitters rule, not whatever the generic scan would find first).
fn special_case(tokens: &[&str]) -> Option<&'static str> {
    if tokens.contains(&"bitters") {
        Some("bitters")
    } else if tokens.contains(&"coke") {
        Some("coca-cola")
    } else if tokens.contains(&"whisky") {
        Some("whiskey")
    } else if tokens.contains(&"beer") || tokens == ["fever-tree", "ginger", "ale"] {
        Some("ginger beer")
    } else if tokens.contains(&"rhum") {
        Some("rum")
    } else if tokens.contains(&"lillet") {
        Some("vermouth")
    } else {
        None
    }
}
