//! Fuzzy string matching over `strsim`.
//!
//! Everything that needs approximate matching (category fallback, recipe
//! name suggestions, substitute assignment) goes through this module so the
//! similarity measure and its cutoffs live in one place.

use std::cmp::Ordering;

use strsim::normalized_levenshtein;

/// Similarity between two strings on a 0.0-1.0 scale, case-insensitive.
pub fn ratio(a: &str, b: &str) -> f64 {
    normalized_levenshtein(&a.to_lowercase(), &b.to_lowercase())
}

/// Rank `candidates` by similarity to `query`, best first, dropping anything
/// below `cutoff`. Ties keep candidate order, so the result is deterministic
/// for a fixed candidate iteration order.
pub fn close_matches<'a, I>(query: &str, candidates: I, cutoff: f64) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut scored: Vec<(&str, f64)> = candidates
        .into_iter()
        .map(|candidate| (candidate, ratio(query, candidate)))
        .filter(|&(_, score)| score >= cutoff)
        .collect();
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    scored.into_iter().map(|(candidate, _)| candidate).collect()
}

/// The single closest candidate above `cutoff`, if any.
pub fn best_match<'a, I>(query: &str, candidates: I, cutoff: f64) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    close_matches(query, candidates, cutoff).into_iter().next()
}
