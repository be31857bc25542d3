pub mod category;
pub mod error;
pub mod matcher;
pub mod recipe;
pub mod similarity;

pub use category::CategoryIndex;
pub use error::ParseError;
pub use matcher::{
    availability, evaluate, find_all, Assignment, AvailabilityMap, MatchResult, Matches,
    Substitute, DEFAULT_INGREDIENTS,
};
pub use recipe::{Recipe, RecipeBook, Requirement, Role};
