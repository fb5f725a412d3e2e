//! Core types for Reelmatch.

mod catalog;
mod ids;
mod movie;
mod proptests;
mod recommendation;
mod user;

pub use catalog::Catalog;
pub use ids::{PersonId, TitleId, UserId};
pub use movie::Movie;
pub use recommendation::Recommendation;
pub use user::UserProfile;

/// Splits a comma-separated cell into trimmed, non-empty items.
///
/// # Examples
///
/// ```
/// use reelmatch_core::split_list;
///
/// assert_eq!(split_list("Action, Adventure,Fantasy"), vec!["Action", "Adventure", "Fantasy"]);
/// assert!(split_list(" , ").is_empty());
/// ```
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
