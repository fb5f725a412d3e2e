#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Reelmatch Core Library
//!
//! Shared error type, identifier newtypes, and the domain records passed
//! between the data loaders, the recommender, and the CLI.
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`types`]: Identifiers, movies, user profiles, recommendations

pub mod error;
pub mod types;

// Re-exports for convenience
pub use error::{Error, Result};
pub use types::{
    Catalog, Movie, PersonId, Recommendation, TitleId, UserId, UserProfile, split_list,
};
