//! # reelmatch-data
//!
//! Dataset plumbing for Reelmatch:
//! - Catalog assembly from the cleaned IMDb movie, rating, and alternate-title CSVs
//! - Cleaning of the raw `name.basics` TSV into an actor table
//! - Loading, generating, and writing user profiles
//! - Writing recommendations as a flat CSV for BI tooling

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod actors;
pub mod catalog;
pub mod export;
pub mod reader;
pub mod users;

pub use actors::{ActorCleanReport, clean_actors};
pub use catalog::{CatalogOptions, CatalogSources, load_catalog};
pub use export::write_recommendations;
pub use users::{
    AVAILABLE_GENRES, find_user, generate_users, load_users, special_users, write_users,
};
