//! # reelmatch-cli
//!
//! Command-line front end for Reelmatch:
//! - Per-user and showcase (`demo`) recommendations with CSV export
//! - Actor table cleaning and synthetic user generation
//! - TOML configuration management

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_handlers;
pub mod error;
pub mod logging;
pub mod table;

pub use config::ReelmatchConfig;
pub use error::{Error, Result};
