//! # roster-common
//!
//! Shared configuration, error handling, models, and validation used across all Roster crates.
//! No business logic lives here, only primitives and contracts.

pub mod any_row;
pub mod config;
pub mod error;
pub mod models;
pub mod validation;
