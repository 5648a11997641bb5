//! Storage layer for rosters, games and the position catalog
//!
//! This module provides a SQLite-backed data source for the stats
//! aggregator, organized into logical components:
//! - `models`: Import fixture structures
//! - `schema`: Database connection and schema management
//! - `queries`: Reads and upserts
//! - `source`: The `LineupSource` implementation

pub mod models;
pub mod queries;
pub mod schema;
pub mod source;

#[cfg(test)]
mod tests;

pub use models::*;
pub use schema::LineupDatabase;
