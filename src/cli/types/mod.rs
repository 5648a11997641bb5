//! Type-safe wrappers and enums for roster and lineup data.

pub mod ids;
pub mod position;

pub use ids::{GameId, PlayerId, TeamId};
pub use position::PositionCategory;
