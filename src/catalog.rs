//! Position catalog: maps position codes to their category.
//!
//! The catalog is loaded from a [`LineupSource`] the first time an
//! aggregation needs it and published process-wide. Later changes to the
//! underlying positions are not observed until [`reset_shared_catalog`]
//! is called or the process restarts.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::cli::types::PositionCategory;
use crate::stats::source::LineupSource;


/// A single catalog entry as supplied by the position source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub name: String,
    pub category: PositionCategory,
}

impl Position {
    pub fn new(name: impl Into<String>, category: PositionCategory) -> Self {
        Self {
            name: name.into(),
            category,
        }
    }
}

/// Read-only lookup table from position code to category.
///
/// Lookups are case-insensitive. When the source lists the same code twice
/// (ignoring case) the later entry wins.
#[derive(Debug, Clone, Default)]
pub struct PositionCatalog {
    entries: Vec<Position>,
    by_code: HashMap<String, PositionCategory>,
}

impl PositionCatalog {
    pub fn from_positions(positions: impl IntoIterator<Item = Position>) -> Self {
        let entries: Vec<Position> = positions.into_iter().collect();
        let by_code = entries
            .iter()
            .map(|p| (p.name.to_uppercase(), p.category))
            .collect();
        Self { entries, by_code }
    }

    /// Youth baseball/softball defaults, including the four-outfielder
    /// LCF/RCF alignment.
    pub fn standard() -> Self {
        use PositionCategory::*;
        Self::from_positions(
            [
                ("P", Infield),
                ("C", Infield),
                ("1B", Infield),
                ("2B", Infield),
                ("3B", Infield),
                ("SS", Infield),
                ("LF", Outfield),
                ("LCF", Outfield),
                ("CF", Outfield),
                ("RCF", Outfield),
                ("RF", Outfield),
                ("BENCH", Bench),
                ("OUT", Out),
            ]
            .into_iter()
            .map(|(name, category)| Position::new(name, category)),
        )
    }

    /// Category of `code`; unknown codes are [`PositionCategory::Other`].
    pub fn classify(&self, code: &str) -> PositionCategory {
        self.by_code
            .get(&code.to_uppercase())
            .copied()
            .unwrap_or(PositionCategory::Other)
    }

    /// Entries in source order.
    pub fn positions(&self) -> &[Position] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

type CatalogSlot = RwLock<Option<Arc<PositionCatalog>>>;

static SHARED_CATALOG: CatalogSlot = RwLock::new(None);

/// Process-wide catalog, loading it from `source` on first use.
///
/// Concurrent first callers may each load from the source; only the first
/// published catalog is kept. A failed load yields an empty catalog for
/// this call only, so the next caller retries.
pub fn shared_catalog<S: LineupSource + ?Sized>(source: &S) -> Arc<PositionCatalog> {
    load_into(&SHARED_CATALOG, source)
}

/// Install `catalog` as the process-wide catalog unless one is already
/// published, returning whichever catalog is in effect.
pub fn publish_catalog(catalog: PositionCatalog) -> Arc<PositionCatalog> {
    publish_into(&SHARED_CATALOG, catalog)
}

/// Drop the published catalog so the next aggregation reloads it.
pub fn reset_shared_catalog() {
    SHARED_CATALOG
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .take();
}

fn load_into<S: LineupSource + ?Sized>(slot: &CatalogSlot, source: &S) -> Arc<PositionCatalog> {
    if let Some(catalog) = slot.read().unwrap_or_else(PoisonError::into_inner).as_ref() {
        return Arc::clone(catalog);
    }

    let loaded = match source.positions() {
        Ok(positions) => PositionCatalog::from_positions(positions),
        Err(e) => {
            warn!("Failed to load position catalog, classifying all positions as OTHER: {e:#}");
            return Arc::new(PositionCatalog::default());
        }
    };
    debug!(positions = loaded.len(), "Loaded position catalog");

    publish_into(slot, loaded)
}

fn publish_into(slot: &CatalogSlot, catalog: PositionCatalog) -> Arc<PositionCatalog> {
    let mut slot = slot.write().unwrap_or_else(PoisonError::into_inner);
    Arc::clone(slot.get_or_insert_with(|| Arc::new(catalog)))
}
