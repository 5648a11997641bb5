//! Import command implementation

use std::path::Path;

use tracing::info;

use crate::{
    catalog::PositionCatalog,
    storage::{Fixture, ImportSummary, LineupDatabase},
    Result,
};

/// Load `file` into `db`.
///
/// When neither the file nor the database carries any positions, the
/// standard catalog is seeded so classification works out of the box.
pub fn import_file(db: &LineupDatabase, file: &Path, clear_db: bool) -> Result<ImportSummary> {
    let contents = std::fs::read_to_string(file)?;
    let mut fixture: Fixture = serde_json::from_str(&contents)?;

    if clear_db {
        db.clear_all_data()?;
    }

    if fixture.positions.is_empty() && db.position_count()? == 0 {
        info!("No positions in import or database, seeding the standard catalog");
        fixture.positions = PositionCatalog::standard().positions().to_vec();
    }

    Ok(db.import_fixture(&fixture)?)
}

/// Handle the import command
pub fn handle_import(db: &LineupDatabase, file: &Path, clear_db: bool) -> Result<()> {
    let summary = import_file(db, file, clear_db)?;

    println!(
        "✓ Imported {} teams, {} players, {} games, {} positions from {}",
        summary.teams,
        summary.players,
        summary.games,
        summary.positions,
        file.display()
    );
    Ok(())
}
