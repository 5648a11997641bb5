//! Position catalog command implementation

use crate::{catalog::shared_catalog, storage::LineupDatabase, Result};

/// Handle the positions command
pub fn handle_positions(db: &LineupDatabase, as_json: bool) -> Result<()> {
    let catalog = shared_catalog(db);

    if as_json {
        println!("{}", serde_json::to_string_pretty(catalog.positions())?);
    } else if catalog.is_empty() {
        println!("No positions in catalog");
    } else {
        for position in catalog.positions() {
            println!("{:<6} {}", position.name, position.category);
        }
    }
    Ok(())
}
