//! Entry point: parse CLI, set up logging and dispatch to command handlers.

use clap::Parser;
use lineup_stats::{
    cli::{Commands, GetCmd, LineupStats},
    commands::{
        import::handle_import, open_database, player_stats::handle_player_stats,
        positions::handle_positions, team_stats::handle_team_stats,
    },
    Result,
};
use tracing_subscriber::EnvFilter;

/// Diagnostics go to stderr so JSON on stdout stays parseable.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Run the CLI.
fn main() -> Result<()> {
    let app = LineupStats::parse();
    init_tracing(app.verbose);

    let db = open_database(app.db)?;

    match app.command {
        Commands::Import { file, clear_db } => handle_import(&db, &file, clear_db)?,

        Commands::Get { cmd } => match cmd {
            GetCmd::PlayerStats { player_id, json } => handle_player_stats(&db, player_id, json)?,
            GetCmd::TeamStats { team_id, json } => handle_team_stats(&db, team_id, json)?,
            GetCmd::Positions { json } => handle_positions(&db, json)?,
        },
    }

    Ok(())
}
