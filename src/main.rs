//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use pelada::{
    cli::{Commands, Pelada},
    commands::{
        best_of_positions::handle_best_of_positions, champions::handle_resolve_champions,
        import_data::handle_import, month_resume::handle_month_resume, streaks::handle_streaks,
    },
    Result,
};

/// Run the CLI.
fn main() -> Result<()> {
    let app = Pelada::parse();

    match app.command {
        Commands::Import {
            file,
            league_id,
            verbose,
        } => handle_import(&file, league_id, verbose)?,

        Commands::MonthResume { filters, json } => {
            let scope = filters.scope();
            handle_month_resume(filters.league_id, scope, filters.exclude, json)?
        }

        Commands::BestOfPositions { filters, json } => {
            let scope = filters.scope();
            handle_best_of_positions(filters.league_id, scope, filters.exclude, json)?
        }

        Commands::ResolveChampions { filters, json } => {
            let scope = filters.scope();
            handle_resolve_champions(filters.league_id, scope, json)?
        }

        Commands::Streaks { league_id, json } => handle_streaks(league_id, json)?,
    }

    Ok(())
}
