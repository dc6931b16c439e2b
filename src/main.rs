//! Entry point: parse CLI and dispatch to command handlers.

use bgg_ranks::{
    cli::{Cli, Commands},
    commands::{load_rankings::handle_load, year_compare::handle_year_compare},
    Result,
};
use clap::Parser;

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = Cli::parse();

    match app.command {
        Commands::Load {
            user_lists,
            database,
        } => handle_load(&user_lists, &database).await?,

        Commands::YearCompare {
            user_lists,
            previous_lists,
            database,
            last_year,
        } => handle_year_compare(&user_lists, &previous_lists, &database, last_year)?,
    }

    Ok(())
}
