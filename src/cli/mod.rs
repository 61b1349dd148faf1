// src/cli/mod.rs
use crate::cli::args::{Cli, Commands};
use crate::cli::error::CliResult;
use crate::infrastructure::di::ServiceContainer;

pub mod args;
pub mod display;
pub mod entry_commands;
pub mod error;

/// Dispatch a parsed command against the wired services. `serve` and
/// `create-db` are handled in main.rs before the container exists.
pub fn execute_command(cli: Cli, services: &ServiceContainer) -> CliResult<()> {
    match cli.command {
        Some(Commands::Add { text, no_tags }) => entry_commands::add(services, &text, no_tags),
        Some(Commands::List { filter, is_json }) => {
            entry_commands::list(services, &filter, is_json)
        }
        Some(Commands::Edit { id, text, no_tags }) => {
            entry_commands::edit(services, id, &text, no_tags)
        }
        Some(Commands::Toggle { id }) => entry_commands::toggle(services, id),
        Some(Commands::Show { id }) => entry_commands::show(services, id),
        Some(Commands::Delete { id }) => entry_commands::delete(services, id),
        Some(Commands::Trash { is_json }) => entry_commands::trash(services, is_json),
        Some(Commands::Restore { id }) => entry_commands::restore(services, id),
        Some(Commands::Purge { id, yes }) => entry_commands::purge(services, id, yes),
        // Routed before the container is built; listed for completeness.
        Some(Commands::Serve { .. }) | Some(Commands::CreateDb { .. }) | None => Ok(()),
    }
}
