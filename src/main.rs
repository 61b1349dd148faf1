// src/main.rs
use clap::Parser;
use crossterm::style::Stylize;
use ticklist::api::{self, ApiContext};
use ticklist::cli::args::{Cli, Commands};
use ticklist::config::{generate_default_config, load_settings, Settings};
use ticklist::exitcode;
use ticklist::infrastructure::di::ServiceContainer;
use tracing::debug;
use tracing_subscriber::{
    filter::{filter_fn, LevelFilter},
    fmt::{self, format::FmtSpan},
    prelude::*,
};

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.debug);

    // Load configuration with CLI overrides
    let settings = load_settings(cli.config.as_deref()).unwrap_or_else(|e| {
        debug!("Failed to load settings: {}. Using defaults.", e);
        Settings::default()
    });

    if cli.generate_config {
        println!("{}", generate_default_config());
        return;
    }

    match cli.command {
        // Bootstrapping must work before any database exists.
        Some(Commands::CreateDb { ref path }) => {
            if let Err(e) = ticklist::cli::entry_commands::create_db(path) {
                eprintln!("{}", format!("Error: {}", e).red());
                std::process::exit(exitcode::USAGE);
            }
        }
        Some(Commands::Serve { ref addr }) => {
            let addr = addr.clone().unwrap_or_else(|| settings.http_addr.clone());
            if let Err(e) = handle_serve_command(&settings, &addr) {
                eprintln!("{}", format!("Server error: {}", e).red());
                std::process::exit(exitcode::USAGE);
            }
        }
        _ => {
            // Create service container (single composition root)
            let services = match ServiceContainer::new(&settings) {
                Ok(container) => container,
                Err(e) => {
                    eprintln!("{}: {}", "Failed to create service container".red(), e);
                    std::process::exit(exitcode::USAGE);
                }
            };

            if let Err(e) = ticklist::cli::execute_command(cli, &services) {
                eprintln!("{}", format!("Error: {}", e).red());
                std::process::exit(exitcode::USAGE);
            }
        }
    }
}

fn handle_serve_command(settings: &Settings, addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    let services = ServiceContainer::new(settings)
        .map_err(|e| format!("Failed to create service container: {}", e))?;
    let ctx = ApiContext::new(&services);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| format!("Failed to create async runtime: {}", e))?;

    rt.block_on(async { api::serve(addr, ctx).await })?;

    Ok(())
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3 => LevelFilter::TRACE,
        _ => {
            eprintln!("Don't be crazy, max is -d -d -d");
            LevelFilter::TRACE
        }
    };

    // Create a noisy module filter
    let noisy_modules = ["hyper", "hyper_util", "reqwest", "mio", "want", "tower_http"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // Human-readable output goes to stderr so stdout stays scriptable
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    let filtered_layer = fmt_layer.with_filter(filter).with_filter(module_filter);

    tracing_subscriber::registry().with(filtered_layer).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_cli_command_when_verify_then_debug_asserts_pass() {
        use clap::CommandFactory;
        Cli::command().debug_assert()
    }
}
