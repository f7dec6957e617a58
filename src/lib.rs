//! Core library entry for the `construct-lens` CLI.
//!
//! Projects a simulator's construct tree into the view models a console
//! renders: explorer tree, map graph, breadcrumbs, per-node connections.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod config;
pub mod connections;
pub mod context;
pub mod error;
pub mod logs;
pub mod ports;
pub mod projection;
pub mod queries;
pub mod resource_type;
pub mod telemetry;
pub mod tree;
pub mod view;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing, configuration or command
/// execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    let config = config::LensConfig::load(cli.snapshot.as_deref())?;
    telemetry::init(&config.log_filter);
    commands::dispatch(&cli.command, &config)
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn run_errors_on_unknown_subcommand() {
        let result = run(["construct-lens", "unknown"]);
        assert!(result.is_err());
    }

    #[test]
    fn run_errors_on_unreadable_snapshot() {
        let result = run(["construct-lens", "--snapshot", "/definitely/not/here.json", "map"]);
        let err = result.unwrap_err();
        assert!(err.contains("/definitely/not/here.json"));
    }
}
