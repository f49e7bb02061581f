use crate::check::{
    run_address_suggest, run_catalog_listing, run_permit_check, AddressSuggestArgs, CheckArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use permit_finder::config::AppConfig;
use permit_finder::error::AppError;
use permit_finder::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "Permit Finder",
    about = "Find out which building permits a home project needs",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Look up permits from the command line
    Permits {
        #[command(subcommand)]
        command: PermitsCommand,
    },
    /// Query address autocomplete
    Address {
        #[command(subcommand)]
        command: AddressCommand,
    },
}

#[derive(Subcommand, Debug)]
enum PermitsCommand {
    /// List the permits required for an address and project description
    Check(CheckArgs),
    /// Print every permit in the catalog at its base fee
    Catalog,
}

#[derive(Subcommand, Debug)]
enum AddressCommand {
    /// Print address suggestions for a partial query
    Suggest(AddressSuggestArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    let config = AppConfig::load()?;
    start_logging(&config)?;

    match command {
        Command::Serve(args) => server::run(config, args).await,
        Command::Permits {
            command: PermitsCommand::Check(args),
        } => run_permit_check(&config, args),
        Command::Permits {
            command: PermitsCommand::Catalog,
        } => run_catalog_listing(&config),
        Command::Address {
            command: AddressCommand::Suggest(args),
        } => run_address_suggest(&config, args).await,
    }
}

/// Every subcommand logs, so the subscriber is installed before dispatch.
fn start_logging(config: &AppConfig) -> Result<(), AppError> {
    telemetry::init(&config.telemetry)?;
    Ok(())
}
