use crate::report::{print_criteria_specs, run_rank, RankArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use company_scoring::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Company Lead Scoring",
    about = "Rank company directory exports and serve the lead scoring API",
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
    /// Rank a directory CSV export against a scoring configuration
    Rank(RankArgs),
    /// Print the weight bounds shared by every filter panel
    Criteria,
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

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Rank(args) => run_rank(args),
        Command::Criteria => {
            print_criteria_specs();
            Ok(())
        }
    }
}
