use crate::demo::{run_demo, run_triage, DemoArgs, TriageArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use dispatch_ai::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Maintenance Dispatch Engine",
    about = "Triage maintenance requests, rank vendors, and track work orders from the command line",
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
    /// Walk a category's diagnostic tree with a fixed answer path
    Triage(TriageArgs),
    /// Run an end-to-end CLI demo covering triage, dispatch, and lifecycle
    Demo(DemoArgs),
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
        Command::Triage(args) => run_triage(args),
        Command::Demo(args) => run_demo(args),
    }
}
