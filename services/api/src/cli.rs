use crate::demo::{run_demo, run_eligibility_report, DemoArgs, EligibilityReportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use engagement::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Community Engagement Verifier",
    about = "Run and demonstrate the community engagement reporting service from the command line",
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
    /// Verify a saved activity profile and print the eligibility report
    Report(EligibilityReportArgs),
    /// Run an end-to-end CLI demo walking a form through the wizard
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
        Command::Report(args) => run_eligibility_report(args),
        Command::Demo(args) => run_demo(args),
    }
}
