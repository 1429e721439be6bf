use crate::quiz::{run_countries, run_interactive, run_recommend, CountriesArgs, RecommendArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use visa_finder::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Visa Finder",
    about = "Serve or run the Argentina visa finder quiz from the command line",
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
    /// Answer the visa quiz and print the recommended visas
    Quiz {
        #[command(subcommand)]
        command: QuizCommand,
    },
    /// List the nationality reference table
    Countries(CountriesArgs),
}

#[derive(Subcommand, Debug)]
enum QuizCommand {
    /// Recommend visas from answers given as flags or a share-link query
    Recommend(RecommendArgs),
    /// Walk through the quiz one question at a time
    Interactive,
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
        Command::Quiz {
            command: QuizCommand::Recommend(args),
        } => run_recommend(args),
        Command::Quiz {
            command: QuizCommand::Interactive,
        } => run_interactive(),
        Command::Countries(args) => run_countries(args),
    }
}
