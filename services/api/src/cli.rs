use crate::report::{run_score, ScoreArgs};
use crate::server;
use crate::wizard::{run_take, TakeArgs};
use clap::{Args, Parser, Subcommand};
use style_assessment::config::SinkKind;
use style_assessment::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Communication Style Assessment",
    about = "Run the assessment backend or take the questionnaire from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP submission service (default command)
    Serve(ServeArgs),
    /// Take the assessment interactively and submit it to a running backend
    Take(TakeArgs),
    /// Score a set of answers locally without submitting them
    Score(ScoreArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override where submissions are persisted (csv, sheets, memory)
    #[arg(long, value_parser = crate::infra::parse_sink_kind)]
    pub(crate) sink: Option<SinkKind>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Take(args) => run_take(args).await,
        Command::Score(args) => run_score(args),
    }
}
