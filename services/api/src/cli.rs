use crate::commands::{list_questions, run_score, run_take, QuestionsArgs, ScoreArgs, TakeArgs};
use crate::server;
use career_fit::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Career Fit Assessment",
    about = "Take, score and serve the performance marketing career-fit assessment",
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
    /// Walk through the questionnaire in the terminal and print the results
    Take(TakeArgs),
    /// Score an exported answer sheet (CSV `question_id,answer` or JSON object)
    Score(ScoreArgs),
    /// List the questionnaire grouped by section
    Questions(QuestionsArgs),
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
        Command::Take(args) => run_take(args),
        Command::Score(args) => run_score(args),
        Command::Questions(args) => list_questions(args),
    }
}
