use crate::console::{run_interactive, run_questions, run_quiz, run_text, QuizArgs, TextArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use ssum_detector::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Ssum Detector",
    about = "Tell a budding romance from a misunderstanding with lexicon and questionnaire scoring",
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
    /// Score a free-text description of the situation
    Text(TextArgs),
    /// Score a comma-separated list of questionnaire answers
    Quiz(QuizArgs),
    /// Walk through the console prompts and print the analysis
    Interactive,
    /// List the questionnaire prompts and their weights
    Questions,
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
        Command::Text(args) => run_text(args),
        Command::Quiz(args) => run_quiz(args),
        Command::Interactive => run_interactive(),
        Command::Questions => run_questions(),
    }
}
