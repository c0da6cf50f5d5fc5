use crate::server;
use artist_verdict::config::AppConfig;
use artist_verdict::error::AppError;
use artist_verdict::service::history_limit;
use artist_verdict::store::{EvaluationStore, SqliteEvaluationStore};
use artist_verdict::{evaluate, EvaluationInput};
use clap::{Args, Parser, Subcommand};
use serde_json::{json, Value};
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Artist Verdict",
    about = "Score music-artist profiles and serve the verdict API",
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
    /// Evaluate a single profile without recording it
    Evaluate(EvaluateArgs),
    /// Print recorded evaluations, newest first
    History(HistoryArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the SQLite database path
    #[arg(long)]
    pub(crate) db: Option<PathBuf>,
    /// Override the directory served as the web front end
    #[arg(long)]
    pub(crate) web_root: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct EvaluateArgs {
    /// JSON profile to evaluate, or `-` for stdin
    #[arg(long, short)]
    input: PathBuf,
}

#[derive(Args, Debug)]
struct HistoryArgs {
    /// Override the SQLite database path
    #[arg(long)]
    db: Option<PathBuf>,
    /// Number of evaluations to print (default 50, max 200)
    #[arg(long)]
    limit: Option<String>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Evaluate(args) => run_evaluate(args),
        Command::History(args) => run_history(args),
    }
}

fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let raw = if args.input.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(&args.input)?
    };

    let payload: Value = serde_json::from_str(&raw)?;
    let verdict = evaluate(&EvaluationInput::from_value(payload))?;
    println!("{}", serde_json::to_string_pretty(&verdict)?);
    Ok(())
}

fn run_history(args: HistoryArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let path = args.db.unwrap_or(config.storage.database_path);
    let store = SqliteEvaluationStore::open(path)?;

    let items = store.recent(history_limit(args.limit.as_deref()))?;
    println!("{}", serde_json::to_string_pretty(&json!({ "items": items }))?);
    Ok(())
}
