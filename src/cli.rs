use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "spamcheck", version, about = "Spam message classifier")]
pub struct Cli {
    /// Classifier weights path
    #[arg(long, env = "SPAMCHECK_MODEL", global = true)]
    pub model: Option<PathBuf>,

    /// Vectorizer weights path
    #[arg(long, env = "SPAMCHECK_VECTORIZER", global = true)]
    pub vectorizer: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Classify one message
    Check(CheckArgs),
    /// Start the web UI
    Serve(ServeArgs),
    /// Show artifact health: files, sizes, vocabulary
    Status,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// The message to classify (reads stdin when omitted)
    pub message: Option<String>,

    /// Emit exactly one line of JSON on stdout and exit 0, even on error
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser)]
pub struct ServeArgs {
    /// Bind address (host:port)
    #[arg(long, env = "SPAMCHECK_BIND")]
    pub bind: Option<String>,
}
