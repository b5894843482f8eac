use clap::Parser;
use std::process::ExitCode;

use spamcheck::cli::{Cli, Command};
use spamcheck::{check, config, serve, status, SpamcheckError};

fn run() -> Result<(), SpamcheckError> {
    let cli = Cli::parse();
    let config = config::load_config()?;
    let paths = config::resolve_artifact_paths(&cli, &config);

    match cli.command {
        Command::Check(args) => check::handle_check(&args, &paths),
        Command::Serve(args) => serve::handle_serve(&args, &paths, &config),
        Command::Status => status::handle_status(&paths),
    }
}

fn main() -> ExitCode {
    env_logger::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("spamcheck: {e}");
            ExitCode::from(1)
        }
    }
}
