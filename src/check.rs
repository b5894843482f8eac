//! `check` subcommand — classify one message from the command line.

use crate::artifacts::{self, ArtifactPaths};
use crate::cli::CheckArgs;
use crate::classify::{self, Verdict};
use crate::{api, SpamcheckError};

pub fn handle_check(args: &CheckArgs, paths: &ArtifactPaths) -> Result<(), SpamcheckError> {
    if args.json {
        // Programmatic contract: exactly one line of JSON on stdout and a
        // zero exit, whether the outcome is an error or a prediction. The
        // message comes from the argument only; stdin is not consulted.
        let response = api::respond(artifacts::get(paths), args.message.as_deref());
        println!("{}", serde_json::to_string(&response)?);
        return Ok(());
    }

    let message = match &args.message {
        Some(m) => m.clone(),
        None => std::io::read_to_string(std::io::stdin())?,
    };
    if message.trim().is_empty() {
        return Err(SpamcheckError::Usage(
            "no message given (pass MESSAGE or pipe stdin)".into(),
        ));
    }

    match classify::classify_message(artifacts::get(paths), &message) {
        Verdict::Classified { label, confidence } => {
            println!("{} ({})", label.display_text(), classify::percent(confidence));
            Ok(())
        }
        Verdict::Unavailable => Err(SpamcheckError::Artifact(
            "model files not found on disk".into(),
        )),
    }
}
