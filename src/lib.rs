pub mod api;
pub mod artifacts;
pub mod check;
pub mod classify;
pub mod cli;
pub mod config;
pub mod page;
pub mod serve;
pub mod status;
pub mod vectorize;

#[derive(Debug)]
pub enum SpamcheckError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Config(String),
    Artifact(String),
    Usage(String),
}

impl std::fmt::Display for SpamcheckError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpamcheckError::Io(e) => write!(f, "io: {e}"),
            SpamcheckError::Json(e) => write!(f, "json: {e}"),
            SpamcheckError::Config(msg) => write!(f, "config: {msg}"),
            SpamcheckError::Artifact(msg) => write!(f, "artifact: {msg}"),
            SpamcheckError::Usage(msg) => write!(f, "usage: {msg}"),
        }
    }
}

impl From<std::io::Error> for SpamcheckError {
    fn from(e: std::io::Error) -> Self {
        SpamcheckError::Io(e)
    }
}

impl From<serde_json::Error> for SpamcheckError {
    fn from(e: serde_json::Error) -> Self {
        SpamcheckError::Json(e)
    }
}
