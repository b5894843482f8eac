//! Programmatic JSON contract, shared by `check --json` and the web
//! `api=true` mode. Response shapes and reason strings are part of the
//! external interface.

use crate::artifacts::Artifacts;
use crate::classify::{self, Verdict};
use serde::Serialize;

pub const MISSING_ARTIFACTS: &str = "Server Error: Model files not found on disk.";
pub const MISSING_MESSAGE: &str =
    "Missing 'message' query parameter. Use: ?api=true&message=...";

#[derive(Debug, Serialize, PartialEq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ApiResponse {
    Error {
        reason: &'static str,
    },
    Success {
        prediction: &'static str,
        confidence: f64,
    },
}

/// Build the response for one programmatic request. Artifact availability
/// is checked before the message parameter.
pub fn respond(artifacts: Option<&Artifacts>, message: Option<&str>) -> ApiResponse {
    if artifacts.is_none() {
        return ApiResponse::Error {
            reason: MISSING_ARTIFACTS,
        };
    }
    let Some(message) = message else {
        return ApiResponse::Error {
            reason: MISSING_MESSAGE,
        };
    };

    match classify::classify_message(artifacts, message) {
        Verdict::Classified { label, confidence } => ApiResponse::Success {
            prediction: label.style_tag(),
            confidence,
        },
        Verdict::Unavailable => ApiResponse::Error {
            reason: MISSING_ARTIFACTS,
        },
    }
}
