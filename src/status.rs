//! `status` subcommand — artifact health report.
//!
//! Diagnostic only: reports whatever is on disk and always exits 0, so it
//! can run before the artifacts have been put in place.

use crate::artifacts::{read_artifact, ArtifactPaths, ClassifierArtifact, VectorizerArtifact};
use crate::SpamcheckError;
use std::path::Path;

pub fn handle_status(paths: &ArtifactPaths) -> Result<(), SpamcheckError> {
    report_vectorizer(&paths.vectorizer);
    report_classifier(&paths.classifier);
    Ok(())
}

fn report_vectorizer(path: &Path) {
    let Some(size) = file_size(path) else {
        eprintln!("spamcheck: vectorizer — missing ({})", path.display());
        return;
    };
    match read_artifact::<VectorizerArtifact>(path) {
        Ok((v, hash)) => {
            let [lo, hi] = v.ngram_range;
            eprintln!(
                "spamcheck: vectorizer — {} ({}, hash {hash}, {} terms, ngrams {lo}..{hi})",
                path.display(),
                fmt_size(size),
                v.vocabulary.len(),
            );
        }
        Err(e) => eprintln!("spamcheck: vectorizer — invalid ({e})"),
    }
}

fn report_classifier(path: &Path) {
    let Some(size) = file_size(path) else {
        eprintln!("spamcheck: classifier — missing ({})", path.display());
        return;
    };
    match read_artifact::<ClassifierArtifact>(path) {
        Ok((c, hash)) => {
            let features = c.feature_log_prob.first().map_or(0, Vec::len);
            eprintln!(
                "spamcheck: classifier — {} ({}, hash {hash}, {} classes, {features} features)",
                path.display(),
                fmt_size(size),
                c.classes.len(),
            );
        }
        Err(e) => eprintln!("spamcheck: classifier — invalid ({e})"),
    }
}

fn file_size(path: &Path) -> Option<u64> {
    std::fs::metadata(path).ok().map(|m| m.len())
}

fn fmt_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
