//! Artifact loading — the two exported weight files.
//!
//! The models are trained elsewhere (CountVectorizer + MultinomialNB) and
//! exported as JSON weight files; the loader parses numbers and a
//! vocabulary, never executable content.
//!
//! Both artifacts are loaded once per process into a `OnceLock` and shared
//! read-only afterwards. A missing or structurally invalid file degrades to
//! `None`; every downstream prediction then gets the fixed server-error
//! verdict instead of a crash.

use crate::SpamcheckError;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Where the two weight files live. Defaults resolve relative to the
/// process working directory.
#[derive(Debug, Clone)]
pub struct ArtifactPaths {
    pub classifier: PathBuf,
    pub vectorizer: PathBuf,
}

impl Default for ArtifactPaths {
    fn default() -> Self {
        ArtifactPaths {
            classifier: PathBuf::from("spam_model.json"),
            vectorizer: PathBuf::from("vectorizer.json"),
        }
    }
}

/// Exported fitted CountVectorizer: vocabulary and tokenization settings
/// fixed at training time.
#[derive(Debug, Deserialize)]
pub struct VectorizerArtifact {
    pub vocabulary: HashMap<String, usize>,
    #[serde(default = "default_ngram_range")]
    pub ngram_range: [usize; 2],
    #[serde(default = "default_true")]
    pub lowercase: bool,
    #[serde(default)]
    pub binary: bool,
}

fn default_ngram_range() -> [usize; 2] {
    [1, 1]
}

fn default_true() -> bool {
    true
}

/// Exported fitted MultinomialNB. `classes` is always `[0, 1]` — the
/// training-time label convention (1 = spam) the rest of the crate bakes in.
#[derive(Debug, Deserialize)]
pub struct ClassifierArtifact {
    pub classes: Vec<u8>,
    pub class_log_prior: Vec<f64>,
    pub feature_log_prob: Vec<Vec<f64>>,
}

/// Both artifacts plus their file fingerprints, ready for inference.
pub struct Artifacts {
    pub vectorizer: VectorizerArtifact,
    pub classifier: ClassifierArtifact,
    pub vectorizer_hash: String,
    pub classifier_hash: String,
}

static ARTIFACTS: OnceLock<Option<Artifacts>> = OnceLock::new();

/// Compute a SipHash fingerprint of raw bytes, returned as 16-char hex string.
pub(crate) fn fingerprint_hex(data: &[u8]) -> String {
    use std::hash::{Hash, Hasher};
    let mut hasher = std::hash::DefaultHasher::new();
    data.hash(&mut hasher);
    format!("{:016x}", hasher.finish())
}

/// Read and parse one weight file, fingerprinting the raw bytes.
pub(crate) fn read_artifact<T: DeserializeOwned>(
    path: &Path,
) -> Result<(T, String), SpamcheckError> {
    let raw = std::fs::read(path)
        .map_err(|e| SpamcheckError::Artifact(format!("{}: {e}", path.display())))?;
    let hash = fingerprint_hex(&raw);
    let parsed = serde_json::from_slice(&raw)
        .map_err(|e| SpamcheckError::Artifact(format!("{}: {e}", path.display())))?;
    Ok((parsed, hash))
}

fn validate(
    vectorizer: &VectorizerArtifact,
    classifier: &ClassifierArtifact,
) -> Result<(), SpamcheckError> {
    let [lo, hi] = vectorizer.ngram_range;
    if lo < 1 || lo > hi {
        return Err(SpamcheckError::Artifact(format!(
            "ngram_range [{lo}, {hi}] must satisfy 1 <= lo <= hi"
        )));
    }
    if classifier.classes != vec![0, 1] {
        return Err(SpamcheckError::Artifact(format!(
            "classes must be [0, 1], got {:?}",
            classifier.classes
        )));
    }
    if classifier.class_log_prior.len() != 2 {
        return Err(SpamcheckError::Artifact(format!(
            "class_log_prior must have 2 entries, got {}",
            classifier.class_log_prior.len()
        )));
    }
    if classifier.feature_log_prob.len() != 2 {
        return Err(SpamcheckError::Artifact(format!(
            "feature_log_prob must have 2 rows, got {}",
            classifier.feature_log_prob.len()
        )));
    }
    let vocab_size = vectorizer.vocabulary.len();
    for (i, row) in classifier.feature_log_prob.iter().enumerate() {
        if row.len() != vocab_size {
            return Err(SpamcheckError::Artifact(format!(
                "feature_log_prob row {i} has {} entries, vocabulary has {vocab_size}",
                row.len()
            )));
        }
    }
    if let Some((term, idx)) = vectorizer
        .vocabulary
        .iter()
        .find(|&(_, &idx)| idx >= vocab_size)
    {
        return Err(SpamcheckError::Artifact(format!(
            "vocabulary index {idx} for {term:?} out of range ({vocab_size} terms)"
        )));
    }
    Ok(())
}

impl Artifacts {
    /// Load both weight files. Any missing or structurally invalid file is
    /// a load failure — callers degrade, they do not crash.
    pub fn load(paths: &ArtifactPaths) -> Result<Artifacts, SpamcheckError> {
        let (vectorizer, vectorizer_hash) =
            read_artifact::<VectorizerArtifact>(&paths.vectorizer)?;
        let (classifier, classifier_hash) =
            read_artifact::<ClassifierArtifact>(&paths.classifier)?;
        validate(&vectorizer, &classifier)?;
        Ok(Artifacts {
            vectorizer,
            classifier,
            vectorizer_hash,
            classifier_hash,
        })
    }
}

/// Process-wide artifacts, loaded on first use and cached for the process
/// lifetime. Safe to call from any number of request handlers; the guard
/// makes redundant disk reads impossible.
pub fn get(paths: &ArtifactPaths) -> Option<&'static Artifacts> {
    ARTIFACTS
        .get_or_init(|| match Artifacts::load(paths) {
            Ok(a) => {
                log::info!(
                    "loaded artifacts: {} terms, model {} / vectorizer {}",
                    a.vectorizer.vocabulary.len(),
                    a.classifier_hash,
                    a.vectorizer_hash
                );
                Some(a)
            }
            Err(e) => {
                log::warn!("artifacts unavailable: {e}");
                None
            }
        })
        .as_ref()
}
