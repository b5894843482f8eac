//! Naive Bayes prediction and verdict mapping.
//!
//! The label convention is fixed at training time: class 1 is spam, class 0
//! is ham.

use crate::artifacts::{Artifacts, ClassifierArtifact};
use crate::vectorize;

/// Binary label under the training-time convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Ham,
    Spam,
}

impl Label {
    fn from_class(class: u8) -> Label {
        if class == 1 { Label::Spam } else { Label::Ham }
    }

    pub fn display_text(self) -> &'static str {
        match self {
            Label::Spam => "Likely Scam",
            Label::Ham => "Likely Not Spam",
        }
    }

    pub fn style_tag(self) -> &'static str {
        match self {
            Label::Spam => "spam",
            Label::Ham => "ham",
        }
    }
}

/// Per-request classification result.
///
/// `Unavailable` is the fail-safe short-circuit when artifacts did not
/// load: it styles as spam (broken state reads as flagged, never as safe)
/// and carries no confidence.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Classified { label: Label, confidence: f64 },
    Unavailable,
}

impl Verdict {
    pub fn display_text(&self) -> &'static str {
        match self {
            Verdict::Classified { label, .. } => label.display_text(),
            Verdict::Unavailable => "Server Error: Model Initialization Failed",
        }
    }

    pub fn style_tag(&self) -> &'static str {
        match self {
            Verdict::Classified { label, .. } => label.style_tag(),
            Verdict::Unavailable => "spam",
        }
    }

    pub fn confidence(&self) -> Option<f64> {
        match self {
            Verdict::Classified { confidence, .. } => Some(*confidence),
            Verdict::Unavailable => None,
        }
    }

    /// Confidence as a percentage string with exactly two decimal places,
    /// e.g. 0.9731 → "97.31%".
    pub fn confidence_percent(&self) -> Option<String> {
        self.confidence().map(percent)
    }
}

/// Format a confidence as a percentage with exactly two decimal places.
pub fn percent(confidence: f64) -> String {
    format!("{:.2}%", confidence * 100.0)
}

/// Joint log likelihood per class for a sparse count vector:
/// `jll[c] = class_log_prior[c] + Σ count[t] * feature_log_prob[c][t]`.
fn joint_log_likelihood(clf: &ClassifierArtifact, counts: &[(usize, u32)]) -> Vec<f64> {
    clf.class_log_prior
        .iter()
        .zip(&clf.feature_log_prob)
        .map(|(prior, row)| {
            let mut jll = *prior;
            for &(idx, count) in counts {
                jll += f64::from(count) * row[idx];
            }
            jll
        })
        .collect()
}

/// Softmax over log values, computed with the log-sum-exp shift.
fn softmax(jll: &[f64]) -> Vec<f64> {
    let max = jll.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = jll.iter().map(|v| (v - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.iter().map(|e| e / sum).collect()
}

/// Classify one message against the loaded artifacts.
///
/// A pure function of (message, artifacts): the same inputs always produce
/// the same verdict. `None` artifacts short-circuit to the fixed
/// unavailable verdict; an empty message vectorizes to an all-zero vector
/// and is answered from the class priors.
pub fn classify_message(artifacts: Option<&Artifacts>, text: &str) -> Verdict {
    let Some(a) = artifacts else {
        return Verdict::Unavailable;
    };

    let counts = vectorize::count_vector(&a.vectorizer, text);
    let jll = joint_log_likelihood(&a.classifier, &counts);
    let probs = softmax(&jll);

    // argmax; ties resolve to the first class (0 = ham)
    let mut best = 0;
    for i in 1..jll.len() {
        if jll[i] > jll[best] {
            best = i;
        }
    }

    Verdict::Classified {
        label: Label::from_class(a.classifier.classes[best]),
        confidence: probs[best],
    }
}
