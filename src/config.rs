use crate::artifacts::ArtifactPaths;
use crate::cli::Cli;
use crate::SpamcheckError;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Default)]
pub struct SpamcheckConfig {
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub serve: ServeConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize)]
pub struct ModelConfig {
    #[serde(default = "default_classifier")]
    pub classifier: PathBuf,
    #[serde(default = "default_vectorizer")]
    pub vectorizer: PathBuf,
}

impl Default for ModelConfig {
    fn default() -> Self {
        ModelConfig {
            classifier: default_classifier(),
            vectorizer: default_vectorizer(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ServeConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServeConfig {
    fn default() -> Self {
        ServeConfig {
            bind: default_bind(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_true")]
    pub show_confidence: bool,
    #[serde(default = "default_accent")]
    pub accent: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            title: default_title(),
            show_confidence: true,
            accent: default_accent(),
        }
    }
}

fn default_classifier() -> PathBuf {
    PathBuf::from("spam_model.json")
}

fn default_vectorizer() -> PathBuf {
    PathBuf::from("vectorizer.json")
}

fn default_bind() -> String {
    "127.0.0.1:8080".into()
}

fn default_title() -> String {
    "Spam Detection".into()
}

fn default_true() -> bool {
    true
}

fn default_accent() -> String {
    "#6a11cb".into()
}

/// Load config from SPAMCHECK_CONFIG env var, ./spamcheck.toml, or defaults.
pub fn load_config() -> Result<SpamcheckConfig, SpamcheckError> {
    let path = config_path();
    match path {
        Some(p) if p.exists() => {
            let content = std::fs::read_to_string(&p)?;
            let config: SpamcheckConfig = toml::from_str(&content)
                .map_err(|e| SpamcheckError::Config(format!("{}: {e}", p.display())))?;
            validate_config(&config)?;
            Ok(config)
        }
        _ => Ok(SpamcheckConfig::default()),
    }
}

fn config_path() -> Option<PathBuf> {
    if let Ok(p) = std::env::var("SPAMCHECK_CONFIG") {
        return Some(PathBuf::from(p));
    }
    Some(PathBuf::from("spamcheck.toml"))
}

fn validate_config(config: &SpamcheckConfig) -> Result<(), SpamcheckError> {
    let accent = &config.ui.accent;
    let valid = accent.len() == 7
        && accent.starts_with('#')
        && accent[1..].chars().all(|c| c.is_ascii_hexdigit());
    if !valid {
        return Err(SpamcheckError::Config(format!(
            "ui.accent must be a #rrggbb color, got {accent:?}"
        )));
    }
    Ok(())
}

/// Merge CLI flags (highest precedence) over config file paths.
pub fn resolve_artifact_paths(cli: &Cli, config: &SpamcheckConfig) -> ArtifactPaths {
    ArtifactPaths {
        classifier: cli
            .model
            .clone()
            .unwrap_or_else(|| config.model.classifier.clone()),
        vectorizer: cli
            .vectorizer
            .clone()
            .unwrap_or_else(|| config.model.vectorizer.clone()),
    }
}

/// Merge the CLI bind flag over the config file bind address.
pub fn resolve_bind(flag: Option<&str>, config: &SpamcheckConfig) -> String {
    flag.map(String::from)
        .unwrap_or_else(|| config.serve.bind.clone())
}
