use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::evaluation::evaluator::{EvaluationSettings, DEFAULT_TEMPERATURE};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub google_api_key: String,
    pub evaluation: EvaluationSettings,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Write sample jd/cv files into `input_dir` when they are missing.
    pub seed_sample_inputs: bool,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            google_api_key: require_env("GOOGLE_API_KEY")?,
            evaluation: EvaluationSettings {
                temperature: parse_temperature(std::env::var("EVAL_TEMPERATURE").ok())?,
            },
            input_dir: std::env::var("INPUT_DIR")
                .unwrap_or_else(|_| "sample_inputs".to_string())
                .into(),
            output_dir: std::env::var("OUTPUT_DIR")
                .unwrap_or_else(|_| "outputs".to_string())
                .into(),
            seed_sample_inputs: parse_flag(std::env::var("SEED_SAMPLE_INPUTS").ok(), true)
                .context("SEED_SAMPLE_INPUTS must be true or false")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    let value = std::env::var(key)
        .with_context(|| format!("Required environment variable '{key}' is not set"))?;
    if value.trim().is_empty() {
        bail!("Required environment variable '{key}' is empty");
    }
    Ok(value)
}

/// Sampling temperature accepted by the Gemini API: 0.0 – 2.0.
fn parse_temperature(raw: Option<String>) -> Result<f32> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_TEMPERATURE);
    };
    let temperature = raw
        .trim()
        .parse::<f32>()
        .context("EVAL_TEMPERATURE must be a number")?;
    if !(0.0..=2.0).contains(&temperature) {
        bail!("EVAL_TEMPERATURE must be between 0.0 and 2.0, got {temperature}");
    }
    Ok(temperature)
}

fn parse_flag(raw: Option<String>, default: bool) -> Result<bool> {
    match raw.as_deref().map(|s| s.trim().to_lowercase()) {
        None => Ok(default),
        Some(v) if v.is_empty() => Ok(default),
        Some(v) => match v.as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            other => bail!("invalid boolean value '{other}'"),
        },
    }
}
