use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub const DEFAULT_LLM_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const DEFAULT_LLM_MODEL: &str = "mistralai/mistral-7b-instruct";

/// Application configuration.
///
/// Values come from a `.env`-style key=value file and the process environment;
/// when a key appears in both, the file wins. Only the model artifact is
/// required at startup; a missing LLM key degrades the roadmap endpoint.
#[derive(Debug, Clone)]
pub struct Config {
    pub llm_api_key: Option<String>,
    pub llm_api_url: String,
    pub llm_model: String,
    pub model_path: PathBuf,
    pub static_dir: PathBuf,
    pub xai_permutations: usize,
    pub port: u16,
    pub rust_log: String,
    /// The key=value file that was read, if one was found.
    pub env_file: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let env_file = std::env::var("ENV_FILE").unwrap_or_else(|_| ".env".to_string());
        let file_vars = read_env_file(Path::new(&env_file));
        let mut config = Self::from_lookup(|key| {
            file_vars
                .as_ref()
                .and_then(|vars| vars.get(key).cloned())
                .or_else(|| std::env::var(key).ok())
        })?;
        config.env_file = file_vars.map(|_| PathBuf::from(env_file));
        Ok(config)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Config {
            llm_api_key: non_empty("MISTRAL_API_KEY"),
            llm_api_url: non_empty("MISTRAL_API_URL")
                .unwrap_or_else(|| DEFAULT_LLM_API_URL.to_string()),
            llm_model: non_empty("LLM_MODEL").unwrap_or_else(|| DEFAULT_LLM_MODEL.to_string()),
            model_path: non_empty("MODEL_PATH")
                .unwrap_or_else(|| "career_model.json".to_string())
                .into(),
            static_dir: non_empty("STATIC_DIR")
                .unwrap_or_else(|| "static".to_string())
                .into(),
            xai_permutations: non_empty("XAI_PERMUTATIONS")
                .unwrap_or_else(|| "64".to_string())
                .parse::<usize>()
                .context("XAI_PERMUTATIONS must be a positive integer")?,
            port: non_empty("PORT")
                .unwrap_or_else(|| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: non_empty("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            env_file: None,
        })
    }
}

/// Reads key=value pairs from `path`; `None` when the file cannot be opened.
/// Malformed lines are skipped.
fn read_env_file(path: &Path) -> Option<HashMap<String, String>> {
    dotenvy::from_path_iter(path)
        .ok()
        .map(|iter| iter.filter_map(|item| item.ok()).collect())
}
