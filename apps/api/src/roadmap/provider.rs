//! Roadmap provider: pluggable, trait-based source of role roadmaps.
//!
//! Default: `LlmRoadmapProvider`, which asks the configured chat-completion
//! endpoint. Provider failures are content, not errors: every failure mode maps
//! to a placeholder roadmap so the endpoint keeps answering 200.
//!
//! `AppState` holds an `Arc<dyn RoadmapProvider>`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::errors::AppError;
use crate::llm_client::{strip_json_fences, LlmClient, LlmError};
use crate::roadmap::prompts::build_roadmap_prompt;

const REQUIRED_KEYS: [&str; 3] = ["skills", "certifications", "projects"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerRoadmap {
    pub role: String,
    pub skills: Vec<String>,
    pub certifications: Vec<String>,
    pub projects: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RoadmapPayload {
    skills: Vec<String>,
    certifications: Vec<String>,
    projects: Vec<String>,
}

/// Implement this to swap roadmap backends without touching the handler.
#[async_trait]
pub trait RoadmapProvider: Send + Sync {
    async fn get_roadmap(&self, role: &str) -> Result<CareerRoadmap, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// LlmRoadmapProvider
// ────────────────────────────────────────────────────────────────────────────

pub struct LlmRoadmapProvider {
    /// `None` when no API key is configured.
    llm: Option<LlmClient>,
}

impl LlmRoadmapProvider {
    pub fn new(llm: Option<LlmClient>) -> Self {
        Self { llm }
    }

    pub fn from_config(config: &Config) -> Result<Self, LlmError> {
        let llm = match &config.llm_api_key {
            Some(key) => {
                let client = LlmClient::new(
                    config.llm_api_url.clone(),
                    key.clone(),
                    config.llm_model.clone(),
                )?;
                info!("LLM client initialized (model: {})", client.model());
                Some(client)
            }
            None => {
                warn!("MISTRAL_API_KEY is not set; roadmaps will contain placeholders");
                None
            }
        };
        Ok(Self::new(llm))
    }

    async fn fetch(&self, role: &str) -> Result<CareerRoadmap, RoadmapFailure> {
        let llm = self.llm.as_ref().ok_or(RoadmapFailure::MissingApiKey)?;

        info!("Requesting roadmap for role {role:?}");
        let content = llm
            .complete(&build_roadmap_prompt(role))
            .await
            .map_err(|e| match e {
                LlmError::EmptyContent => RoadmapFailure::Unexpected(e.to_string()),
                other => RoadmapFailure::Request(other),
            })?;

        parse_roadmap(role, &content)
    }
}

#[async_trait]
impl RoadmapProvider for LlmRoadmapProvider {
    async fn get_roadmap(&self, role: &str) -> Result<CareerRoadmap, AppError> {
        match self.fetch(role).await {
            Ok(roadmap) => {
                info!("Roadmap generated for role {role:?}");
                Ok(roadmap)
            }
            Err(failure) => {
                failure.log(role);
                Ok(failure.placeholder(role))
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Response parsing and placeholder payloads
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug)]
enum RoadmapFailure {
    MissingApiKey,
    Request(LlmError),
    Parse(serde_json::Error, String),
    Unexpected(String),
}

impl RoadmapFailure {
    fn log(&self, role: &str) {
        match self {
            RoadmapFailure::MissingApiKey => {
                error!("Roadmap for {role:?} skipped: MISTRAL_API_KEY not configured")
            }
            RoadmapFailure::Request(e) => warn!("Roadmap request for {role:?} failed: {e}"),
            RoadmapFailure::Parse(e, raw) => {
                warn!("Roadmap response for {role:?} is not valid JSON ({e}): {raw}")
            }
            RoadmapFailure::Unexpected(msg) => warn!("Roadmap for {role:?} failed: {msg}"),
        }
    }

    fn placeholder(&self, role: &str) -> CareerRoadmap {
        let (skills, certifications, projects) = match self {
            RoadmapFailure::MissingApiKey => (
                "Error: API key not configured".to_string(),
                "Error: API key not configured".to_string(),
                "Error: API key not configured".to_string(),
            ),
            RoadmapFailure::Request(e) => (
                format!("API Request Failed: {e}"),
                "Check your API key and endpoint".to_string(),
                "See server logs for details".to_string(),
            ),
            RoadmapFailure::Parse(e, _) => (
                format!("Failed to parse AI response: {e}"),
                "The AI returned invalid JSON".to_string(),
                "Check server logs for the raw response".to_string(),
            ),
            RoadmapFailure::Unexpected(msg) => (
                format!("Unexpected error: {msg}"),
                "Check server logs for details".to_string(),
                "Contact support if this persists".to_string(),
            ),
        };

        CareerRoadmap {
            role: role.to_string(),
            skills: vec![skills],
            certifications: vec![certifications],
            projects: vec![projects],
        }
    }
}

fn parse_roadmap(role: &str, content: &str) -> Result<CareerRoadmap, RoadmapFailure> {
    let text = strip_json_fences(content);
    let value: Value = serde_json::from_str(text)
        .map_err(|e| RoadmapFailure::Parse(e, content.to_string()))?;

    if !REQUIRED_KEYS.iter().all(|key| value.get(key).is_some()) {
        return Err(RoadmapFailure::Unexpected(
            "Response missing required keys".to_string(),
        ));
    }

    let payload: RoadmapPayload = serde_json::from_value(value)
        .map_err(|e| RoadmapFailure::Unexpected(format!("Malformed roadmap lists: {e}")))?;

    Ok(CareerRoadmap {
        role: role.to_string(),
        skills: payload.skills,
        certifications: payload.certifications,
        projects: payload.projects,
    })
}
