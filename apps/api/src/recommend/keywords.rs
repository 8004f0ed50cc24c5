//! Keyword extraction — asks the AI service for a job title and skills.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::jobs::models::JobQuery;
use crate::llm_client::{strip_json_fences, ChatService};
use crate::recommend::prompts::KEYWORD_PROMPT_TEMPLATE;
use crate::recommend::RecommendError;

pub const MAX_SKILLS: usize = 5;

/// Opaque resume analysis produced upstream. Only ever serialized into the prompt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeedbackDocument(pub Value);

impl FeedbackDocument {
    pub fn to_prompt_text(&self) -> String {
        self.0.to_string()
    }
}

/// Validated extraction result: non-empty title and 1..=5 skills.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keywords {
    pub title: String,
    pub skills: Vec<String>,
}

impl From<Keywords> for JobQuery {
    fn from(k: Keywords) -> Self {
        JobQuery {
            title: k.title,
            skills: k.skills,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawKeywords {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    skills: Option<Vec<Value>>,
}

pub fn build_keyword_prompt(feedback: &FeedbackDocument) -> String {
    KEYWORD_PROMPT_TEMPLATE.replace("{feedback}", &feedback.to_prompt_text())
}

/// Sends the prompt, then parses and validates the reply.
pub async fn extract_keywords(
    feedback: &FeedbackDocument,
    chat: &dyn ChatService,
) -> Result<Keywords, RecommendError> {
    let prompt = build_keyword_prompt(feedback);

    let reply = chat
        .chat(&prompt)
        .await
        .map_err(|e| RecommendError::Extraction(e.to_string()))?;
    let content = reply
        .content()
        .ok_or_else(|| RecommendError::Extraction("empty AI response".to_string()))?;

    let keywords = parse_keywords(content)?;
    info!(title = %keywords.title, skills = ?keywords.skills, "Extracted from AI");
    Ok(keywords)
}

/// Parses the AI text as `{title, skills}` and enforces the invariants.
/// Skill entries that aren't non-empty strings are skipped; extra skills
/// beyond `MAX_SKILLS` are dropped, keeping order.
pub fn parse_keywords(content: &str) -> Result<Keywords, RecommendError> {
    let raw: RawKeywords = serde_json::from_str(strip_json_fences(content))?;

    let title = raw.title.unwrap_or_default();
    let mut skills: Vec<String> = raw
        .skills
        .unwrap_or_default()
        .into_iter()
        .filter_map(|v| match v {
            Value::String(s) if !s.trim().is_empty() => Some(s),
            _ => None,
        })
        .collect();
    if title.is_empty() || skills.is_empty() {
        return Err(RecommendError::Validation);
    }
    skills.truncate(MAX_SKILLS);

    Ok(Keywords { title, skills })
}
