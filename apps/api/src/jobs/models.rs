use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;

// ────────────────────────────────────────────────────────────────────────────
// Our wire types (client <-> proxy)
// ────────────────────────────────────────────────────────────────────────────

/// A job posting as shown to the user. Built fresh per request, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub title: String,
    pub company_name: String,
    pub location: String,
    pub link: String,
}

/// Body of `POST /api/jobs` as sent by the recommendation controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobQuery {
    pub title: String,
    pub skills: Vec<String>,
}

impl JobQuery {
    /// Free-text query for the provider: the title followed by the skills.
    pub fn search_text(&self) -> String {
        format!("{} {}", self.title, self.skills.join(" "))
    }
}

/// Lenient decode of an incoming proxy request. Fields stay untyped until
/// `into_query` so a falsy value of any JSON type answers 400, not a decode failure.
#[derive(Debug, Deserialize)]
pub struct SearchJobsRequest {
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub skills: Option<Value>,
}

impl SearchJobsRequest {
    /// Missing, `null`, `false`, `0` or `""` in either field is a bad request.
    /// An empty skills array is truthy and accepted. A truthy value of the
    /// wrong shape is an internal error.
    pub fn into_query(self) -> Result<JobQuery, AppError> {
        let (title, skills) = match (self.title, self.skills) {
            (Some(title), Some(skills)) if is_truthy(&title) && is_truthy(&skills) => {
                (title, skills)
            }
            _ => return Err(AppError::BadRequest),
        };

        let title = match title {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            _ => return Err(AppError::Internal("title must be a string".to_string())),
        };

        let skills = match skills {
            Value::Array(items) => items.into_iter().map(skill_text).collect(),
            _ => return Err(AppError::Internal("skills must be an array".to_string())),
        };

        Ok(JobQuery { title, skills })
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn skill_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobsResponse {
    pub jobs: Vec<Job>,
}

// ────────────────────────────────────────────────────────────────────────────
// Provider wire types (SerpApi google_jobs engine)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SerpApiResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jobs_results: Option<Vec<SerpApiJob>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SerpApiJob {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apply_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_links: Option<Vec<RelatedLink>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share_link: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelatedLink {
    #[serde(default)]
    pub link: Option<String>,
}
