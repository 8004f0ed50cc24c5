//! Test doubles for the chat and job-source seams.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::jobs::models::{Job, JobQuery};
use crate::llm_client::{ChatReply, ChatService, LlmError};
use crate::recommend::proxy_client::JobSource;
use crate::recommend::RecommendError;

enum Script {
    Always(ChatReply),
    Sequence(Mutex<VecDeque<(Duration, String)>>),
    Fail,
}

/// Chat service with canned replies; records every prompt.
pub struct ScriptedChat {
    script: Script,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedChat {
    fn with(script: Script) -> Self {
        Self {
            script,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(text: &str) -> Self {
        Self::with(Script::Always(ChatReply::from_text(text)))
    }

    /// Replies with no message at all.
    pub fn empty() -> Self {
        Self::with(Script::Always(ChatReply::default()))
    }

    pub fn failing() -> Self {
        Self::with(Script::Fail)
    }

    /// One reply per call, in order, each after its delay. The reply is picked
    /// when the call starts, not when it finishes.
    pub fn sequence(replies: Vec<(Duration, &str)>) -> Self {
        let replies = replies
            .into_iter()
            .map(|(delay, text)| (delay, text.to_string()))
            .collect();
        Self::with(Script::Sequence(Mutex::new(replies)))
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatService for ScriptedChat {
    async fn chat(&self, prompt: &str) -> Result<ChatReply, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        match &self.script {
            Script::Always(reply) => Ok(reply.clone()),
            Script::Fail => Err(LlmError::Api {
                status: 529,
                message: "Overloaded".to_string(),
            }),
            Script::Sequence(queue) => {
                let next = queue.lock().unwrap().pop_front();
                let (delay, text) = next.expect("ScriptedChat ran out of replies");
                tokio::time::sleep(delay).await;
                Ok(ChatReply::from_text(text))
            }
        }
    }
}

/// Job source that answers with `count` jobs titled after the query, or fails.
pub struct FakeJobSource {
    count: usize,
    failure: Option<String>,
    queries: Mutex<Vec<JobQuery>>,
}

impl FakeJobSource {
    pub fn echoing(count: usize) -> Self {
        Self {
            count,
            failure: None,
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            count: 0,
            failure: Some(message.to_string()),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<JobQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl JobSource for FakeJobSource {
    async fn fetch_jobs(&self, query: &JobQuery) -> Result<Vec<Job>, RecommendError> {
        self.queries.lock().unwrap().push(query.clone());

        if let Some(message) = &self.failure {
            return Err(RecommendError::Proxy(message.clone()));
        }

        Ok((0..self.count)
            .map(|i| Job {
                title: format!("{} #{i}", query.title),
                company_name: format!("Company {i}"),
                location: "Remote".to_string(),
                link: format!("https://jobs.example/{i}"),
            })
            .collect())
    }
}
