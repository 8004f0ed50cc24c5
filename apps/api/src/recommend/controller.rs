//! Recommendation controller — runs the keyword → proxy pipeline whenever the
//! feedback (or the chat service) changes, and owns the panel's state.
//!
//! Every run takes a fresh generation number. A run that settles after a newer
//! one has started is discarded, so overlapping triggers can't overwrite the
//! latest state with stale results.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use tracing::{debug, error, info};

use crate::jobs::models::{Job, JobQuery};
use crate::llm_client::ChatService;
use crate::recommend::keywords::{extract_keywords, FeedbackDocument};
use crate::recommend::proxy_client::JobSource;
use crate::recommend::view::{render, RecommendationView};
use crate::recommend::RecommendError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Idle,
    Loading,
    Error,
}

struct ControllerState {
    status: Status,
    jobs: Vec<Job>,
    generation: u64,
    chat: Arc<dyn ChatService>,
    last_feedback: Option<FeedbackDocument>,
}

pub struct JobRecommendations {
    source: Arc<dyn JobSource>,
    state: Mutex<ControllerState>,
}

impl JobRecommendations {
    pub fn new(chat: Arc<dyn ChatService>, source: Arc<dyn JobSource>) -> Self {
        Self {
            source,
            state: Mutex::new(ControllerState {
                status: Status::Idle,
                jobs: Vec::new(),
                generation: 0,
                chat,
                last_feedback: None,
            }),
        }
    }

    /// Effect entry point. Runs the pipeline only if `feedback` differs from the
    /// last synced value or `chat` is a different service instance.
    /// Returns whether a run happened.
    pub async fn sync(&self, feedback: &FeedbackDocument, chat: Arc<dyn ChatService>) -> bool {
        {
            let mut state = self.lock();
            let same_feedback = state.last_feedback.as_ref() == Some(feedback);
            let same_chat = Arc::ptr_eq(&state.chat, &chat);
            if same_feedback && same_chat {
                return false;
            }
            state.last_feedback = Some(feedback.clone());
            state.chat = chat;
        }

        self.on_feedback_change(feedback).await;
        true
    }

    /// Runs the full pipeline for `feedback` and records the outcome, unless a
    /// newer run has started in the meantime.
    pub async fn on_feedback_change(&self, feedback: &FeedbackDocument) {
        let (generation, chat) = {
            let mut state = self.lock();
            state.generation += 1;
            state.status = Status::Loading;
            (state.generation, Arc::clone(&state.chat))
        };

        let outcome = self.run_pipeline(feedback, chat.as_ref()).await;

        let mut state = self.lock();
        if state.generation != generation {
            debug!(
                generation,
                current = state.generation,
                "Discarding result from superseded run"
            );
            return;
        }

        match outcome {
            Ok(jobs) => {
                state.jobs = jobs;
                state.status = Status::Idle;
            }
            Err(e) => {
                error!("Job recommendation error: {e}");
                state.jobs.clear();
                state.status = Status::Error;
            }
        }
    }

    async fn run_pipeline(
        &self,
        feedback: &FeedbackDocument,
        chat: &dyn ChatService,
    ) -> Result<Vec<Job>, RecommendError> {
        let keywords = extract_keywords(feedback, chat).await?;
        let query = JobQuery::from(keywords);
        let jobs = self.source.fetch_jobs(&query).await?;
        info!(count = jobs.len(), "Job recommendations ready");
        Ok(jobs)
    }

    pub fn status(&self) -> Status {
        self.lock().status
    }

    pub fn jobs(&self) -> Vec<Job> {
        self.lock().jobs.clone()
    }

    pub fn view(&self) -> RecommendationView {
        let state = self.lock();
        render(state.status, &state.jobs)
    }

    fn lock(&self) -> MutexGuard<'_, ControllerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
