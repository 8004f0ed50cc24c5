pub mod config;
pub mod errors;
pub mod jobs;
pub mod llm_client;
pub mod recommend;
pub mod routes;
pub mod state;
