pub mod error;
pub mod llm;
pub mod models;
pub mod server;
pub mod stages;

pub use error::PipelineError;
pub use llm::{ChatModel, OpenAiClient, OpenAiConfig};
pub use models::{BlogRequest, BlogResponse, PipelineState, PostLength, StageName};
pub use server::{router, serve, ApiError, AppState, ServerConfig};
pub use stages::{
    execute_research, execute_review, execute_writing, generate_blog, run_pipeline,
};
