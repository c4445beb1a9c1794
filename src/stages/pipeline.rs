use tracing::info;

use crate::error::PipelineError;
use crate::llm::ChatModel;
use crate::models::{BlogRequest, BlogResponse, PipelineState};
use crate::stages::{execute_research, execute_review, execute_writing};

/// Run research, writing and review in order
///
/// The length is validated before the first model call. The first failing
/// stage ends the run and nothing produced so far is returned.
pub async fn run_pipeline(
    model: &dyn ChatModel,
    request: &BlogRequest,
) -> Result<PipelineState, PipelineError> {
    let state = PipelineState::from_request(request)?;

    info!(
        "Starting pipeline: topic={:?}, tone={:?}, length={}",
        state.topic, state.tone, state.length
    );

    let state = execute_research(model, state).await?;
    let state = execute_writing(model, state).await?;
    let state = execute_review(model, state).await?;

    info!(
        "Pipeline complete: {} stages in {}ms",
        state.completed.len(),
        state.total_elapsed_ms()
    );

    Ok(state)
}

/// Run the pipeline and shape the result as a response body
pub async fn generate_blog(
    model: &dyn ChatModel,
    request: &BlogRequest,
) -> Result<BlogResponse, PipelineError> {
    run_pipeline(model, request).await?.into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StageName;
    use crate::stages::test_support::ScriptedModel;

    #[tokio::test]
    async fn test_stages_run_in_order() {
        let model = ScriptedModel::new(&["R", "D", "F"]);
        let request = BlogRequest::new("Benefits of Remote Work").with_length("short");

        let state = run_pipeline(&model, &request).await.unwrap();

        let order: Vec<StageName> = state.completed.iter().map(|r| r.stage).collect();
        assert_eq!(
            order,
            vec![StageName::Research, StageName::Writing, StageName::Review]
        );

        let prompts = model.prompts();
        assert_eq!(prompts.len(), 3);
        assert!(prompts[0].starts_with("You are a research agent."));
        assert!(prompts[1].contains("Research:\nR\n"));
        assert!(prompts[2].contains("Draft:\nD\n"));
    }

    #[tokio::test]
    async fn test_generate_blog_response() {
        let model = ScriptedModel::new(&["research", "draft", "final"]);
        let request = BlogRequest::new("AI in Education");

        let response = generate_blog(&model, &request).await.unwrap();

        assert_eq!(response.topic, "AI in Education");
        assert_eq!(response.research, "research");
        assert_eq!(response.draft, "draft");
        assert_eq!(response.final_blog, "final");
        assert_eq!(response.status, "success");
    }

    #[tokio::test]
    async fn test_unknown_length_makes_no_calls() {
        let model = ScriptedModel::new(&["research", "draft", "final"]);
        let request = BlogRequest::new("AI").with_length("extra-long");

        let err = generate_blog(&model, &request).await.unwrap_err();

        assert!(matches!(err, PipelineError::UnknownLength { .. }));
        assert!(model.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_failure_stops_pipeline() {
        // Only research succeeds; writing runs out of replies
        let model = ScriptedModel::new(&["research"]);
        let request = BlogRequest::new("AI");

        let err = generate_blog(&model, &request).await.unwrap_err();

        assert!(matches!(
            err,
            PipelineError::Stage { stage: StageName::Writing, .. }
        ));
        assert_eq!(model.prompts().len(), 2);
    }
}
