use std::time::Instant;

use tracing::{debug, info};

use crate::error::PipelineError;
use crate::llm::{build_review_prompt, ChatModel};
use crate::models::{PipelineState, StageName};

/// Execute the review stage
///
/// Polishes the draft for grammar, flow, tone and SEO, and stores the
/// result as `final_blog`.
pub async fn execute_review(
    model: &dyn ChatModel,
    mut state: PipelineState,
) -> Result<PipelineState, PipelineError> {
    let draft = state.draft.as_deref().ok_or(PipelineError::MissingInput {
        stage: StageName::Review,
        field: "draft",
    })?;

    let prompt = build_review_prompt(draft, &state.tone);
    debug!("Review prompt: {} chars", prompt.len());

    let started = Instant::now();
    let final_blog = model
        .complete(&prompt)
        .await
        .map_err(|e| PipelineError::stage(StageName::Review, e))?;

    info!(
        "Review complete: {} chars in {:?}",
        final_blog.len(),
        started.elapsed()
    );

    state.record(StageName::Review, started.elapsed(), final_blog.len());
    state.final_blog = Some(final_blog);
    Ok(state)
}
