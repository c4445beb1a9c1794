use std::time::Instant;

use tracing::{debug, info};

use crate::error::PipelineError;
use crate::llm::{build_research_prompt, ChatModel};
use crate::models::{PipelineState, StageName};

/// Execute the research stage
///
/// Asks the model for key points, facts, an outline and angles for the
/// topic, and stores the answer as `research`.
pub async fn execute_research(
    model: &dyn ChatModel,
    mut state: PipelineState,
) -> Result<PipelineState, PipelineError> {
    let prompt = build_research_prompt(&state.topic, &state.tone, state.length);
    debug!("Research prompt: {} chars", prompt.len());

    let started = Instant::now();
    let research = model
        .complete(&prompt)
        .await
        .map_err(|e| PipelineError::stage(StageName::Research, e))?;

    info!(
        "Research complete: {} chars in {:?}",
        research.len(),
        started.elapsed()
    );

    state.record(StageName::Research, started.elapsed(), research.len());
    state.research = Some(research);
    Ok(state)
}
