use std::time::Instant;

use tracing::{debug, info};

use crate::error::PipelineError;
use crate::llm::{build_writer_prompt, ChatModel};
use crate::models::{PipelineState, StageName};

/// Execute the writing stage
///
/// Turns the research notes into a full draft sized by the requested length.
pub async fn execute_writing(
    model: &dyn ChatModel,
    mut state: PipelineState,
) -> Result<PipelineState, PipelineError> {
    let research = state.research.as_deref().ok_or(PipelineError::MissingInput {
        stage: StageName::Writing,
        field: "research",
    })?;

    let prompt = build_writer_prompt(research, &state.topic, &state.tone, state.length);
    debug!("Writer prompt: {} chars", prompt.len());

    let started = Instant::now();
    let draft = model
        .complete(&prompt)
        .await
        .map_err(|e| PipelineError::stage(StageName::Writing, e))?;

    info!(
        "Draft complete: {} chars in {:?}",
        draft.len(),
        started.elapsed()
    );

    state.record(StageName::Writing, started.elapsed(), draft.len());
    state.draft = Some(draft);
    Ok(state)
}
