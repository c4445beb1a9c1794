use thiserror::Error;

use crate::models::StageName;

/// Errors that stop a pipeline run
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The requested length is not one of short, medium, long
    #[error("Unknown length '{value}': expected one of short, medium, long")]
    UnknownLength { value: String },

    /// A stage ran before the field it reads was produced
    #[error("{stage} stage is missing its '{field}' input")]
    MissingInput {
        stage: StageName,
        field: &'static str,
    },

    /// A finished run is missing the output of one of its stages
    #[error("{stage} stage never produced '{field}'")]
    Incomplete {
        stage: StageName,
        field: &'static str,
    },

    /// The model call for a stage failed
    #[error("{stage} stage failed: {message}")]
    Stage { stage: StageName, message: String },
}

impl PipelineError {
    /// Wrap a model failure, keeping the full context chain in the message
    pub fn stage(stage: StageName, err: anyhow::Error) -> Self {
        PipelineError::Stage {
            stage,
            message: format!("{:#}", err),
        }
    }
}
