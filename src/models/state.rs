use std::fmt;
use std::time::Duration;

use serde::Serialize;

use crate::error::PipelineError;
use crate::models::{BlogRequest, BlogResponse, PostLength};

/// The three pipeline stages, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StageName {
    Research,
    Writing,
    Review,
}

impl fmt::Display for StageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StageName::Research => "research",
            StageName::Writing => "writing",
            StageName::Review => "review",
        };
        f.write_str(name)
    }
}

/// Record of a finished stage
#[derive(Debug, Clone, Serialize)]
pub struct StageRecord {
    pub stage: StageName,
    pub elapsed_ms: u64,
    pub output_chars: usize,
}

/// Accumulating record passed between stages
#[derive(Debug, Clone)]
pub struct PipelineState {
    pub topic: String,
    pub tone: String,
    pub length: PostLength,
    pub research: Option<String>,
    pub draft: Option<String>,
    pub final_blog: Option<String>,
    /// Stages completed so far, oldest first
    pub completed: Vec<StageRecord>,
}

impl PipelineState {
    /// Build the initial state, rejecting unknown lengths before any model call
    pub fn from_request(request: &BlogRequest) -> Result<Self, PipelineError> {
        let length = request.length.parse::<PostLength>()?;

        Ok(Self {
            topic: request.topic.clone(),
            tone: request.tone.clone(),
            length,
            research: None,
            draft: None,
            final_blog: None,
            completed: Vec::new(),
        })
    }

    pub fn record(&mut self, stage: StageName, elapsed: Duration, output_chars: usize) {
        self.completed.push(StageRecord {
            stage,
            elapsed_ms: elapsed.as_millis() as u64,
            output_chars,
        });
    }

    /// Total time spent in model calls
    pub fn total_elapsed_ms(&self) -> u64 {
        self.completed.iter().map(|r| r.elapsed_ms).sum()
    }

    /// Convert a finished state into the response body
    pub fn into_response(self) -> Result<BlogResponse, PipelineError> {
        let research = self.research.ok_or(PipelineError::Incomplete {
            stage: StageName::Research,
            field: "research",
        })?;
        let draft = self.draft.ok_or(PipelineError::Incomplete {
            stage: StageName::Writing,
            field: "draft",
        })?;
        let final_blog = self.final_blog.ok_or(PipelineError::Incomplete {
            stage: StageName::Review,
            field: "final_blog",
        })?;

        Ok(BlogResponse {
            topic: self.topic,
            research,
            draft,
            final_blog,
            status: "success".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_from_request() {
        let request = BlogRequest::new("Remote work").with_length("short");
        let state = PipelineState::from_request(&request).unwrap();

        assert_eq!(state.topic, "Remote work");
        assert_eq!(state.tone, "professional");
        assert_eq!(state.length, PostLength::Short);
        assert!(state.research.is_none());
        assert!(state.completed.is_empty());
    }

    #[test]
    fn test_state_rejects_unknown_length() {
        let request = BlogRequest::new("Remote work").with_length("huge");
        let err = PipelineState::from_request(&request).unwrap_err();

        assert!(matches!(err, PipelineError::UnknownLength { .. }));
    }

    #[test]
    fn test_into_response_requires_all_outputs() {
        let request = BlogRequest::new("Remote work");
        let mut state = PipelineState::from_request(&request).unwrap();
        state.research = Some("notes".to_string());
        state.draft = Some("draft".to_string());

        let err = state.into_response().unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Incomplete { stage: StageName::Review, field: "final_blog" }
        ));
    }

    #[test]
    fn test_into_response_names_producing_stage() {
        let mut state = PipelineState::from_request(&BlogRequest::new("x")).unwrap();
        state.research = Some("notes".to_string());
        state.final_blog = Some("final".to_string());

        let err = state.into_response().unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Incomplete { stage: StageName::Writing, field: "draft" }
        ));
        assert_eq!(err.to_string(), "writing stage never produced 'draft'");
    }

    #[test]
    fn test_record_accumulates_elapsed() {
        let mut state = PipelineState::from_request(&BlogRequest::new("x")).unwrap();
        state.record(StageName::Research, Duration::from_millis(120), 10);
        state.record(StageName::Writing, Duration::from_millis(80), 20);

        assert_eq!(state.completed.len(), 2);
        assert_eq!(state.completed[1].stage, StageName::Writing);
        assert_eq!(state.total_elapsed_ms(), 200);
    }
}
