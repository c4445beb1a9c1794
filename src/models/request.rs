use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PipelineError;

/// Incoming generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogRequest {
    /// Subject of the blog post
    pub topic: String,
    /// Free-form tone, e.g. "casual" or "technical"
    #[serde(default = "default_tone")]
    pub tone: String,
    /// One of "short", "medium", "long"
    #[serde(default = "default_length")]
    pub length: String,
}

fn default_tone() -> String {
    "professional".to_string()
}

fn default_length() -> String {
    PostLength::Medium.to_string()
}

impl BlogRequest {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            tone: default_tone(),
            length: default_length(),
        }
    }

    pub fn with_tone(mut self, tone: impl Into<String>) -> Self {
        self.tone = tone.into();
        self
    }

    pub fn with_length(mut self, length: impl Into<String>) -> Self {
        self.length = length.into();
        self
    }
}

/// Target length of the generated post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostLength {
    Short,
    #[default]
    Medium,
    Long,
}

impl PostLength {
    /// Word range handed to the writer
    pub fn word_range(&self) -> &'static str {
        match self {
            PostLength::Short => "500-700",
            PostLength::Medium => "800-1200",
            PostLength::Long => "1500-2000",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PostLength::Short => "short",
            PostLength::Medium => "medium",
            PostLength::Long => "long",
        }
    }
}

impl fmt::Display for PostLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PostLength {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "short" => Ok(PostLength::Short),
            "medium" => Ok(PostLength::Medium),
            "long" => Ok(PostLength::Long),
            other => Err(PipelineError::UnknownLength {
                value: other.to_string(),
            }),
        }
    }
}

/// Successful generation response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogResponse {
    pub topic: String,
    pub research: String,
    pub draft: String,
    pub final_blog: String,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let request: BlogRequest = serde_json::from_str(r#"{"topic": "Rust"}"#).unwrap();

        assert_eq!(request.topic, "Rust");
        assert_eq!(request.tone, "professional");
        assert_eq!(request.length, "medium");
    }

    #[test]
    fn test_word_ranges() {
        assert_eq!(PostLength::Short.word_range(), "500-700");
        assert_eq!(PostLength::Medium.word_range(), "800-1200");
        assert_eq!(PostLength::Long.word_range(), "1500-2000");
    }

    #[test]
    fn test_parse_length() {
        assert_eq!("long".parse::<PostLength>().unwrap(), PostLength::Long);

        let err = "epic".parse::<PostLength>().unwrap_err();
        assert!(matches!(err, PipelineError::UnknownLength { ref value } if value == "epic"));
    }

    #[test]
    fn test_length_is_case_sensitive() {
        assert!("Short".parse::<PostLength>().is_err());
    }
}
