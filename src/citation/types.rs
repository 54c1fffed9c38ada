//! Core citation and response types.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::relevance::{classify, format_score, RelevanceBand};

/// Unique identity of one received response.
///
/// Every response loaded into the engine gets a fresh id. Activation
/// events and deferred scrolls carry the id they were created for, so
/// anything addressed to a replaced response can be recognized as stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResponseId(pub Uuid);

impl ResponseId {
    /// Generate a new random response ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create from a UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Parse from string.
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for ResponseId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ResponseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A source record backing part of an answer.
///
/// The position of a citation in its response is significant: the
/// citation at index `i` is referred to as `[i + 1]` in the answer text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Citation {
    /// Human-readable source name (e.g. "Section 3.1.1")
    pub source: String,
    /// Excerpt of the source text
    pub text: String,
    /// Similarity score in `[0, 1]`, if the retriever produced one
    #[serde(default, deserialize_with = "lenient_score")]
    pub relevance_score: Option<f64>,
}

impl Citation {
    /// Create a citation without a relevance score.
    pub fn new(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            text: text.into(),
            relevance_score: None,
        }
    }

    /// Set the relevance score.
    pub fn with_score(mut self, score: f64) -> Self {
        self.relevance_score = Some(score);
        self
    }

    /// Display band for this citation's score.
    pub fn band(&self) -> RelevanceBand {
        classify(self.relevance_score)
    }

    /// Formatted score, `"N/A"` when missing.
    pub fn formatted_score(&self) -> String {
        format_score(self.relevance_score)
    }
}

/// A complete answer to one question.
///
/// Arrives as one unit and is never partially updated; a new question
/// replaces the whole value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    /// The question as submitted
    pub query: String,
    /// Answer text with inline `[n]` markers
    pub response: String,
    /// Ordered citations referenced by the markers
    pub citations: Vec<Citation>,
}

impl QueryResponse {
    /// Create a response.
    pub fn new(
        query: impl Into<String>,
        response: impl Into<String>,
        citations: Vec<Citation>,
    ) -> Self {
        Self {
            query: query.into(),
            response: response.into(),
            citations,
        }
    }

    /// Number of citations.
    pub fn citation_count(&self) -> usize {
        self.citations.len()
    }

    /// Whether the response carries any citations.
    pub fn has_citations(&self) -> bool {
        !self.citations.is_empty()
    }
}

/// Accept any JSON value for a score; only finite numbers survive.
fn lenient_score<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_score(&value))
}

pub(crate) fn coerce_score(value: &Value) -> Option<f64> {
    value.as_f64().filter(|score| score.is_finite())
}
