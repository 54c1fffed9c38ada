//! View data for the response card and its citation list.
//!
//! These structures carry everything a display surface needs to draw one
//! answer. All types are serializable for transport.

use serde::{Deserialize, Serialize};

use crate::citation::{relevance_badge, Citation, RelevanceBand, ResponseId};
use crate::expansion::ExpansionState;
use crate::scroll::CitationAnchor;

use super::nodes::DisplayTree;

// =============================================================================
// Citation List
// =============================================================================

/// One entry of the citation list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CitationEntryView {
    /// 1-based citation number
    pub number: usize,
    /// Badge label, e.g. "[2]"
    pub label: String,
    /// Element identifier used as scroll target
    pub anchor: CitationAnchor,
    /// Source name
    pub source: String,
    /// Source excerpt
    pub text: String,
    /// Relevance badge, e.g. "92% match" or "N/A match"
    pub relevance: String,
    /// Relevance band
    pub band: RelevanceBand,
    /// Badge color hint for the band
    pub color_scheme: String,
    /// Whether the entry is expanded
    pub expanded: bool,
}

impl CitationEntryView {
    /// Build the entry for the citation at zero-based `index`.
    pub fn from_citation(index: usize, citation: &Citation, expanded: bool) -> Self {
        let band = citation.band();
        Self {
            number: index + 1,
            label: format!("[{}]", index + 1),
            anchor: CitationAnchor::for_index(index),
            source: citation.source.clone(),
            text: citation.text.clone(),
            relevance: relevance_badge(citation.relevance_score),
            band,
            color_scheme: band.color_scheme().to_string(),
            expanded,
        }
    }
}

/// The "Sources" section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CitationListView {
    /// Section heading, e.g. "Sources (3)"
    pub heading: String,
    /// Entries in citation order
    pub entries: Vec<CitationEntryView>,
}

impl CitationListView {
    /// Build the section, or `None` when there is nothing to list.
    pub fn build(citations: &[Citation], expansion: &ExpansionState) -> Option<Self> {
        if citations.is_empty() {
            return None;
        }

        let entries = citations
            .iter()
            .enumerate()
            .map(|(idx, citation)| {
                CitationEntryView::from_citation(idx, citation, expansion.contains(idx))
            })
            .collect();

        Some(Self {
            heading: format!("Sources ({})", citations.len()),
            entries,
        })
    }

    /// Indices of expanded entries.
    pub fn expanded_indices(&self) -> Vec<usize> {
        self.entries
            .iter()
            .filter(|e| e.expanded)
            .map(|e| e.number - 1)
            .collect()
    }
}

// =============================================================================
// Response Card
// =============================================================================

/// Everything shown for one answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseCardView {
    /// Response identity, echoed back with list changes
    pub response_id: ResponseId,
    /// The question
    pub query: String,
    /// The rendered answer
    pub answer: DisplayTree,
    /// Citation section, absent when there are no citations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub citations: Option<CitationListView>,
}

impl ResponseCardView {
    /// Serialize to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
