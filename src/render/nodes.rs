//! Display tree for answer text.
//!
//! Rendering is a pure projection of the token sequence. Valid markers
//! become [`DisplayNode::Reference`] nodes carrying the activation they
//! post when triggered. Everything else, including invalid markers,
//! becomes inert text.

use serde::{Deserialize, Serialize};

use crate::citation::ResponseId;
use crate::engine::{ActivationEvent, ActivationSink};
use crate::markers::ReferenceToken;

/// One node of rendered answer text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DisplayNode {
    /// Inert text
    Text { text: String },
    /// An interactive reference to a citation
    Reference {
        /// Marker text as it appeared in the answer
        text: String,
        /// Tooltip, e.g. "Jump to source 2"
        title: String,
        /// Activation posted when triggered
        activation: ActivationEvent,
    },
}

impl DisplayNode {
    /// Text shown for this node.
    pub fn text(&self) -> &str {
        match self {
            Self::Text { text } | Self::Reference { text, .. } => text,
        }
    }

    /// Whether the node reacts to being triggered.
    pub fn is_interactive(&self) -> bool {
        matches!(self, Self::Reference { .. })
    }

    /// Trigger the node.
    ///
    /// Interactive nodes deliver their activation to `sink` once and
    /// return `true`. Text nodes do nothing.
    pub fn trigger(&self, sink: &dyn ActivationSink) -> bool {
        match self {
            Self::Reference { activation, .. } => {
                sink.activate(*activation);
                true
            }
            Self::Text { .. } => false,
        }
    }
}

/// Rendered answer text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayTree {
    pub nodes: Vec<DisplayNode>,
}

impl DisplayTree {
    /// All text, joined.
    pub fn plain_text(&self) -> String {
        self.nodes.iter().map(DisplayNode::text).collect()
    }

    /// Interactive nodes in order.
    pub fn references(&self) -> impl Iterator<Item = &DisplayNode> {
        self.nodes.iter().filter(|n| n.is_interactive())
    }

    /// Trigger the node at `position`; `false` if absent or inert.
    pub fn trigger(&self, position: usize, sink: &dyn ActivationSink) -> bool {
        self.nodes
            .get(position)
            .map(|node| node.trigger(sink))
            .unwrap_or(false)
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether there are no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Project tokens into a display tree for the response `response_id`.
pub fn render(tokens: &[ReferenceToken], response_id: ResponseId) -> DisplayTree {
    let nodes = tokens
        .iter()
        .map(|token| match token {
            ReferenceToken::Marker {
                text,
                number,
                valid: true,
            } => DisplayNode::Reference {
                text: text.clone(),
                title: format!("Jump to source {}", number),
                activation: ActivationEvent::new(response_id, (*number - 1) as usize),
            },
            other => DisplayNode::Text {
                text: other.text().to_string(),
            },
        })
        .collect();

    DisplayTree { nodes }
}
