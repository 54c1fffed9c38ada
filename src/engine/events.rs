//! Event types flowing into and out of the dispatcher.
//!
//! Inbound [`EngineEvent`]s are discrete messages placed on the
//! dispatcher's queue. Outbound [`EngineNotice`]s are broadcast to the
//! display surface and serialize to JSON for transport.

use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use crate::citation::{QueryResponse, ResponseId};
use crate::error::{Error, Result};
use crate::scroll::ScrollRequest;

// =============================================================================
// Activation
// =============================================================================

/// A reference marker was triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActivationEvent {
    /// Response the marker was rendered for
    pub response_id: ResponseId,
    /// Zero-based citation index
    pub index: usize,
}

impl ActivationEvent {
    /// Create an activation event.
    pub fn new(response_id: ResponseId, index: usize) -> Self {
        Self { response_id, index }
    }
}

/// Receiver of activations from interactive reference nodes.
pub trait ActivationSink: Send + Sync {
    /// Deliver one activation.
    fn activate(&self, event: ActivationEvent);
}

/// Sink that records activations, for tests and offline rendering.
#[derive(Debug, Default, Clone)]
pub struct CollectingSink {
    events: Arc<RwLock<Vec<ActivationEvent>>>,
}

impl CollectingSink {
    /// Create a new collecting sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Activations received so far.
    pub fn events(&self) -> Vec<ActivationEvent> {
        self.events.read().map(|e| e.clone()).unwrap_or_default()
    }
}

impl ActivationSink for CollectingSink {
    fn activate(&self, event: ActivationEvent) {
        if let Ok(mut events) = self.events.write() {
            events.push(event);
        }
    }
}

/// Sink that discards all activations.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl ActivationSink for NullSink {
    fn activate(&self, _event: ActivationEvent) {}
}

// =============================================================================
// Accordion changes
// =============================================================================

/// Expanded sections as reported by the citation list.
///
/// List widgets report either one index or all open indices; both shapes
/// are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AccordionChange {
    /// A single open section
    One(usize),
    /// All open sections
    Many(Vec<usize>),
}

impl AccordionChange {
    /// Normalize to a list of indices.
    pub fn into_indices(self) -> Vec<usize> {
        match self {
            Self::One(index) => vec![index],
            Self::Many(indices) => indices,
        }
    }
}

impl From<Vec<usize>> for AccordionChange {
    fn from(indices: Vec<usize>) -> Self {
        Self::Many(indices)
    }
}

impl From<usize> for AccordionChange {
    fn from(index: usize) -> Self {
        Self::One(index)
    }
}

// =============================================================================
// Inbound events
// =============================================================================

/// Events processed by the dispatcher, in arrival order.
#[derive(Debug, Clone)]
pub enum EngineEvent {
    /// A new question was submitted and the request is in flight
    BeginRequest { query: String },
    /// A complete response arrived
    Load(QueryResponse),
    /// The request failed
    Fail { message: String },
    /// A reference marker was triggered
    Activate(ActivationEvent),
    /// The citation list reported its open sections
    SetExpanded {
        response_id: ResponseId,
        indices: Vec<usize>,
    },
    /// A deferred scroll timer elapsed
    ScrollDue(ScrollRequest),
}

impl EngineEvent {
    /// Get the event type name.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::BeginRequest { .. } => "begin_request",
            Self::Load(_) => "load",
            Self::Fail { .. } => "fail",
            Self::Activate(_) => "activate",
            Self::SetExpanded { .. } => "set_expanded",
            Self::ScrollDue(_) => "scroll_due",
        }
    }
}

/// Cloneable handle for posting events to a dispatcher.
#[derive(Debug, Clone)]
pub struct EngineHandle {
    sender: mpsc::UnboundedSender<EngineEvent>,
}

impl EngineHandle {
    pub(crate) fn new(sender: mpsc::UnboundedSender<EngineEvent>) -> Self {
        Self { sender }
    }

    /// Post a raw event.
    pub fn send(&self, event: EngineEvent) -> Result<()> {
        self.sender
            .send(event)
            .map_err(|e| Error::channel_closed(e.0.type_name()))
    }

    /// Announce that a new request has started.
    pub fn begin_request(&self, query: impl Into<String>) -> Result<()> {
        self.send(EngineEvent::BeginRequest {
            query: query.into(),
        })
    }

    /// Deliver a validated response.
    pub fn load(&self, response: QueryResponse) -> Result<()> {
        self.send(EngineEvent::Load(response))
    }

    /// Report a failed request.
    pub fn fail(&self, message: impl Into<String>) -> Result<()> {
        self.send(EngineEvent::Fail {
            message: message.into(),
        })
    }

    /// Report the citation list's open sections.
    pub fn set_expanded(
        &self,
        response_id: ResponseId,
        change: impl Into<AccordionChange>,
    ) -> Result<()> {
        self.send(EngineEvent::SetExpanded {
            response_id,
            indices: change.into().into_indices(),
        })
    }
}

impl ActivationSink for EngineHandle {
    fn activate(&self, event: ActivationEvent) {
        // A closed queue means the page is gone; nothing left to expand.
        let _ = self.sender.send(EngineEvent::Activate(event));
    }
}

// =============================================================================
// Outbound notices
// =============================================================================

/// Notices published by the dispatcher after each state change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum EngineNotice {
    /// A request started; prior response discarded
    Cleared,
    /// A new response is ready for display
    ResponseLoaded {
        response_id: ResponseId,
        citation_count: usize,
    },
    /// A request failed
    RequestFailed { message: String },
    /// Expanded citations changed
    ExpansionChanged {
        response_id: ResponseId,
        indices: Vec<usize>,
    },
    /// A citation was scrolled into view
    Scrolled { response_id: ResponseId, anchor: String },
    /// A deferred scroll found nothing to scroll to
    ScrollSkipped { response_id: ResponseId, anchor: String },
}

impl EngineNotice {
    /// Serialize to JSON string.
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize from JSON string.
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Get the notice type name.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Cleared => "cleared",
            Self::ResponseLoaded { .. } => "response_loaded",
            Self::RequestFailed { .. } => "request_failed",
            Self::ExpansionChanged { .. } => "expansion_changed",
            Self::Scrolled { .. } => "scrolled",
            Self::ScrollSkipped { .. } => "scroll_skipped",
        }
    }
}
