//! Per-response state and the page lifecycle around it.
//!
//! A [`ResponseSession`] is created for every response that arrives and
//! dropped as soon as a new request begins. Its expansion state lives and
//! dies with it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::citation::{QueryResponse, ResponseId};
use crate::expansion::ExpansionState;
use crate::markers::{parse_markers, ReferenceToken};
use crate::render::{render, CitationListView, DisplayTree, ResponseCardView};

// =============================================================================
// Response Session
// =============================================================================

/// One received response together with its display and expansion state.
#[derive(Debug, Clone)]
pub struct ResponseSession {
    id: ResponseId,
    response: QueryResponse,
    tokens: Vec<ReferenceToken>,
    answer: DisplayTree,
    expansion: ExpansionState,
    received_at: DateTime<Utc>,
}

impl ResponseSession {
    /// Tokenize and render `response` under a fresh identity.
    pub fn new(response: QueryResponse) -> Self {
        let id = ResponseId::new();
        let tokens = parse_markers(&response.response, response.citation_count());
        let answer = render(&tokens, id);

        Self {
            id,
            response,
            tokens,
            answer,
            expansion: ExpansionState::new(),
            received_at: Utc::now(),
        }
    }

    pub fn id(&self) -> ResponseId {
        self.id
    }

    pub fn response(&self) -> &QueryResponse {
        &self.response
    }

    pub fn tokens(&self) -> &[ReferenceToken] {
        &self.tokens
    }

    pub fn answer(&self) -> &DisplayTree {
        &self.answer
    }

    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    pub fn received_at(&self) -> DateTime<Utc> {
        self.received_at
    }

    /// Additively expand `index`. Returns `true` if the state changed.
    pub fn activate(&mut self, index: usize) -> bool {
        self.expansion.activate(index)
    }

    /// Replace the expanded set.
    pub fn set_expanded(&mut self, indices: Vec<usize>) {
        self.expansion.set_expanded(indices);
    }

    /// Build the card view for the current state.
    pub fn view(&self) -> ResponseCardView {
        ResponseCardView {
            response_id: self.id,
            query: self.response.query.clone(),
            answer: self.answer.clone(),
            citations: CitationListView::build(&self.response.citations, &self.expansion),
        }
    }
}

// =============================================================================
// Page State
// =============================================================================

/// Where the page is in its request cycle.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum PagePhase {
    /// Nothing asked yet
    #[default]
    Idle,
    /// A request is in flight
    Loading { query: String },
    /// A response is displayed
    Ready,
    /// The last request failed
    Failed { message: String },
}

impl std::fmt::Display for PagePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Loading { .. } => write!(f, "loading"),
            Self::Ready => write!(f, "ready"),
            Self::Failed { .. } => write!(f, "failed"),
        }
    }
}

/// The page: its phase and, when ready, the current response session.
#[derive(Debug, Default)]
pub struct PageState {
    phase: PagePhase,
    session: Option<ResponseSession>,
}

impl PageState {
    /// Create an idle page.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &PagePhase {
        &self.phase
    }

    pub fn session(&self) -> Option<&ResponseSession> {
        self.session.as_ref()
    }

    /// Session for `id`, if it is still the current one.
    pub fn session_for(&mut self, id: ResponseId) -> Option<&mut ResponseSession> {
        self.session.as_mut().filter(|s| s.id == id)
    }

    /// Start a request. Blank queries are ignored.
    ///
    /// Returns `false` when ignored. Otherwise the current session is
    /// discarded right away.
    pub fn begin_request(&mut self, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() {
            debug!("Ignoring blank query");
            return false;
        }

        self.session = None;
        self.phase = PagePhase::Loading {
            query: query.to_string(),
        };
        true
    }

    /// Install a new response, replacing any previous one.
    pub fn load(&mut self, response: QueryResponse) -> &ResponseSession {
        self.phase = PagePhase::Ready;
        self.session.insert(ResponseSession::new(response))
    }

    /// Record a failed request.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.session = None;
        self.phase = PagePhase::Failed {
            message: message.into(),
        };
    }

    /// Card view, only while ready.
    pub fn view(&self) -> Option<ResponseCardView> {
        match self.phase {
            PagePhase::Ready => self.session.as_ref().map(ResponseSession::view),
            _ => None,
        }
    }
}
