//! # cite-xref
//!
//! Cross-referencing between an answer's inline `[n]` markers and the
//! citations that back it.
//!
//! ## Core Components
//!
//! - **Citation**: response data model, relevance bands, payload ingress
//! - **Markers**: lossless tokenization of answer text into literals and markers
//! - **Render**: display tree with interactive references, citation list views
//! - **Expansion**: which citations are open (additive activation, replacing toggles)
//! - **Scroll**: deferred, best-effort scrolling to an activated citation
//! - **Engine**: single-threaded dispatcher that owns the per-response state
//!
//! ## Example
//!
//! ```rust,ignore
//! use cite_xref::{Dispatcher, EngineConfig, QueryResponse, RecordingScrollTarget};
//!
//! let (mut dispatcher, handle) =
//!     Dispatcher::new(EngineConfig::default(), RecordingScrollTarget::new());
//!
//! handle.begin_request("What happens if I steal?")?;
//! handle.load(QueryResponse::from_json(payload)?)?;
//! dispatcher.process_pending();
//!
//! let card = dispatcher.view().expect("response is ready");
//! card.answer.trigger(1, &handle); // user clicks "[1]"
//! ```

pub mod citation;
pub mod engine;
pub mod error;
pub mod expansion;
pub mod markers;
pub mod render;
pub mod scroll;

// Re-exports for convenience
pub use citation::{
    classify, failure_message, format_score, relevance_badge, Citation, QueryResponse,
    RelevanceBand, ResponseId, CONNECTION_FAILURE_MESSAGE,
};
pub use engine::{
    AccordionChange, ActivationEvent, ActivationSink, CollectingSink, Dispatcher, EngineConfig,
    EngineEvent, EngineHandle, EngineNotice, NullSink, PagePhase, PageState, ResponseSession,
};
pub use error::{Error, Result};
pub use expansion::ExpansionState;
pub use markers::{parse_markers, reassemble, ReferenceToken};
pub use render::{
    render, CitationEntryView, CitationListView, DisplayNode, DisplayTree, ResponseCardView,
};
pub use scroll::{
    CitationAnchor, NullScrollTarget, RecordingScrollTarget, ScrollBehavior, ScrollBlock,
    ScrollCoordinator, ScrollOptions, ScrollRequest, ScrollTarget, DEFAULT_SCROLL_DELAY_MS,
};
