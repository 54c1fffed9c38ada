//! Single-threaded event dispatcher.
//!
//! The dispatcher owns the page state and processes queued events one at
//! a time. Every state change happens here. The only deferred work is the
//! scroll timer, which reports back through the same queue.

use std::time::Duration;

use tokio::sync::{broadcast, mpsc};
use tracing::{debug, info, trace};

use crate::citation::{QueryResponse, ResponseId};
use crate::error::{Error, Result};
use crate::render::ResponseCardView;
use crate::scroll::{
    ScrollCoordinator, ScrollOptions, ScrollRequest, ScrollTarget, DEFAULT_SCROLL_DELAY_MS,
};

use super::events::{ActivationEvent, EngineEvent, EngineHandle, EngineNotice};
use super::session::{PagePhase, PageState};

// =============================================================================
// Configuration
// =============================================================================

/// Longest accepted scroll delay. The delay only has to cover one re-render.
pub const MAX_SCROLL_DELAY_MS: u64 = 5_000;

/// Configuration for the dispatcher.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Delay between activation and scroll, in milliseconds
    pub scroll_delay_ms: u64,
    /// How activated citations are scrolled into view
    pub scroll_options: ScrollOptions,
    /// Notice channel capacity
    pub notice_channel_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            scroll_delay_ms: DEFAULT_SCROLL_DELAY_MS,
            scroll_options: ScrollOptions::default(),
            notice_channel_capacity: 256,
        }
    }
}

impl EngineConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration from environment variables.
    ///
    /// Absent or unparsable values fall back to the defaults, as does a
    /// notice capacity of zero.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            scroll_delay_ms: lookup("CITE_XREF_SCROLL_DELAY_MS")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(defaults.scroll_delay_ms),
            notice_channel_capacity: lookup("CITE_XREF_NOTICE_CAPACITY")
                .and_then(|s| s.trim().parse().ok())
                .filter(|c| *c > 0)
                .unwrap_or(defaults.notice_channel_capacity),
            ..defaults
        }
    }

    /// Check the configuration for values the dispatcher cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.notice_channel_capacity == 0 {
            return Err(Error::config("notice_channel_capacity must be at least 1"));
        }
        if self.scroll_delay_ms > MAX_SCROLL_DELAY_MS {
            return Err(Error::config(format!(
                "scroll_delay_ms {} exceeds maximum of {}",
                self.scroll_delay_ms, MAX_SCROLL_DELAY_MS
            )));
        }
        Ok(())
    }

    /// Set the scroll delay.
    pub fn scroll_delay_ms(mut self, ms: u64) -> Self {
        self.scroll_delay_ms = ms;
        self
    }

    /// Set scroll options.
    pub fn scroll_options(mut self, options: ScrollOptions) -> Self {
        self.scroll_options = options;
        self
    }

    /// Set notice channel capacity.
    pub fn notice_channel_capacity(mut self, capacity: usize) -> Self {
        self.notice_channel_capacity = capacity;
        self
    }
}

// =============================================================================
// Dispatcher
// =============================================================================

/// Owns the page and reacts to [`EngineEvent`]s.
pub struct Dispatcher<T: ScrollTarget> {
    config: EngineConfig,
    page: PageState,
    scroll: ScrollCoordinator,
    target: T,
    queue: mpsc::WeakUnboundedSender<EngineEvent>,
    receiver: mpsc::UnboundedReceiver<EngineEvent>,
    notices: broadcast::Sender<EngineNotice>,
}

impl<T: ScrollTarget> Dispatcher<T> {
    /// Create a dispatcher and the handle used to feed it.
    ///
    /// The dispatcher keeps only a weak reference to its own queue; once
    /// every [`EngineHandle`] is dropped, [`run`](Self::run) returns.
    pub fn new(config: EngineConfig, target: T) -> (Self, EngineHandle) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let (notices, _) = broadcast::channel(config.notice_channel_capacity.max(1));
        let scroll = ScrollCoordinator::new(
            Duration::from_millis(config.scroll_delay_ms),
            config.scroll_options,
        );

        let dispatcher = Self {
            config,
            page: PageState::new(),
            scroll,
            target,
            queue: sender.downgrade(),
            receiver,
            notices,
        };
        (dispatcher, EngineHandle::new(sender))
    }

    /// Like [`new`](Self::new), but rejects an invalid configuration.
    pub fn try_new(config: EngineConfig, target: T) -> Result<(Self, EngineHandle)> {
        config.validate()?;
        Ok(Self::new(config, target))
    }

    /// Get a reference to the configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Subscribe to notices.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineNotice> {
        self.notices.subscribe()
    }

    /// The scroll target.
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Current page phase.
    pub fn phase(&self) -> &PagePhase {
        self.page.phase()
    }

    /// Identity of the displayed response, if any.
    pub fn current_response(&self) -> Option<ResponseId> {
        self.page.session().map(|s| s.id())
    }

    /// Expanded indices of the displayed response.
    pub fn expanded(&self) -> Vec<usize> {
        self.page
            .session()
            .map(|s| s.expansion().indices())
            .unwrap_or_default()
    }

    /// Card view of the displayed response.
    pub fn view(&self) -> Option<ResponseCardView> {
        self.page.view()
    }

    /// Scroll timers that have not fired yet.
    pub fn pending_scrolls(&self) -> usize {
        self.scroll.pending_count()
    }

    // =========================================================================
    // Event Loop
    // =========================================================================

    /// Process events until every handle has been dropped.
    pub async fn run(mut self) {
        while self.step().await {}
        debug!("All engine handles dropped, dispatcher stopping");
    }

    /// Wait for the next event and process it.
    ///
    /// Returns `false` once the queue is closed.
    pub async fn step(&mut self) -> bool {
        match self.receiver.recv().await {
            Some(event) => {
                self.handle(event);
                true
            }
            None => false,
        }
    }

    /// Process every event already queued, without waiting.
    pub fn process_pending(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(event) = self.receiver.try_recv() {
            self.handle(event);
            processed += 1;
        }
        processed
    }

    /// Process one event.
    pub fn handle(&mut self, event: EngineEvent) {
        trace!(event = event.type_name(), "Handling engine event");
        match event {
            EngineEvent::BeginRequest { query } => self.on_begin_request(&query),
            EngineEvent::Load(response) => self.on_load(response),
            EngineEvent::Fail { message } => self.on_fail(message),
            EngineEvent::Activate(activation) => self.on_activate(activation),
            EngineEvent::SetExpanded {
                response_id,
                indices,
            } => self.on_set_expanded(response_id, indices),
            EngineEvent::ScrollDue(request) => self.on_scroll_due(request),
        }
    }

    // =========================================================================
    // Handlers
    // =========================================================================

    fn on_begin_request(&mut self, query: &str) {
        if !self.page.begin_request(query) {
            return;
        }
        self.cancel_scrolls();
        self.publish(EngineNotice::Cleared);
    }

    fn on_load(&mut self, response: QueryResponse) {
        self.cancel_scrolls();
        let session = self.page.load(response);
        let notice = EngineNotice::ResponseLoaded {
            response_id: session.id(),
            citation_count: session.response().citation_count(),
        };
        info!(
            response_id = %session.id(),
            citations = session.response().citation_count(),
            "Response loaded"
        );
        self.publish(notice);
    }

    fn on_fail(&mut self, message: String) {
        self.cancel_scrolls();
        debug!(%message, "Request failed");
        self.page.fail(message.clone());
        self.publish(EngineNotice::RequestFailed { message });
    }

    fn on_activate(&mut self, activation: ActivationEvent) {
        let Some(session) = self.page.session_for(activation.response_id) else {
            debug!(response_id = %activation.response_id, "Dropping activation for stale response");
            return;
        };

        let changed = session.activate(activation.index);
        let indices = session.expansion().indices();
        debug!(index = activation.index, changed, "Citation activated");

        if changed {
            self.publish(EngineNotice::ExpansionChanged {
                response_id: activation.response_id,
                indices,
            });
        }

        let request = ScrollRequest::new(activation.response_id, activation.index);
        let anchor = request.anchor.to_string();
        if !self.scroll.schedule(request, self.queue.clone()) {
            self.publish(EngineNotice::ScrollSkipped {
                response_id: activation.response_id,
                anchor,
            });
        }
    }

    fn on_set_expanded(&mut self, response_id: ResponseId, indices: Vec<usize>) {
        let Some(session) = self.page.session_for(response_id) else {
            debug!(%response_id, "Dropping expansion change for stale response");
            return;
        };

        session.set_expanded(indices);
        let indices = session.expansion().indices();
        self.publish(EngineNotice::ExpansionChanged {
            response_id,
            indices,
        });
    }

    fn on_scroll_due(&mut self, request: ScrollRequest) {
        if self.current_response() != Some(request.response_id) {
            trace!(anchor = %request.anchor, "Scroll target belongs to a replaced response");
            return;
        }

        let scrolled = self.scroll.perform(&self.target, &request);
        let notice = if scrolled {
            EngineNotice::Scrolled {
                response_id: request.response_id,
                anchor: request.anchor.to_string(),
            }
        } else {
            trace!(anchor = %request.anchor, "Scroll target not found");
            EngineNotice::ScrollSkipped {
                response_id: request.response_id,
                anchor: request.anchor.to_string(),
            }
        };
        self.publish(notice);
    }

    fn cancel_scrolls(&mut self) {
        let cancelled = self.scroll.cancel_all();
        if cancelled > 0 {
            debug!(cancelled, "Cancelled pending scrolls");
        }
    }

    fn publish(&self, notice: EngineNotice) {
        // No subscribers is fine.
        let _ = self.notices.send(notice);
    }
}

impl<T: ScrollTarget + std::fmt::Debug> std::fmt::Debug for Dispatcher<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("config", &self.config)
            .field("phase", self.page.phase())
            .field("target", &self.target)
            .field("pending_scrolls", &self.scroll.pending_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::citation::Citation;
    use crate::engine::ActivationSink;
    use crate::scroll::{CitationAnchor, NullScrollTarget, RecordingScrollTarget};
    use pretty_assertions::assert_eq;

    fn two_citations() -> QueryResponse {
        QueryResponse::new(
            "What happens if I steal?",
            "Theft is punished under [1] and [3].",
            vec![
                Citation::new("Section 1.1", "Thieves lose a hand.").with_score(0.92),
                Citation::new("Section 1.2", "Repeat offenders go to the Wall.").with_score(0.61),
            ],
        )
    }

    fn setup() -> (
        Dispatcher<RecordingScrollTarget>,
        EngineHandle,
        RecordingScrollTarget,
    ) {
        let target = RecordingScrollTarget::new();
        let (dispatcher, handle) = Dispatcher::new(EngineConfig::default(), target.clone());
        (dispatcher, handle, target)
    }

    fn load(dispatcher: &mut Dispatcher<RecordingScrollTarget>, response: QueryResponse) -> ResponseId {
        dispatcher.handle(EngineEvent::Load(response));
        dispatcher.current_response().unwrap()
    }

    #[test]
    fn test_config_builder() {
        let config = EngineConfig::new()
            .scroll_delay_ms(250)
            .notice_channel_capacity(16);
        assert_eq!(config.scroll_delay_ms, 250);
        assert_eq!(config.notice_channel_capacity, 16);
        assert_eq!(config.scroll_options, ScrollOptions::default());
    }

    #[test]
    fn test_config_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.scroll_delay_ms, 100);
        assert_eq!(config.notice_channel_capacity, 256);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_from_lookup_fallbacks() {
        let vars = |pairs: &'static [(&'static str, &'static str)]| {
            move |key: &str| {
                pairs
                    .iter()
                    .find(|(k, _)| *k == key)
                    .map(|(_, v)| v.to_string())
            }
        };

        let config = EngineConfig::from_lookup(vars(&[]));
        assert_eq!(config.scroll_delay_ms, DEFAULT_SCROLL_DELAY_MS);
        assert_eq!(config.notice_channel_capacity, 256);

        let config = EngineConfig::from_lookup(vars(&[
            ("CITE_XREF_SCROLL_DELAY_MS", "soon"),
            ("CITE_XREF_NOTICE_CAPACITY", "0"),
        ]));
        assert_eq!(config.scroll_delay_ms, DEFAULT_SCROLL_DELAY_MS);
        assert_eq!(config.notice_channel_capacity, 256);

        let config = EngineConfig::from_lookup(vars(&[
            ("CITE_XREF_SCROLL_DELAY_MS", " 250 "),
            ("CITE_XREF_NOTICE_CAPACITY", "-3"),
        ]));
        assert_eq!(config.scroll_delay_ms, 250);
        assert_eq!(config.notice_channel_capacity, 256);

        let config = EngineConfig::from_lookup(vars(&[("CITE_XREF_NOTICE_CAPACITY", "16")]));
        assert_eq!(config.notice_channel_capacity, 16);
    }

    #[test]
    fn test_activate_without_runtime_still_expands() {
        let target = RecordingScrollTarget::new();
        let (mut dispatcher, handle) = Dispatcher::new(EngineConfig::default(), target.clone());
        dispatcher.handle(EngineEvent::Load(two_citations()));
        let id = dispatcher.current_response().unwrap();
        target.mount_citations(2);
        let mut notices = dispatcher.subscribe();

        handle.activate(ActivationEvent::new(id, 0));
        assert_eq!(dispatcher.process_pending(), 1);

        assert_eq!(dispatcher.expanded(), vec![0]);
        assert_eq!(dispatcher.pending_scrolls(), 0);
        assert!(target.scrolls().is_empty());
        assert!(matches!(
            notices.try_recv().unwrap(),
            EngineNotice::ExpansionChanged { .. }
        ));
        assert_eq!(
            notices.try_recv().unwrap(),
            EngineNotice::ScrollSkipped {
                response_id: id,
                anchor: "citation-1".to_string()
            }
        );
    }

    #[test]
    fn test_config_validation() {
        let zero_capacity = EngineConfig::new().notice_channel_capacity(0);
        assert!(matches!(zero_capacity.validate(), Err(Error::Config(_))));

        let slow = EngineConfig::new().scroll_delay_ms(MAX_SCROLL_DELAY_MS + 1);
        assert!(matches!(slow.validate(), Err(Error::Config(_))));

        assert!(Dispatcher::try_new(zero_capacity, NullScrollTarget).is_err());
        assert!(Dispatcher::try_new(EngineConfig::default(), NullScrollTarget).is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_activation_expands_then_scrolls() {
        let (mut dispatcher, handle, target) = setup();
        let id = load(&mut dispatcher, two_citations());
        target.mount_citations(2);

        let view = dispatcher.view().unwrap();
        let start = tokio::time::Instant::now();
        assert!(view.answer.trigger(1, &handle));

        assert!(dispatcher.step().await);
        assert_eq!(dispatcher.expanded(), vec![0]);
        assert!(target.scrolls().is_empty());
        assert_eq!(dispatcher.pending_scrolls(), 1);

        assert!(dispatcher.step().await);
        assert!(start.elapsed() >= Duration::from_millis(100));
        assert_eq!(
            target.scrolls(),
            vec![(CitationAnchor::for_index(0), ScrollOptions::default())]
        );
        assert_eq!(dispatcher.current_response(), Some(id));
    }

    #[tokio::test(start_paused = true)]
    async fn test_activate_then_manual_collapse() {
        let (mut dispatcher, handle, _target) = setup();
        let id = load(&mut dispatcher, two_citations());

        handle.activate(ActivationEvent::new(id, 1));
        dispatcher.process_pending();
        assert_eq!(dispatcher.expanded(), vec![1]);

        handle.set_expanded(id, Vec::new()).unwrap();
        dispatcher.process_pending();
        assert!(dispatcher.expanded().is_empty());

        let citations = dispatcher.view().unwrap().citations.unwrap();
        assert!(citations.entries.iter().all(|e| !e.expanded));
    }

    #[tokio::test(start_paused = true)]
    async fn test_repeated_activation_is_idempotent() {
        let (mut dispatcher, handle, _target) = setup();
        let id = load(&mut dispatcher, two_citations());
        let mut notices = dispatcher.subscribe();

        handle.activate(ActivationEvent::new(id, 0));
        handle.activate(ActivationEvent::new(id, 0));
        assert_eq!(dispatcher.process_pending(), 2);

        assert_eq!(dispatcher.expanded(), vec![0]);
        assert_eq!(
            notices.try_recv().unwrap(),
            EngineNotice::ExpansionChanged {
                response_id: id,
                indices: vec![0]
            }
        );
        assert!(notices.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_accordion_single_index_change() {
        let (mut dispatcher, handle, _target) = setup();
        let id = load(&mut dispatcher, two_citations());

        handle.set_expanded(id, 1usize).unwrap();
        dispatcher.process_pending();
        assert_eq!(dispatcher.expanded(), vec![1]);

        handle.set_expanded(id, vec![0, 1]).unwrap();
        dispatcher.process_pending();
        assert_eq!(dispatcher.expanded(), vec![0, 1]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_response_cancels_pending_scroll() {
        let (mut dispatcher, handle, target) = setup();
        let old = load(&mut dispatcher, two_citations());
        target.mount_citations(2);

        handle.activate(ActivationEvent::new(old, 1));
        dispatcher.process_pending();
        assert_eq!(dispatcher.pending_scrolls(), 1);

        let new = load(&mut dispatcher, two_citations());
        assert_ne!(old, new);
        assert_eq!(dispatcher.pending_scrolls(), 0);
        assert!(dispatcher.expanded().is_empty());

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(dispatcher.process_pending(), 0);
        assert!(target.scrolls().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_scroll_is_noop() {
        let (mut dispatcher, _handle, target) = setup();
        let old = load(&mut dispatcher, two_citations());
        load(&mut dispatcher, two_citations());
        target.mount_citations(2);

        dispatcher.handle(EngineEvent::ScrollDue(ScrollRequest::new(old, 0)));
        assert!(target.scrolls().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_activation_and_expansion_dropped() {
        let (mut dispatcher, handle, _target) = setup();
        let old = load(&mut dispatcher, two_citations());
        load(&mut dispatcher, two_citations());

        handle.activate(ActivationEvent::new(old, 0));
        handle.set_expanded(old, vec![1]).unwrap();
        dispatcher.process_pending();

        assert!(dispatcher.expanded().is_empty());
        assert_eq!(dispatcher.pending_scrolls(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_missing_scroll_target_is_silent() {
        let (mut dispatcher, handle) = Dispatcher::new(EngineConfig::default(), NullScrollTarget);
        dispatcher.handle(EngineEvent::Load(two_citations()));
        let id = dispatcher.current_response().unwrap();
        let mut notices = dispatcher.subscribe();

        handle.activate(ActivationEvent::new(id, 0));
        assert!(dispatcher.step().await);
        assert!(dispatcher.step().await);

        assert_eq!(dispatcher.expanded(), vec![0]);
        let _expanded = notices.try_recv().unwrap();
        assert_eq!(
            notices.try_recv().unwrap(),
            EngineNotice::ScrollSkipped {
                response_id: id,
                anchor: "citation-1".to_string()
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_begin_request_clears_state() {
        let (mut dispatcher, handle, target) = setup();
        let id = load(&mut dispatcher, two_citations());
        target.mount_citations(2);

        handle.activate(ActivationEvent::new(id, 0));
        handle.begin_request("Who may marry?").unwrap();
        dispatcher.process_pending();

        assert_eq!(
            dispatcher.phase(),
            &PagePhase::Loading {
                query: "Who may marry?".to_string()
            }
        );
        assert!(dispatcher.view().is_none());
        assert!(dispatcher.current_response().is_none());
        assert_eq!(dispatcher.pending_scrolls(), 0);

        tokio::time::sleep(Duration::from_millis(500)).await;
        dispatcher.process_pending();
        assert!(target.scrolls().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_request_keeps_response() {
        let (mut dispatcher, handle, _target) = setup();
        let id = load(&mut dispatcher, two_citations());

        handle.begin_request("   ").unwrap();
        dispatcher.process_pending();

        assert_eq!(dispatcher.current_response(), Some(id));
        assert_eq!(dispatcher.phase(), &PagePhase::Ready);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_request() {
        let (mut dispatcher, handle, _target) = setup();
        load(&mut dispatcher, two_citations());
        let mut notices = dispatcher.subscribe();

        handle.begin_request("steal?").unwrap();
        handle.fail("Server error: 500").unwrap();
        dispatcher.process_pending();

        assert_eq!(
            dispatcher.phase(),
            &PagePhase::Failed {
                message: "Server error: 500".to_string()
            }
        );
        assert!(dispatcher.view().is_none());
        assert_eq!(notices.try_recv().unwrap(), EngineNotice::Cleared);
        assert_eq!(
            notices.try_recv().unwrap(),
            EngineNotice::RequestFailed {
                message: "Server error: 500".to_string()
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_citations_never_interactive() {
        let (mut dispatcher, _handle, _target) = setup();
        load(
            &mut dispatcher,
            QueryResponse::new("q", "Per [1] and [2], no.", vec![]),
        );

        let view = dispatcher.view().unwrap();
        assert!(view.citations.is_none());
        assert_eq!(view.answer.references().count(), 0);
        assert_eq!(view.answer.plain_text(), "Per [1] and [2], no.");
    }

    #[tokio::test(start_paused = true)]
    async fn test_json_payload_end_to_end() {
        let (mut dispatcher, handle, target) = setup();
        let payload = r#"{
            "query": "What happens if I steal from the Sept?",
            "response": "Stealing from a sept is punished [2], see also [1].",
            "citations": [
                {"source": "Section 1.1", "text": "Theft.", "relevance_score": 0.92},
                {"source": "Section 4.2", "text": "Sacrilege.", "relevance_score": null}
            ]
        }"#;

        handle.begin_request("What happens if I steal from the Sept?").unwrap();
        handle.load(QueryResponse::from_json(payload).unwrap()).unwrap();
        dispatcher.process_pending();
        target.mount_citations(2);

        let view = dispatcher.view().unwrap();
        let citations = view.citations.as_ref().unwrap();
        assert_eq!(citations.heading, "Sources (2)");
        assert_eq!(citations.entries[1].relevance, "N/A match");

        let first_reference = view
            .answer
            .nodes
            .iter()
            .position(|n| n.is_interactive())
            .unwrap();
        assert!(view.answer.trigger(first_reference, &handle));
        assert!(dispatcher.step().await);
        assert!(dispatcher.step().await);

        assert_eq!(dispatcher.expanded(), vec![1]);
        assert_eq!(target.scrolls()[0].0.as_str(), "citation-2");
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_stops_when_handles_dropped() {
        let (dispatcher, handle, _target) = setup();
        let worker = tokio::spawn(dispatcher.run());

        handle.begin_request("q").unwrap();
        drop(handle);

        worker.await.unwrap();
    }
}
