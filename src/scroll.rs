//! Deferred scrolling to activated citations.
//!
//! After a marker is activated its citation expands, and shortly after
//! that the citation element is scrolled into view. There is no signal
//! for "the expansion has rendered", so the scroll runs after a fixed
//! delay. The timer task only posts a [`ScrollDue`](crate::engine::EngineEvent::ScrollDue)
//! message back to the dispatcher queue; whether the scroll still applies
//! is decided there, against the response that is current at that moment.

use std::collections::HashSet;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::runtime::Handle;
use tokio::sync::mpsc::WeakUnboundedSender;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use crate::citation::ResponseId;
use crate::engine::EngineEvent;

/// Default delay between activation and scroll.
pub const DEFAULT_SCROLL_DELAY_MS: u64 = 100;

// =============================================================================
// Anchors and options
// =============================================================================

/// Identifier of the element showing one citation (`citation-3`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CitationAnchor(String);

impl CitationAnchor {
    const PREFIX: &'static str = "citation-";

    /// Anchor for the citation at zero-based `index`.
    pub fn for_index(index: usize) -> Self {
        Self(format!("{}{}", Self::PREFIX, index + 1))
    }

    /// Recover the zero-based index from an anchor.
    pub fn index(&self) -> Option<usize> {
        self.0
            .strip_prefix(Self::PREFIX)?
            .parse::<usize>()
            .ok()?
            .checked_sub(1)
    }

    /// Anchor as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CitationAnchor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Scroll motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollBehavior {
    Smooth,
    Instant,
    Auto,
}

/// Vertical alignment of the target after scrolling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollBlock {
    Start,
    Center,
    End,
    Nearest,
}

/// How to bring a citation into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollOptions {
    pub behavior: ScrollBehavior,
    pub block: ScrollBlock,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            behavior: ScrollBehavior::Smooth,
            block: ScrollBlock::Center,
        }
    }
}

/// A scroll waiting for its delay to elapse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollRequest {
    /// Response the activation belonged to
    pub response_id: ResponseId,
    /// Zero-based citation index
    pub index: usize,
    /// Element to scroll to
    pub anchor: CitationAnchor,
}

impl ScrollRequest {
    /// Create a request for the citation at `index`.
    pub fn new(response_id: ResponseId, index: usize) -> Self {
        Self {
            response_id,
            index,
            anchor: CitationAnchor::for_index(index),
        }
    }
}

// =============================================================================
// Scroll targets
// =============================================================================

/// The display surface that can scroll elements into view.
pub trait ScrollTarget: Send + Sync {
    /// Scroll the element identified by `anchor` into view.
    ///
    /// Returns `false` when no such element exists; that is not an error.
    fn scroll_into_view(&self, anchor: &CitationAnchor, options: ScrollOptions) -> bool;
}

/// Scroll target that tracks mounted anchors and records every scroll.
#[derive(Debug, Default, Clone)]
pub struct RecordingScrollTarget {
    mounted: Arc<RwLock<HashSet<CitationAnchor>>>,
    scrolls: Arc<RwLock<Vec<(CitationAnchor, ScrollOptions)>>>,
}

impl RecordingScrollTarget {
    /// Create a target with nothing mounted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount anchors for the first `count` citations, replacing any others.
    pub fn mount_citations(&self, count: usize) {
        if let Ok(mut mounted) = self.mounted.write() {
            *mounted = (0..count).map(CitationAnchor::for_index).collect();
        }
    }

    /// Remove every mounted anchor.
    pub fn unmount_all(&self) {
        if let Ok(mut mounted) = self.mounted.write() {
            mounted.clear();
        }
    }

    /// Scrolls performed so far.
    pub fn scrolls(&self) -> Vec<(CitationAnchor, ScrollOptions)> {
        self.scrolls.read().map(|s| s.clone()).unwrap_or_default()
    }
}

impl ScrollTarget for RecordingScrollTarget {
    fn scroll_into_view(&self, anchor: &CitationAnchor, options: ScrollOptions) -> bool {
        let present = self
            .mounted
            .read()
            .map(|m| m.contains(anchor))
            .unwrap_or(false);
        if present {
            if let Ok(mut scrolls) = self.scrolls.write() {
                scrolls.push((anchor.clone(), options));
            }
        }
        present
    }
}

/// Scroll target with no elements.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullScrollTarget;

impl ScrollTarget for NullScrollTarget {
    fn scroll_into_view(&self, _anchor: &CitationAnchor, _options: ScrollOptions) -> bool {
        false
    }
}

// =============================================================================
// Coordinator
// =============================================================================

/// Schedules deferred scrolls and cancels them when the response changes.
#[derive(Debug)]
pub struct ScrollCoordinator {
    delay: Duration,
    options: ScrollOptions,
    pending: Vec<JoinHandle<()>>,
}

impl ScrollCoordinator {
    /// Create a coordinator with a fixed delay.
    pub fn new(delay: Duration, options: ScrollOptions) -> Self {
        Self {
            delay,
            options,
            pending: Vec::new(),
        }
    }

    /// Configured delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Configured scroll options.
    pub fn options(&self) -> ScrollOptions {
        self.options
    }

    /// Start the timer for `request`.
    ///
    /// When it elapses, a `ScrollDue` event is posted to `queue`. The
    /// queue is held weakly so a pending timer never keeps a dispatcher
    /// alive. Outside a tokio runtime the scroll is skipped and `false` is
    /// returned.
    pub fn schedule(
        &mut self,
        request: ScrollRequest,
        queue: WeakUnboundedSender<EngineEvent>,
    ) -> bool {
        self.pending.retain(|handle| !handle.is_finished());

        let Ok(runtime) = Handle::try_current() else {
            debug!(anchor = %request.anchor, "No tokio runtime, scroll skipped");
            return false;
        };

        let delay = self.delay;
        trace!(anchor = %request.anchor, delay_ms = delay.as_millis() as u64, "Scroll scheduled");
        let handle = runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            if let Some(queue) = queue.upgrade() {
                let _ = queue.send(EngineEvent::ScrollDue(request));
            }
        });
        self.pending.push(handle);
        true
    }

    /// Abort every pending timer. Returns how many were still running.
    pub fn cancel_all(&mut self) -> usize {
        let mut cancelled = 0;
        for handle in self.pending.drain(..) {
            if !handle.is_finished() {
                cancelled += 1;
            }
            handle.abort();
        }
        cancelled
    }

    /// Number of timers that have not fired yet.
    pub fn pending_count(&self) -> usize {
        self.pending.iter().filter(|h| !h.is_finished()).count()
    }

    /// Perform a due scroll against `target`.
    pub fn perform(&self, target: &dyn ScrollTarget, request: &ScrollRequest) -> bool {
        target.scroll_into_view(&request.anchor, self.options)
    }
}

impl Default for ScrollCoordinator {
    fn default() -> Self {
        Self::new(
            Duration::from_millis(DEFAULT_SCROLL_DELAY_MS),
            ScrollOptions::default(),
        )
    }
}

impl Drop for ScrollCoordinator {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[test]
    fn test_anchor_for_index() {
        let anchor = CitationAnchor::for_index(0);
        assert_eq!(anchor.as_str(), "citation-1");
        assert_eq!(anchor.index(), Some(0));
        assert_eq!(CitationAnchor::for_index(4).to_string(), "citation-5");
    }

    #[test]
    fn test_anchor_index_rejects_foreign_ids() {
        assert_eq!(CitationAnchor("citation-0".to_string()).index(), None);
        assert_eq!(CitationAnchor("section-2".to_string()).index(), None);
        assert_eq!(CitationAnchor("citation-x".to_string()).index(), None);
    }

    #[test]
    fn test_default_options_smooth_center() {
        let options = ScrollOptions::default();
        assert_eq!(options.behavior, ScrollBehavior::Smooth);
        assert_eq!(options.block, ScrollBlock::Center);
    }

    #[test]
    fn test_recording_target_only_scrolls_mounted() {
        let target = RecordingScrollTarget::new();
        target.mount_citations(2);

        assert!(target.scroll_into_view(&CitationAnchor::for_index(1), ScrollOptions::default()));
        assert!(!target.scroll_into_view(&CitationAnchor::for_index(2), ScrollOptions::default()));
        assert_eq!(target.scrolls().len(), 1);

        target.unmount_all();
        assert!(!target.scroll_into_view(&CitationAnchor::for_index(0), ScrollOptions::default()));
        assert_eq!(target.scrolls().len(), 1);
    }

    #[test]
    fn test_null_target() {
        assert!(!NullScrollTarget.scroll_into_view(&CitationAnchor::for_index(0), ScrollOptions::default()));
    }

    #[test]
    fn test_schedule_without_runtime_is_skipped() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut coordinator = ScrollCoordinator::default();

        assert!(!coordinator.schedule(ScrollRequest::new(ResponseId::new(), 0), tx.downgrade()));
        assert_eq!(coordinator.pending_count(), 0);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_schedule_posts_after_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut coordinator = ScrollCoordinator::default();
        let request = ScrollRequest::new(ResponseId::new(), 2);
        let start = tokio::time::Instant::now();

        assert!(coordinator.schedule(request.clone(), tx.downgrade()));
        assert_eq!(coordinator.pending_count(), 1);

        match rx.recv().await {
            Some(EngineEvent::ScrollDue(due)) => assert_eq!(due, request),
            other => panic!("Unexpected event: {:?}", other),
        }
        assert!(start.elapsed() >= Duration::from_millis(DEFAULT_SCROLL_DELAY_MS));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_all_stops_pending() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut coordinator = ScrollCoordinator::default();

        coordinator.schedule(ScrollRequest::new(ResponseId::new(), 0), tx.downgrade());
        coordinator.schedule(ScrollRequest::new(ResponseId::new(), 1), tx.downgrade());
        assert_eq!(coordinator.cancel_all(), 2);

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(rx.try_recv().is_err());
        assert_eq!(coordinator.pending_count(), 0);
    }
}
