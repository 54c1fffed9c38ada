//! Event-driven engine tying the components together.
//!
//! ```text
//!  request layer         Dispatcher                display surface
//! +-------------+      +-------------------+      +-----------------+
//! | BeginRequest|----->| PageState         |----->| answer tree     |
//! | Load / Fail |      |   ResponseSession |      | citation list   |
//! +-------------+      |   ExpansionState  |<-----| SetExpanded     |
//!                      | ScrollCoordinator |<-----| Activate        |
//!                      +-------------------+----->| ScrollTarget    |
//!                                                 +-----------------+
//! ```
//!
//! All inbound traffic is an [`EngineEvent`] posted through an
//! [`EngineHandle`]. The [`Dispatcher`] handles events strictly one at a
//! time, so the per-response state needs no locking.

mod dispatcher;
mod events;
mod session;

pub use dispatcher::{Dispatcher, EngineConfig};
pub use events::{
    AccordionChange, ActivationEvent, ActivationSink, CollectingSink, EngineEvent, EngineHandle,
    EngineNotice, NullSink,
};
pub use session::{PagePhase, PageState, ResponseSession};
