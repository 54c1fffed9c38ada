//! Citation data model.
//!
//! - **Types**: [`Citation`], [`QueryResponse`] and the per-response
//!   identity [`ResponseId`]
//! - **Relevance**: score banding and percentage formatting
//! - **Ingress**: strict validation of incoming JSON payloads

mod ingress;
mod relevance;
mod types;

pub use ingress::{failure_message, CONNECTION_FAILURE_MESSAGE};
pub use relevance::{
    classify, format_score, relevance_badge, RelevanceBand, HIGH_THRESHOLD, MEDIUM_THRESHOLD,
    MISSING_SCORE,
};
pub use types::{Citation, QueryResponse, ResponseId};
