//! Rendering of answers and citation lists.
//!
//! - [`render`] projects marker tokens into a [`DisplayTree`] in which
//!   only valid markers are interactive
//! - [`ResponseCardView`] and [`CitationListView`] bundle the rendered
//!   answer with per-citation presentation data and expansion flags

mod nodes;
mod views;

pub use nodes::{render, DisplayNode, DisplayTree};
pub use views::{CitationEntryView, CitationListView, ResponseCardView};
