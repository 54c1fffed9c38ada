//! Inline reference markers.
//!
//! Answer text cites its sources with `[n]` markers, where `n` is the
//! 1-based position of a citation. [`parse_markers`] turns the text into a
//! lossless sequence of [`ReferenceToken`]s, each marker already checked
//! against the number of citations available.
//!
//! ```rust,ignore
//! use cite_xref::markers::{parse_markers, ReferenceToken};
//!
//! let tokens = parse_markers("Theft is punished under [1] and [3].", 2);
//! assert!(tokens[1].is_valid_marker());   // [1]
//! assert!(!tokens[3].is_valid_marker());  // [3] > 2 citations
//! ```

mod parser;
mod proptest;

pub use parser::{parse_markers, reassemble, ReferenceToken};
