//! Property-based tests for marker tokenization using proptest.
//!
//! These tests verify that:
//!
//! - Tokenization is lossless for arbitrary input
//! - Marker validity depends only on `1 <= n <= citation_count`
//! - Literal tokens are never empty and never contain a marker
